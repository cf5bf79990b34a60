use crate::error::{HostError, Result};
use crate::Opcode;

slotmap::new_key_type! {
    /// Handle to a mounted component instance inside a [`Host`](super::Host).
    /// Stays invalid after the instance is dropped, even if its slot is reused.
    pub struct InstanceId;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Boundary of a component instance; `children` is its last render.
    Component {
        instance: InstanceId,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub events: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(tag: String) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            events: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn handler(&self, event_type: &str) -> Option<&str> {
        self.events
            .iter()
            .find(|(e, _)| e == event_type)
            .map(|(_, h)| h.as_str())
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Component { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            _ => {
                let mut out = String::new();
                collect_text(self.children(), &mut out);
                out
            }
        }
    }

    /// Elements in document order, descending through component boundaries.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(std::slice::from_ref(self), &mut out);
        out
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// The first element handling `event_type` with `handler`, together with
    /// the innermost component instance that rendered it.
    pub(crate) fn find_handler(
        &self,
        owner: Option<InstanceId>,
        event_type: &str,
        handler: &str,
    ) -> Option<InstanceId> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => {
                if el.handler(event_type) == Some(handler) {
                    return owner;
                }
                el.children
                    .iter()
                    .find_map(|c| c.find_handler(owner, event_type, handler))
            }
            Node::Component { instance, children } => children
                .iter()
                .find_map(|c| c.find_handler(Some(*instance), event_type, handler)),
        }
    }

    pub(crate) fn component_children_mut(&mut self, id: InstanceId) -> Option<&mut Vec<Node>> {
        match self {
            Node::Text(_) => None,
            Node::Component { instance, children } => {
                if *instance == id {
                    Some(children)
                } else {
                    children
                        .iter_mut()
                        .find_map(|c| c.component_children_mut(id))
                }
            }
            Node::Element(el) => el
                .children
                .iter_mut()
                .find_map(|c| c.component_children_mut(id)),
        }
    }

    /// Every component instance in this subtree, outermost first.
    pub(crate) fn instances(&self, out: &mut Vec<InstanceId>) {
        if let Node::Component { instance, .. } = self {
            out.push(*instance);
        }
        for child in self.children() {
            child.instances(out);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            _ => collect_text(node.children(), out),
        }
    }
}

fn collect_elements<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            out.push(el);
        }
        collect_elements(node.children(), out);
    }
}

/// Moves the outermost component boundaries out of `nodes`, in document order.
pub(crate) fn take_components(nodes: Vec<Node>, out: &mut Vec<(InstanceId, Vec<Node>)>) {
    for node in nodes {
        match node {
            Node::Component { instance, children } => out.push((instance, children)),
            Node::Element(el) => take_components(el.children, out),
            Node::Text(_) => {}
        }
    }
}

/// Checks that an opcode stream is well formed before it touches a document.
pub(crate) fn validate(ops: &[Opcode]) -> Result<()> {
    let mut open: Vec<&str> = Vec::new();
    for op in ops {
        match op {
            Opcode::Open(tag) => open.push(tag),
            Opcode::Close => {
                open.pop().ok_or(HostError::UnbalancedClose)?;
            }
            Opcode::Attr(_) | Opcode::AttrSlot(_) | Opcode::Event(_) if open.is_empty() => {
                return Err(HostError::OutsideElement(op.kind()));
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(tag) => Err(HostError::UnclosedElement(tag.to_string())),
        None => Ok(()),
    }
}

/// Applies an opcode stream, asking `child` to mount each nested component.
pub(crate) fn build<F>(ops: Vec<Opcode>, mut child: F) -> Result<Vec<Node>>
where
    F: FnMut(&str) -> Result<Node>,
{
    let mut roots = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    fn append(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    for op in ops {
        match op {
            Opcode::Open(tag) => stack.push(Element::new(tag)),
            Opcode::Close => {
                let el = stack.pop().ok_or(HostError::UnbalancedClose)?;
                append(&mut stack, &mut roots, Node::Element(el));
            }
            Opcode::Attr(attr) | Opcode::AttrSlot(attr) => stack
                .last_mut()
                .ok_or(HostError::OutsideElement("attr"))?
                .attrs
                .push(attr),
            Opcode::Event(event) => stack
                .last_mut()
                .ok_or(HostError::OutsideElement("event"))?
                .events
                .push(event),
            Opcode::Text(text) | Opcode::Slot(text) => {
                append(&mut stack, &mut roots, Node::Text(text))
            }
            Opcode::Child(name) => {
                let node = child(&name)?;
                append(&mut stack, &mut roots, node);
            }
        }
    }

    match stack.pop() {
        Some(el) => Err(HostError::UnclosedElement(el.tag)),
        None => Ok(roots),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<InstanceId> {
        let mut keys = SlotMap::<InstanceId, ()>::with_key();
        (0..n).map(|_| keys.insert(())).collect()
    }

    fn no_children(name: &str) -> Result<Node> {
        Err(HostError::UnknownComponent(name.to_string()))
    }

    #[test]
    fn builds_nested_elements() {
        let ops = vec![
            Opcode::Open("div".into()),
            Opcode::Attr(("class".into(), "counter".into())),
            Opcode::Text("You've clicked ".into()),
            Opcode::Open("b".into()),
            Opcode::Slot("2".into()),
            Opcode::Close,
            Opcode::Text(" times!".into()),
            Opcode::Close,
        ];
        let nodes = build(ops, no_children).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text_content(), "You've clicked 2 times!");
        let div = nodes[0].elements()[0];
        assert!(div.has_class("counter"));
        assert_eq!(div.children.len(), 3);
    }

    #[test]
    fn child_opcode_calls_mount_hook() {
        let ops = vec![
            Opcode::Open("div".into()),
            Opcode::Child("counter-widget".into()),
            Opcode::Close,
        ];
        let child = ids(1)[0];
        let mut seen = Vec::new();
        let nodes = build(ops, |name| {
            seen.push(name.to_string());
            Ok(Node::Component {
                instance: child,
                children: vec![Node::Text("x".into())],
            })
        })
        .unwrap();
        assert_eq!(seen, ["counter-widget"]);
        let mut found = Vec::new();
        nodes[0].instances(&mut found);
        assert_eq!(found, [child]);
    }

    #[test]
    fn malformed_streams_are_rejected() {
        assert!(matches!(
            validate(&[Opcode::Close]),
            Err(HostError::UnbalancedClose)
        ));
        assert!(matches!(
            validate(&[Opcode::Attr(("a".into(), "b".into()))]),
            Err(HostError::OutsideElement("attr"))
        ));
        assert!(matches!(
            validate(&[Opcode::Open("p".into())]),
            Err(HostError::UnclosedElement(tag)) if tag == "p"
        ));
        assert!(matches!(
            build(vec![Opcode::Open("p".into())], no_children),
            Err(HostError::UnclosedElement(_))
        ));
    }

    #[test]
    fn find_handler_reports_owning_instance() {
        let keys = ids(2);
        let tree = Node::Component {
            instance: keys[0],
            children: vec![Node::Component {
                instance: keys[1],
                children: vec![Node::Element(Element {
                    tag: "span".into(),
                    attrs: vec![],
                    events: vec![("click".into(), "on_increment".into())],
                    children: vec![],
                })],
            }],
        };
        assert_eq!(
            tree.find_handler(None, "click", "on_increment"),
            Some(keys[1])
        );
        assert_eq!(tree.find_handler(None, "click", "on_other"), None);
    }

    #[test]
    fn finds_nested_component_subtree() {
        let keys = ids(3);
        let mut tree = Node::Component {
            instance: keys[0],
            children: vec![Node::Element(Element {
                tag: "div".into(),
                attrs: vec![],
                events: vec![],
                children: vec![Node::Component {
                    instance: keys[1],
                    children: vec![Node::Text("inner".into())],
                }],
            })],
        };
        let inner = tree.component_children_mut(keys[1]).unwrap();
        inner.push(Node::Text("!".into()));
        assert_eq!(tree.text_content(), "inner!");
        assert_eq!(tree.component_children_mut(keys[0]).map(|c| c.len()), Some(1));
        assert!(tree.component_children_mut(keys[2]).is_none());
    }
}
