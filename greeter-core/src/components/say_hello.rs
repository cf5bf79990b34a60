use wasm_html_macro::html;

use crate::Opcode;

/// Renders one greeting card. Any name is accepted, including the empty
/// string, and is interpolated verbatim. Image and caption are fixed.
pub fn say_hello(to: &str) -> Vec<Opcode> {
    html! {
        <div class="card">
            <img src="https://picsum.photos/300/200" class="card-img-top" alt="..." />
            <div class="card-body">
                <h5 class="card-title">"Hello, "{ to }"!"</h5>
                <p class="card-text">"Welcome to the course."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn card_markup() {
        let ops = say_hello("Amanda");
        assert_eq!(
            ops,
            vec![
                Opcode::Open("div".into()),
                Opcode::Attr(("class".into(), "card".into())),
                Opcode::Open("img".into()),
                Opcode::Attr(("src".into(), "https://picsum.photos/300/200".into())),
                Opcode::Attr(("class".into(), "card-img-top".into())),
                Opcode::Attr(("alt".into(), "...".into())),
                Opcode::Close,
                Opcode::Open("div".into()),
                Opcode::Attr(("class".into(), "card-body".into())),
                Opcode::Open("h5".into()),
                Opcode::Attr(("class".into(), "card-title".into())),
                Opcode::Text("Hello, ".into()),
                Opcode::Slot("Amanda".into()),
                Opcode::Text("!".into()),
                Opcode::Close,
                Opcode::Open("p".into()),
                Opcode::Attr(("class".into(), "card-text".into())),
                Opcode::Text("Welcome to the course.".into()),
                Opcode::Close,
                Opcode::Close,
                Opcode::Close,
            ]
        );
    }

    #[test]
    fn only_the_name_is_dynamic() {
        let ops = say_hello("");
        assert_eq!(ops.len(), 21);
        let dynamic: Vec<&Opcode> = ops
            .iter()
            .filter(|op| matches!(op, Opcode::Slot(_) | Opcode::AttrSlot(_)))
            .collect();
        assert_eq!(dynamic, [&Opcode::Slot(String::new())]);
    }
}
