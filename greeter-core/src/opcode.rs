/// One instruction of the render protocol.
///
/// A component renders to a flat list of opcodes. `Open` starts an element and
/// `Close` ends the innermost one; attributes and event bindings apply to the
/// innermost open element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opcode {
    Open(String),
    Close,
    /// Static attribute `(name, value)`.
    Attr((String, String)),
    /// Attribute whose value was computed at render time.
    AttrSlot((String, String)),
    /// Event binding `(event_type, handler)`.
    Event((String, String)),
    Text(String),
    /// Text computed at render time.
    Slot(String),
    /// Nested component, by registered name.
    Child(String),
}

impl Opcode {
    pub fn kind(&self) -> &'static str {
        match self {
            Opcode::Open(_) => "open",
            Opcode::Close => "close",
            Opcode::Attr(_) => "attr",
            Opcode::AttrSlot(_) => "attr-slot",
            Opcode::Event(_) => "event",
            Opcode::Text(_) => "text",
            Opcode::Slot(_) => "slot",
            Opcode::Child(_) => "child",
        }
    }
}
