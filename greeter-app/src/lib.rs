wit_bindgen::generate!({
    path: "../wit",
    world: "root-component",
});

use exports::greeter::dom::renderer::{Guest, Opcode};
use greeter_core::{App, Component};

struct GreeterApp;

impl Guest for GreeterApp {
    fn render() -> Vec<Opcode> {
        App::default().render().into_iter().map(to_wit).collect()
    }

    // The root holds no state; only the counter child reacts to clicks.
    fn handle_event(_handler: String) -> bool {
        false
    }
}

fn to_wit(op: greeter_core::Opcode) -> Opcode {
    use greeter_core::Opcode as Op;
    match op {
        Op::Open(tag) => Opcode::Open(tag),
        Op::Close => Opcode::Close,
        Op::Attr(attr) => Opcode::Attr(attr),
        Op::AttrSlot(attr) => Opcode::AttrSlot(attr),
        Op::Event(event) => Opcode::Event(event),
        Op::Text(text) => Opcode::Text(text),
        Op::Slot(text) => Opcode::Slot(text),
        Op::Child(name) => Opcode::Child(name),
    }
}

export!(GreeterApp);
