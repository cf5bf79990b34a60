wit_bindgen::generate!({
    path: "../wit",
    world: "counter-component",
});

use std::cell::RefCell;

use exports::greeter::dom::renderer::{Guest, Opcode};
use greeter_core::{Component, Counter};

thread_local! {
    static COUNTER: RefCell<Counter> = RefCell::new(Counter::new());
}

struct CounterWidget;

impl Guest for CounterWidget {
    fn render() -> Vec<Opcode> {
        COUNTER.with_borrow(|counter| counter.render().into_iter().map(to_wit).collect())
    }

    fn handle_event(handler: String) -> bool {
        COUNTER.with_borrow_mut(|counter| counter.handle_event(&handler))
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

export!(CounterWidget);
