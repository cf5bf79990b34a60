mod app;
mod counter;
mod greeting_list;
mod say_hello;

pub use app::App;
pub use counter::{reduce, render_counter, Counter, CounterEvent, CounterState};
pub use greeting_list::greeting_list;
pub use say_hello::say_hello;

use crate::Opcode;

/// A renderable unit of the page.
///
/// `render` is a pure projection of the component's current state.
/// `handle_event` receives the handler name bound in the rendered markup and
/// returns `true` when state changed and the component must be re-rendered.
pub trait Component {
    fn render(&self) -> Vec<Opcode>;

    fn handle_event(&mut self, handler: &str) -> bool;
}
