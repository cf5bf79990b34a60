use wasm_html_macro::html;

use super::Component;
use crate::Opcode;

/// State of the click counter. Starts at zero and only ever grows by one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub count: u64,
}

impl CounterState {
    pub fn label(&self) -> String {
        format!("You've clicked {} times!", self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
}

impl CounterEvent {
    pub const INCREMENT_HANDLER: &'static str = "on_increment";

    /// Maps a handler name bound in the counter markup to its event.
    pub fn from_handler(handler: &str) -> Option<Self> {
        match handler {
            Self::INCREMENT_HANDLER => Some(Self::Increment),
            _ => None,
        }
    }
}

pub fn reduce(state: CounterState, event: CounterEvent) -> CounterState {
    match event {
        CounterEvent::Increment => CounterState {
            count: state.count.saturating_add(1),
        },
    }
}

pub fn render_counter(state: &CounterState) -> Vec<Opcode> {
    html! {
        <div class="counter">
            "You've clicked "<b>{ state.count }</b>" times!"
            <span class="btn btn-primary" on:click="on_increment">"Click me!"</span>
        </div>
    }
}

/// The click counter widget, registered as `counter-widget`.
#[derive(Debug, Default)]
pub struct Counter {
    state: CounterState,
}

impl Counter {
    pub const NAME: &'static str = "counter-widget";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CounterState {
        self.state
    }
}

impl Component for Counter {
    fn render(&self) -> Vec<Opcode> {
        render_counter(&self.state)
    }

    fn handle_event(&mut self, handler: &str) -> bool {
        match CounterEvent::from_handler(handler) {
            Some(event) => {
                self.state = reduce(self.state, event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn increment_n(state: CounterState, n: u64) -> CounterState {
        (0..n).fold(state, |s, _| reduce(s, CounterEvent::Increment))
    }

    #[test]
    fn starts_at_zero() {
        let counter = Counter::new();
        assert_eq!(counter.state().count, 0);
        assert_eq!(counter.state().label(), "You've clicked 0 times!");
    }

    #[test]
    fn n_increments_count_to_n() {
        for n in [0, 1, 2, 7, 100] {
            assert_eq!(increment_n(CounterState::default(), n).count, n);
        }
    }

    #[test]
    fn increment_twice_is_increment_squared() {
        let s = CounterState { count: 41 };
        assert_eq!(
            reduce(reduce(s, CounterEvent::Increment), CounterEvent::Increment),
            increment_n(s, 2)
        );
    }

    #[test]
    fn saturates_at_max() {
        let s = CounterState { count: u64::MAX };
        assert_eq!(reduce(s, CounterEvent::Increment).count, u64::MAX);
    }

    #[test]
    fn unknown_handler_is_ignored() {
        let mut counter = Counter::new();
        assert!(!counter.handle_event("on_decrement"));
        assert!(counter.handle_event(CounterEvent::INCREMENT_HANDLER));
        assert_eq!(counter.state().count, 1);
    }

    #[test]
    fn render_binds_click_to_increment() {
        let ops = render_counter(&CounterState { count: 4 });
        assert!(ops.contains(&Opcode::Slot("4".into())));
        assert!(ops.contains(&Opcode::Event((
            "click".into(),
            CounterEvent::INCREMENT_HANDLER.into()
        ))));
    }
}
