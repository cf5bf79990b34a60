use wasm_html_macro::html;

use super::{greeting_list, Component};
use crate::config::GreeterConfig;
use crate::Opcode;

/// Root of the page: the greeting cards followed by the counter widget.
#[derive(Debug, Clone)]
pub struct App {
    names: Vec<String>,
}

impl App {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &GreeterConfig) -> Self {
        Self {
            names: config.names.clone(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&GreeterConfig::default())
    }
}

impl Component for App {
    fn render(&self) -> Vec<Opcode> {
        let mut ops = vec![
            Opcode::Open("div".into()),
            Opcode::Attr(("class".into(), "container".into())),
            Opcode::Open("div".into()),
            Opcode::Attr(("class".into(), "row".into())),
        ];

        for card in greeting_list(&self.names) {
            ops.extend(card);
        }
        ops.extend(html! { <CounterWidget /> });

        ops.push(Opcode::Close); // </div.row>
        ops.push(Opcode::Close); // </div.container>
        ops
    }

    fn handle_event(&mut self, _handler: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Counter;

    #[test]
    fn counter_follows_cards() {
        let ops = App::new(["Amanda", "Stefano", "Duncan"]).render();
        let child = ops
            .iter()
            .position(|op| *op == Opcode::Child(Counter::NAME.into()))
            .unwrap();
        let last_slot = ops
            .iter()
            .rposition(|op| *op == Opcode::Slot("Duncan".into()))
            .unwrap();
        assert!(last_slot < child);
        assert_eq!(&ops[child + 1..], &[Opcode::Close, Opcode::Close]);
    }

    #[test]
    fn default_app_greets_three_people() {
        assert_eq!(App::default().names(), ["Amanda", "Stefano", "Duncan"]);
    }
}
