use crate::Opcode;

use super::say_hello;

/// One card fragment per name, in list order. Duplicates are kept.
pub fn greeting_list(names: &[String]) -> Vec<Vec<Opcode>> {
    names.iter().map(|name| say_hello(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(fragment: &[Opcode]) -> String {
        let start = fragment
            .iter()
            .position(|op| *op == Opcode::Open("h5".into()))
            .unwrap();
        fragment[start..]
            .iter()
            .take_while(|op| **op != Opcode::Close)
            .filter_map(|op| match op {
                Opcode::Text(t) | Opcode::Slot(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_card_per_name_in_order() {
        let names: Vec<String> = ["Amanda", "Stefano", "Amanda", ""]
            .into_iter()
            .map(String::from)
            .collect();
        let cards = greeting_list(&names);

        assert_eq!(cards.len(), names.len());
        let headings: Vec<String> = cards.iter().map(|c| heading(c)).collect();
        assert_eq!(
            headings,
            ["Hello, Amanda!", "Hello, Stefano!", "Hello, Amanda!", "Hello, !"]
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(greeting_list(&[]).is_empty());
    }
}
