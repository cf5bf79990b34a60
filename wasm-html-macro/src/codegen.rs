use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::Node;

/// Expands parsed nodes into a `Vec<Opcode>` expression. `Opcode` is resolved at
/// the call site, so any enum with matching variants works.
pub fn generate(nodes: Vec<Node>) -> TokenStream {
    let items = nodes.into_iter().map(|node| match node {
        Node::Open(tag) => quote! { Opcode::Open(#tag.into()) },
        Node::Close => quote! { Opcode::Close },
        Node::Attr { name, value } => quote! { Opcode::Attr((#name.into(), #value.into())) },
        Node::AttrSlot { name, value } => quote! {
            Opcode::AttrSlot((#name.into(), ::std::string::ToString::to_string(&(#value))))
        },
        Node::Event {
            event_type,
            handler,
        } => quote! { Opcode::Event((#event_type.into(), #handler.into())) },
        Node::Text(text) => quote! { Opcode::Text(#text.into()) },
        Node::Slot(expr) => quote! {
            Opcode::Slot(::std::string::ToString::to_string(&(#expr)))
        },
        Node::Child(name) => quote! { Opcode::Child(#name.into()) },
    });

    quote! {
        ::std::vec![#(#items),*]
    }
}
