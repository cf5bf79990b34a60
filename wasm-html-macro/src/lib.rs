//! `html!` builds a flat opcode list from JSX-like markup.
//!
//! ```ignore
//! let ops: Vec<Opcode> = html! {
//!     <div class="counter">
//!         "You've clicked "<b>{ count }</b>" times!"
//!         <span on:click="on_increment">"Click me!"</span>
//!         <ChildWidget />
//!     </div>
//! };
//! ```
//!
//! Text literals become `Opcode::Text`, `{ expr }` becomes `Opcode::Slot` with the
//! value's `Display` output, `name={ expr }` becomes `Opcode::AttrSlot`, and
//! PascalCase tags become `Opcode::Child` with a kebab-case name.

mod codegen;
mod parse;

use proc_macro::TokenStream;

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
    match parse::parse(input.into()) {
        Ok(nodes) => codegen::generate(nodes).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
