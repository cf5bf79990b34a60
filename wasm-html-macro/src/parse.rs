use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use syn::{Error, Expr, LitStr, Result};

pub enum Node {
    Open(String),
    Close,
    Attr { name: String, value: String },
    AttrSlot { name: String, value: Expr },
    Event { event_type: String, handler: String },
    Text(String),
    Slot(Expr),
    Child(String),
}

struct Cursor {
    tokens: Vec<TokenTree>,
    pos: usize,
}

impl Cursor {
    fn peek(&self) -> Option<&TokenTree> {
        self.tokens.get(self.pos)
    }

    fn peek_punct(&self, ch: char) -> bool {
        matches!(self.peek(), Some(TokenTree::Punct(p)) if p.as_char() == ch)
    }

    fn span(&self) -> Span {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or_else(Span::call_site, TokenTree::span)
    }

    fn next(&mut self) -> Result<TokenTree> {
        let tt = self
            .peek()
            .cloned()
            .ok_or_else(|| Error::new(self.span(), "html!: unexpected end of input"))?;
        self.pos += 1;
        Ok(tt)
    }

    fn expect_punct(&mut self, ch: char) -> Result<()> {
        match self.next()? {
            TokenTree::Punct(p) if p.as_char() == ch => Ok(()),
            other => Err(Error::new(
                other.span(),
                format!("html!: expected `{ch}`, found `{other}`"),
            )),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.next()? {
            TokenTree::Ident(id) => Ok(id.to_string()),
            other => Err(Error::new(
                other.span(),
                format!("html!: expected identifier, found `{other}`"),
            )),
        }
    }

    /// Reads a possibly hyphenated name: `my-component` arrives as `my`, `-`, `component`.
    fn hyphenated(&mut self) -> Result<String> {
        let mut name = self.ident()?;
        while self.peek_punct('-')
            && matches!(self.tokens.get(self.pos + 1), Some(TokenTree::Ident(_)))
        {
            self.pos += 1;
            name.push('-');
            name.push_str(&self.ident()?);
        }
        Ok(name)
    }

    fn string_literal(&mut self) -> Result<String> {
        let tt = self.next()?;
        let lit: LitStr = syn::parse2(TokenStream::from(tt))?;
        Ok(lit.value())
    }
}

pub fn parse(input: TokenStream) -> Result<Vec<Node>> {
    let mut cursor = Cursor {
        tokens: input.into_iter().collect(),
        pos: 0,
    };
    let mut nodes = Vec::new();
    let mut open_tags: Vec<(String, Span)> = Vec::new();

    while let Some(tt) = cursor.peek().cloned() {
        match tt {
            TokenTree::Punct(p) if p.as_char() == '<' => {
                cursor.pos += 1;
                if cursor.peek_punct('/') {
                    cursor.pos += 1;
                    let span = cursor.span();
                    let tag = cursor.hyphenated()?;
                    cursor.expect_punct('>')?;
                    match open_tags.pop() {
                        Some((open, _)) if open == tag => nodes.push(Node::Close),
                        Some((open, _)) => {
                            return Err(Error::new(
                                span,
                                format!("html!: `</{tag}>` closes `<{open}>`"),
                            ))
                        }
                        None => {
                            return Err(Error::new(
                                span,
                                format!("html!: `</{tag}>` has no matching open tag"),
                            ))
                        }
                    }
                    continue;
                }

                let span = cursor.span();
                let tag = cursor.hyphenated()?;

                // PascalCase tags are child components: <CounterWidget /> -> child("counter-widget")
                if tag.starts_with(|c: char| c.is_uppercase()) {
                    cursor.expect_punct('/')?;
                    cursor.expect_punct('>')?;
                    nodes.push(Node::Child(pascal_to_kebab(&tag)));
                    continue;
                }

                nodes.push(Node::Open(tag.clone()));
                if parse_attributes(&mut cursor, &mut nodes)? {
                    nodes.push(Node::Close);
                } else {
                    open_tags.push((tag, span));
                }
            }
            TokenTree::Literal(_) => {
                nodes.push(Node::Text(cursor.string_literal()?));
            }
            TokenTree::Group(g) if g.delimiter() == Delimiter::Brace => {
                cursor.pos += 1;
                nodes.push(Node::Slot(syn::parse2(g.stream())?));
            }
            other => {
                return Err(Error::new(
                    other.span(),
                    format!("html!: unexpected token `{other}`"),
                ))
            }
        }
    }

    if let Some((tag, span)) = open_tags.pop() {
        return Err(Error::new(span, format!("html!: `<{tag}>` is never closed")));
    }

    Ok(nodes)
}

/// Parses attributes up to `>` or `/>`. Returns `true` for a self-closing tag.
fn parse_attributes(cursor: &mut Cursor, nodes: &mut Vec<Node>) -> Result<bool> {
    loop {
        match cursor.next()? {
            TokenTree::Punct(p) if p.as_char() == '>' => return Ok(false),
            TokenTree::Punct(p) if p.as_char() == '/' => {
                cursor.expect_punct('>')?;
                return Ok(true);
            }
            TokenTree::Ident(id) => {
                cursor.pos -= 1;
                let span = id.span();
                let name = cursor.hyphenated()?;

                if cursor.peek_punct(':') {
                    if name != "on" {
                        return Err(Error::new(
                            span,
                            format!("html!: unknown attribute namespace `{name}:`"),
                        ));
                    }
                    cursor.pos += 1;
                    let event_type = cursor.ident()?;
                    cursor.expect_punct('=')?;
                    let handler = cursor.string_literal()?;
                    nodes.push(Node::Event {
                        event_type,
                        handler,
                    });
                    continue;
                }

                cursor.expect_punct('=')?;
                match cursor.peek().cloned() {
                    Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Brace => {
                        cursor.pos += 1;
                        let value = syn::parse2(g.stream())?;
                        nodes.push(Node::AttrSlot { name, value });
                    }
                    _ => {
                        let value = cursor.string_literal()?;
                        nodes.push(Node::Attr { name, value });
                    }
                }
            }
            other => {
                return Err(Error::new(
                    other.span(),
                    format!("html!: unexpected token `{other}` in attribute position"),
                ))
            }
        }
    }
}

fn pascal_to_kebab(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
