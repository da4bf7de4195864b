//! Render source types as compact, human-readable spellings.
//!
//! `quote!(#ty).to_string()` separates every token with a space (`Vec < String >`); doc output wants the
//! spelling a person would write (`Vec<String>`). `Self` is substituted with the implementing type's name.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{Receiver, Type};

/// Render `ty`, replacing `Self` with `self_name`.
pub(crate) fn render_type(ty: &Type, self_name: &str) -> String {
    let mut out = String::new();
    render_tokens(ty.to_token_stream(), self_name, &mut out);
    out
}

/// Render a method receiver as the parameter type it stands for (`&self` → `&User`).
pub(crate) fn render_receiver(receiver: &Receiver, self_name: &str) -> String {
    render_type(&receiver.ty, self_name)
}

fn render_tokens(tokens: TokenStream, self_name: &str, out: &mut String) {
    let mut prev_word = false;
    for tt in tokens {
        match tt {
            TokenTree::Ident(ident) => {
                if prev_word {
                    out.push(' ');
                }
                if ident == "Self" {
                    out.push_str(self_name);
                } else {
                    out.push_str(&ident.to_string());
                }
                prev_word = true;
            }
            TokenTree::Literal(lit) => {
                if prev_word {
                    out.push(' ');
                }
                out.push_str(&lit.to_string());
                prev_word = true;
            }
            TokenTree::Punct(punct) => {
                match punct.as_char() {
                    ',' => out.push_str(", "),
                    ';' => out.push_str("; "),
                    '=' => out.push_str(" = "),
                    '+' => out.push_str(" + "),
                    '-' if punct.spacing() == Spacing::Joint => out.push_str(" -"),
                    '>' if out.ends_with(" -") => out.push_str("> "),
                    c => out.push(c),
                }
                prev_word = false;
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                render_tokens(group.stream(), self_name, out);
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push_str(close);
                prev_word = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(src: &str) -> String {
        let ty: Type = syn::parse_str(src).expect("type should parse");
        render_type(&ty, "User")
    }

    #[test]
    fn test_plain_and_generic_types() {
        assert_eq!(render("String"), "String");
        assert_eq!(render("Vec < String >"), "Vec<String>");
        assert_eq!(render("HashMap<String, Vec<u8>>"), "HashMap<String, Vec<u8>>");
        assert_eq!(render("std::rc::Rc<str>"), "std::rc::Rc<str>");
    }

    #[test]
    fn test_references_and_lifetimes() {
        assert_eq!(render("&str"), "&str");
        assert_eq!(render("&'static str"), "&'static str");
        assert_eq!(render("&mut Vec<i64>"), "&mut Vec<i64>");
    }

    #[test]
    fn test_tuples_arrays_and_fn_types() {
        assert_eq!(render("(i64, bool)"), "(i64, bool)");
        assert_eq!(render("[u8; 4]"), "[u8; 4]");
        assert_eq!(render("fn(i64) -> bool"), "fn(i64) -> bool");
        assert_eq!(render("Box<dyn Fn(&str) -> String + Send>"), "Box<dyn Fn(&str) -> String + Send>");
    }

    #[test]
    fn test_self_is_substituted() {
        assert_eq!(render("Option<Self>"), "Option<User>");
        assert_eq!(render("&Self"), "&User");
    }

    #[test]
    fn test_receivers() {
        let item: syn::ItemImpl = syn::parse_str("impl User { fn f(&mut self) {} }").expect("impl should parse");
        let Some(syn::ImplItem::Fn(method)) = item.items.first() else {
            panic!("expected a method");
        };
        let Some(syn::FnArg::Receiver(receiver)) = method.sig.inputs.first() else {
            panic!("expected a receiver");
        };
        assert_eq!(render_receiver(receiver, "User"), "&mut User");
    }
}
