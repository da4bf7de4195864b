//! Identifier spelling rules.
//!
//! A host-visible identifier is *exported* when its first Unicode scalar is an uppercase letter. Rust items
//! follow the opposite convention (`snake_case` everywhere, visibility via `pub`), so adapters respell
//! public Rust identifiers into the exported form with [`exported_spelling`].

/// Return true if `name` is exported, i.e. its first character is an uppercase letter.
///
/// ## Notes
/// - Unicode-aware: `Äpfel` and `Ωmega` are exported; `_Hidden` and `ärger` are not.
/// - The empty string is never exported.
///
/// ## Examples
/// ```rust
/// use introspect_core::is_exported;
///
/// assert!(is_exported("Name"));
/// assert!(!is_exported("secret"));
/// assert!(!is_exported(""));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Respell a Rust identifier into its exported (PascalCase) form.
///
/// Underscore-separated segments are capitalised and joined: `first_name` becomes `FirstName`. Raw
/// identifier prefixes (`r#type`) are dropped. Leading underscores are discarded, so the result is exported
/// whenever the identifier contains at least one letter with an uppercase form.
///
/// ## Examples
/// ```rust
/// use introspect_core::exported_spelling;
///
/// assert_eq!(exported_spelling("greet"), "Greet");
/// assert_eq!(exported_spelling("first_name"), "FirstName");
/// assert_eq!(exported_spelling("r#type"), "Type");
/// ```
pub fn exported_spelling(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    for segment in ident.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
