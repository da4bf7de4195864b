//! Process-wide reserved-name conventions (well-known identifiers and prefixes).
//!
//! These are naming conventions, not structural guarantees: nothing stops a module from binding a key that
//! starts with `_` or a registry from holding a `$`-prefixed function. The helpers below are the single
//! place those spellings are interpreted.

/// Reserved key under which a module records its declared name.
pub const PACKAGE_NAME_KEY: &str = "_name";

/// Prefix marking module keys as reserved metadata rather than bindings.
pub const RESERVED_PREFIX: char = '_';

/// Prefix marking global functions as runtime internals.
pub const INTERNAL_PREFIX: char = '$';

/// Return true if a module key is reserved metadata (starts with [`RESERVED_PREFIX`]).
///
/// ## Examples
/// ```rust
/// use introspect_core::is_reserved;
///
/// assert!(is_reserved("_name"));
/// assert!(!is_reserved("Add"));
/// ```
pub fn is_reserved(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

/// Return true if a global function name is a runtime internal (starts with [`INTERNAL_PREFIX`]).
///
/// ## Examples
/// ```rust
/// use introspect_core::is_internal;
///
/// assert!(is_internal("$index"));
/// assert!(!is_internal("print"));
/// ```
pub fn is_internal(name: &str) -> bool {
    name.starts_with(INTERNAL_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_key_is_reserved() {
        assert!(is_reserved(PACKAGE_NAME_KEY));
    }

    #[test]
    fn test_empty_names_are_neither_reserved_nor_internal() {
        assert!(!is_reserved(""));
        assert!(!is_internal(""));
    }

    #[test]
    fn test_prefix_must_be_leading() {
        assert!(!is_reserved("a_b"));
        assert!(!is_internal("a$b"));
    }
}
