//! Compiler input: source bytes plus a parameter provider.

/// Source text with `{name}` parameter resolution.
pub trait Source {
    /// Raw source bytes.
    fn data(&self) -> &[u8];

    /// Resolves a `{name}` substitution.
    ///
    /// `name` is the exact byte span between the braces; lookups are case
    /// sensitive.
    fn lookup(&self, name: &[u8]) -> Option<i64>;
}

impl Source for str {
    fn data(&self) -> &[u8] {
        self.as_bytes()
    }

    fn lookup(&self, _name: &[u8]) -> Option<i64> {
        None
    }
}

impl Source for [u8] {
    fn data(&self) -> &[u8] {
        self
    }

    fn lookup(&self, _name: &[u8]) -> Option<i64> {
        None
    }
}

/// Source text paired with a parameter set.
///
/// The last entry with a given name wins, so callers can append overrides
/// to a default set.
#[derive(Clone, Copy)]
pub struct SourceText<'a> {
    code: &'a str,
    params: &'a [(&'a str, i64)],
}

impl<'a> SourceText<'a> {
    pub fn new(code: &'a str) -> Self {
        Self { code, params: &[] }
    }

    pub fn with_params(code: &'a str, params: &'a [(&'a str, i64)]) -> Self {
        Self { code, params }
    }
}

impl Source for SourceText<'_> {
    fn data(&self) -> &[u8] {
        self.code.as_bytes()
    }

    fn lookup(&self, name: &[u8]) -> Option<i64> {
        self.params
            .iter()
            .rev()
            .find(|(n, _)| n.as_bytes() == name)
            .map(|&(_, value)| value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn last_parameter_wins() {
        let src = SourceText::with_params("", &[("x", 1), ("y", 2), ("x", 3)]);
        assert_eq!(src.lookup(b"x"), Some(3));
        assert_eq!(src.lookup(b"y"), Some(2));
        assert_eq!(src.lookup(b"z"), None);
    }

    #[test]
    fn names_match_exact_bytes() {
        let src = SourceText::with_params("", &[(" pad ", 7), ("Pad", 8)]);
        assert_eq!(src.lookup(b" pad "), Some(7));
        assert_eq!(src.lookup(b"pad"), None);
        assert_eq!(src.lookup(b"Pad"), Some(8));
    }

    #[test]
    fn plain_sources_have_no_parameters() {
        assert_eq!("0xFF".lookup(b"x"), None);
        assert_eq!(b"0xFF"[..].lookup(b"x"), None);
    }
}
