//! Name lookup against the encoding tables.

use crate::tables::Entry;
use crate::ErrorKind;

/// A successful table lookup.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Resolved {
    /// A direct hit on a table entry.
    Entry(&'static Entry),
    /// A numbered-range match; the value comes from the token's decimal
    /// suffix and no table entry backs it.
    Indexed { value: u32 },
}

impl Resolved {
    pub(crate) fn value(&self) -> u32 {
        match self {
            Resolved::Entry(entry) => entry.value,
            Resolved::Indexed { value } => *value,
        }
    }
}

/// Looks `token` up in `table`, case insensitive.
///
/// An empty token and an exhausted table both yield `Ok(None)`; the
/// caller decides which error that is. `Err` carries the more specific
/// category produced while matching a numbered range.
///
/// Numbered ranges (an entry name ending in `#`, paired with the next
/// entry of the same name holding the range end) are only recognized
/// within the first three entries of a table, matching the layout of the
/// tables in use.
pub(crate) fn find(
    token: &[u8],
    table: &'static [Entry],
) -> Result<Option<Resolved>, ErrorKind> {
    if token.is_empty() {
        return Ok(None);
    }
    for (i, entry) in table.iter().enumerate() {
        if token.eq_ignore_ascii_case(entry.name.as_bytes()) {
            return Ok(Some(Resolved::Entry(entry)));
        }
        if i < 3 {
            if let Some(idx) = entry.name.bytes().position(|b| b == b'#') {
                return find_indexed(token, table, i, idx).map(Some);
            }
        }
    }
    Ok(None)
}

/// Matches `token` against the numbered range declared by `table[i]` and
/// `table[i + 1]`, where `idx` is the position of the `#` marker.
fn find_indexed(
    token: &[u8],
    table: &'static [Entry],
    i: usize,
    idx: usize,
) -> Result<Resolved, ErrorKind> {
    let start = &table[i];
    let end = match table.get(i + 1) {
        Some(e) if e.name == start.name && idx + 1 == start.name.len() => e,
        _ => return Err(ErrorKind::InternalError),
    };
    let prefix = &start.name.as_bytes()[..idx];
    if token.len() <= idx || !token[..idx].eq_ignore_ascii_case(prefix) {
        return Err(ErrorKind::InvalidArgumentName);
    }
    let mut number: u32 = 0;
    for &b in &token[idx..] {
        if !b.is_ascii_digit() {
            return Err(ErrorKind::UnexpectedArgumentNameCharacter);
        }
        let next = number.wrapping_mul(10).wrapping_add(u32::from(b - b'0'));
        if number > next {
            return Err(ErrorKind::ArgumentIndexOutOfRange);
        }
        number = next;
    }
    if number < start.value || number > end.value {
        return Err(ErrorKind::ArgumentIndexOutOfRange);
    }
    if number != 0 && token[idx] == b'0' {
        // leading zeros are not allowed
        return Err(ErrorKind::InvalidArgumentName);
    }
    Ok(Resolved::Indexed { value: number })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::pages::BUTTON;
    use crate::tables::pages::MONITOR_ENUMERATED;
    use crate::tables::ITEMS;

    fn value_of(token: &[u8], table: &'static [Entry]) -> Option<u32> {
        find(token, table).unwrap().map(|r| r.value())
    }

    fn error_of(token: &[u8], table: &'static [Entry]) -> ErrorKind {
        find(token, table).unwrap_err()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(value_of(b"Push", ITEMS), Some(0xA4));
        assert_eq!(value_of(b"PUSH", ITEMS), Some(0xA4));
        assert_eq!(value_of(b"push", ITEMS), Some(0xA4));
    }

    #[test]
    fn lookup_requires_a_full_match() {
        assert_eq!(value_of(b"Pus", ITEMS), None);
        assert_eq!(value_of(b"Pushx", ITEMS), None);
        assert_eq!(value_of(b"", ITEMS), None);
    }

    #[test]
    fn numbered_range_resolves_the_suffix() {
        assert_eq!(value_of(b"NoButtonPressed", BUTTON), Some(0x00));
        assert_eq!(value_of(b"Button1", BUTTON), Some(1));
        assert_eq!(value_of(b"button20", BUTTON), Some(20));
        assert_eq!(value_of(b"Button65535", BUTTON), Some(0xFFFF));
        assert_eq!(value_of(b"Enum0", MONITOR_ENUMERATED), Some(0));
    }

    #[test]
    fn numbered_range_rejections() {
        assert_eq!(error_of(b"Button0", BUTTON), ErrorKind::ArgumentIndexOutOfRange);
        assert_eq!(
            error_of(b"Button65536", BUTTON),
            ErrorKind::ArgumentIndexOutOfRange
        );
        assert_eq!(
            error_of(b"Button4294967296", BUTTON),
            ErrorKind::ArgumentIndexOutOfRange
        );
        assert_eq!(error_of(b"Button01", BUTTON), ErrorKind::InvalidArgumentName);
        assert_eq!(error_of(b"Butto1", BUTTON), ErrorKind::InvalidArgumentName);
        assert_eq!(error_of(b"Button", BUTTON), ErrorKind::InvalidArgumentName);
        assert_eq!(
            error_of(b"Button1x", BUTTON),
            ErrorKind::UnexpectedArgumentNameCharacter
        );
    }

    #[test]
    fn malformed_range_pair_is_an_internal_error() {
        use crate::tables::usage;
        use crate::tables::usage_type::NONE;
        static BROKEN: &[Entry] = &[usage("Key#", 0x01, NONE)];
        assert_eq!(error_of(b"Key1", BROKEN), ErrorKind::InternalError);
    }
}
