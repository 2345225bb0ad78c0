//! Single-pass compiler from descriptor source text to item bytes.
//!
//! The scanner walks the input once, byte by byte. State is a small flag
//! set; a few transitions re-examine the current byte under the new state
//! (for example the parenthesis that ends both a literal and its argument
//! list), which the main loop models as an explicit retry.

use crate::codec;
use crate::resolve;
use crate::resolve::Resolved;
use crate::sink::Sink;
use crate::source::Source;
use crate::tables;
use crate::tables::Args;
use crate::tables::Entry;
use crate::Diagnostic;
use crate::ErrorKind;

const WITHIN_COMMENT: u16 = 1 << 0;
const WITHIN_ITEM: u16 = 1 << 1;
const WITHIN_ARG_LIST: u16 = 1 << 2;
const WITHIN_ARG: u16 = 1 << 3;
const WITHIN_PARAM: u16 = 1 << 4;
const WITHIN_HEX_LIT: u16 = 1 << 5;
const WITHIN_NUM_LIT: u16 = 1 << 6;
const WITHIN_UNIT_SYS: u16 = 1 << 7;
const WITHIN_UNIT_DESC: u16 = 1 << 8;
const WITHIN_UNIT: u16 = 1 << 9;
const WITHIN_UNIT_EXP: u16 = 1 << 10;
const START: u16 = 0;

// item prefixes tracked for the ReportSize/ReportCount pairing check
const REPORT_SIZE_PREFIX: u32 = 0x74;
const REPORT_COUNT_PREFIX: u32 = 0x94;

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn is_comment(b: u8) -> bool {
    matches!(b, b'#' | b';')
}

fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_item_char(b: u8) -> bool {
    b == b'_' || is_alpha(b)
}

fn is_arg_char(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

fn hex_digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'F' => Some(u32::from(b - b'A' + 10)),
        b'a'..=b'f' => Some(u32::from(b - b'a' + 10)),
        _ => None,
    }
}

pub(crate) struct Compiler<'a, S: Source + ?Sized, W: Sink + ?Sized> {
    source: &'a S,
    data: &'a [u8],
    sink: &'a mut W,
    /// Byte cursor into `data`.
    n: usize,
    flags: u16,
    /// Current item name token.
    item_start: usize,
    item_len: usize,
    /// Current argument, parameter, unit or exponent token.
    arg_start: usize,
    arg_len: usize,
    /// Prefix of the item whose argument list is open (size bits clear).
    item: u32,
    /// Argument accumulator; several flag arguments merge into it.
    arg: u32,
    /// Literal accumulator for hex and decimal numbers.
    lit: u32,
    neg_lit: bool,
    /// Commas chain further arguments (Input/Output/Feature only).
    multi_arg: bool,
    has_arg: bool,
    /// Argument table of the current item. Replaced mid-parse when a unit
    /// system or a named usage page takes over resolution.
    cur: Args,
    cur_value: u32,
    /// Sticky: the last named usage page, kept across items.
    usage_page: Option<&'static Entry>,
    /// Any UsagePage item was seen, named or numeric.
    has_usage_page: bool,
    /// Unit whose exponent is being parsed.
    unit: Option<&'static Entry>,
    col_level: i32,
    delim_level: i32,
    /// Collection level at which the last Usage item appeared.
    usage_at_level: i32,
    report_sizes: usize,
    report_counts: usize,
}

impl<'a, S: Source + ?Sized, W: Sink + ?Sized> Compiler<'a, S, W> {
    pub(crate) fn new(source: &'a S, sink: &'a mut W) -> Self {
        Self {
            source,
            data: source.data(),
            sink,
            n: 0,
            flags: START,
            item_start: 0,
            item_len: 0,
            arg_start: 0,
            arg_len: 0,
            item: 0,
            arg: 0,
            lit: 0,
            neg_lit: false,
            multi_arg: false,
            has_arg: false,
            cur: Args::None,
            cur_value: 0,
            usage_page: None,
            has_usage_page: false,
            unit: None,
            col_level: 0,
            delim_level: 0,
            usage_at_level: -1,
            report_sizes: 0,
            report_counts: 0,
        }
    }

    pub(crate) fn run(&mut self) -> Result<(), Diagnostic> {
        while self.n < self.data.len() {
            let b = self.data[self.n];
            if b == 0 {
                // a NUL ends the scan like end-of-source
                break;
            }
            log::trace!(
                "in: {}, out: {}, byte: {:?}, flags: {:#05x}",
                self.n,
                self.sink.position(),
                b as char,
                self.flags
            );
            // a `false` step changed state without consuming the byte;
            // examine it again under the new state
            while !self.step(b)? {}
            self.n += 1;
        }
        self.finish()
    }

    fn step(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if self.flags == START {
            self.on_start(b)
        } else if self.within(WITHIN_COMMENT) {
            if b == b'\r' || b == b'\n' {
                self.flags = START;
            }
            Ok(true)
        } else if self.within(WITHIN_PARAM) {
            self.on_param(b)
        } else if self.within(WITHIN_ITEM) {
            self.on_item(b)
        } else if self.within(WITHIN_ARG) {
            self.on_arg(b)
        } else if self.within(WITHIN_HEX_LIT) {
            self.on_hex_lit(b)
        } else if self.within(WITHIN_NUM_LIT) {
            self.on_num_lit(b)
        } else if self.within(WITHIN_ARG_LIST) {
            self.on_arg_list(b)
        } else {
            self.fail(self.n, ErrorKind::InternalError)
        }
    }

    fn within(&self, bits: u16) -> bool {
        self.flags & bits != 0
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.data.get(self.n + offset).copied()
    }

    fn item_token(&self) -> &'a [u8] {
        &self.data[self.item_start..self.item_start + self.item_len]
    }

    fn arg_token(&self) -> &'a [u8] {
        &self.data[self.arg_start..self.arg_start + self.arg_len]
    }

    fn fail<T>(&self, pos: usize, kind: ErrorKind) -> Result<T, Diagnostic> {
        Err(Diagnostic::at(self.data, pos, kind))
    }

    /// Resolves `token` in `table`, mapping a plain miss to `missing`.
    fn lookup(
        &self,
        token: &[u8],
        table: &'static [Entry],
        missing: ErrorKind,
    ) -> Result<Resolved, Diagnostic> {
        match resolve::find(token, table) {
            Ok(Some(resolved)) => Ok(resolved),
            Ok(None) => self.fail(self.n, missing),
            Err(kind) => self.fail(self.n, kind),
        }
    }

    /// Like [`Self::lookup`] but for tables that hold no numbered ranges.
    fn lookup_entry(
        &self,
        token: &[u8],
        table: &'static [Entry],
        missing: ErrorKind,
    ) -> Result<&'static Entry, Diagnostic> {
        match self.lookup(token, table, missing)? {
            Resolved::Entry(entry) => Ok(entry),
            Resolved::Indexed { .. } => self.fail(self.n, ErrorKind::InternalError),
        }
    }

    fn on_start(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if is_item_char(b) {
            self.flags = WITHIN_ITEM;
            self.item_start = self.n;
            self.item_len = 1;
        } else if b == b'{' {
            self.flags = WITHIN_PARAM;
            self.arg_start = self.n + 1;
            self.arg_len = 0;
        } else if b == b'0' && self.peek(1) == Some(b'x') {
            self.flags = WITHIN_HEX_LIT;
            self.start_hex_lit()?;
        } else if is_digit(b) {
            // negative literals are only allowed as arguments
            self.flags = WITHIN_NUM_LIT;
            self.lit = 0;
            return Ok(false);
        } else if b == b'-' {
            return self.fail(self.n, ErrorKind::NegativeNumbersNotAllowed);
        } else if is_comment(b) {
            self.flags = WITHIN_COMMENT;
        } else if !is_whitespace(b) {
            return self.fail(self.n, ErrorKind::UnexpectedToken);
        }
        Ok(true)
    }

    /// Consumes the `x` of a `0x` literal after checking that at least
    /// one hex digit follows.
    fn start_hex_lit(&mut self) -> Result<(), Diagnostic> {
        match self.peek(2) {
            None => self.fail(self.n + 2, ErrorKind::UnexpectedEndOfSource),
            Some(c) if hex_digit_value(c).is_none() => {
                self.fail(self.n + 2, ErrorKind::InvalidHexValue)
            }
            Some(_) => {
                self.lit = 0;
                self.n += 1;
                Ok(())
            }
        }
    }

    fn on_param(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if b != b'}' {
            self.arg_len += 1;
            return Ok(true);
        }
        self.flags &= !WITHIN_PARAM;
        let Some(value) = self.source.lookup(self.arg_token()) else {
            return self.fail(self.n, ErrorKind::ExpectedValidParameterNameHere);
        };
        if self.within(WITHIN_ARG_LIST) {
            let range = if matches!(self.cur, Args::Signed) {
                -0x8000_0000..=0x7FFF_FFFF
            } else {
                0..=0xFFFF_FFFF
            };
            if !range.contains(&value) {
                return self.fail(self.n, ErrorKind::ParameterValueOutOfRange);
            }
            // range checked above, the cast keeps the bit pattern
            self.arg |= value as u32;
            self.has_arg = true;
        } else {
            if value < 0 {
                return self.fail(self.n, ErrorKind::NegativeNumbersNotAllowed);
            }
            if value > 0xFFFF_FFFF {
                return self.fail(self.n, ErrorKind::ParameterValueOutOfRange);
            }
            codec::emit_unsigned(self.sink, value as u32);
        }
        Ok(true)
    }

    fn on_item(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if is_item_char(b) {
            self.item_len += 1;
            return Ok(true);
        }
        if !is_whitespace(b) && b != b'(' {
            return self.fail(self.n, ErrorKind::UnexpectedItemNameCharacter);
        }
        let mut b = b;
        if is_whitespace(b) {
            self.skip_whitespace_to_paren();
            b = self.data[self.n];
        }
        self.flags &= !WITHIN_ITEM;
        let entry = self.end_item()?;
        if b == b'(' {
            self.flags |= WITHIN_ARG_LIST;
            match entry.args {
                Args::None => return self.fail(self.n, ErrorKind::ItemHasNoArguments),
                Args::UnitSystems(_) => self.flags |= WITHIN_UNIT_SYS,
                _ => {}
            }
            self.item = entry.value;
            self.arg = 0;
            self.has_arg = false;
            self.multi_arg = matches!(entry.args, Args::Flags(_));
            self.cur = entry.args;
            self.cur_value = entry.value;
        } else {
            // item without an argument list
            if entry.args.requires_argument() {
                return self.fail(self.n, ErrorKind::MissingArgument);
            }
            codec::emit_unsigned(self.sink, entry.value);
        }
        Ok(true)
    }

    /// Skips a whitespace run and steps onto a directly following `(`.
    fn skip_whitespace_to_paren(&mut self) {
        while self.peek(1).is_some_and(is_whitespace) {
            self.n += 1;
        }
        if self.peek(1) == Some(b'(') {
            self.n += 1;
        }
    }

    /// Resolves the pending item name and applies the structural checks
    /// tied to it. Shared between the inline path and the end-of-source
    /// flush.
    fn end_item(&mut self) -> Result<&'static Entry, Diagnostic> {
        let token = self.item_token();
        let entry = self.lookup_entry(token, tables::ITEMS, ErrorKind::InvalidItemName)?;
        match entry.args {
            Args::Collection(_) => {
                if self.usage_at_level != self.col_level {
                    return self.fail(self.n, ErrorKind::MissingUsageForCollection);
                }
                self.col_level += 1;
            }
            Args::EndCollection => {
                if self.col_level <= 0 {
                    return self.fail(self.n, ErrorKind::UnexpectedEndCollection);
                }
                if self.report_sizes < self.report_counts {
                    return self.fail(self.n, ErrorKind::MissingReportSize);
                }
                if self.report_counts < self.report_sizes {
                    return self.fail(self.n, ErrorKind::MissingReportCount);
                }
                self.col_level -= 1;
                self.usage_at_level -= 1;
            }
            _ => {
                if token.eq_ignore_ascii_case(b"Usage") {
                    // every Collection needs a Usage at its level
                    self.usage_at_level = self.col_level;
                }
            }
        }
        Ok(entry)
    }

    fn on_arg(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if self.within(WITHIN_UNIT_DESC) {
            return self.on_unit_desc(b);
        }
        if is_arg_char(b) {
            self.arg_len += 1;
            return Ok(true);
        }
        if self.within(WITHIN_UNIT_SYS) {
            return self.on_unit_system(b);
        }
        if is_whitespace(b) || b == b')' || (self.multi_arg && b == b',') {
            return self.end_argument(b);
        }
        self.fail(self.n, ErrorKind::UnexpectedArgumentNameCharacter)
    }

    /// Resolves the pending argument name and merges its value.
    fn end_argument(&mut self, b: u8) -> Result<bool, Diagnostic> {
        self.flags &= !WITHIN_ARG;
        if matches!(self.cur, Args::Usage) {
            // substitute the usage table of the active usage page
            let table = self.usage_page.and_then(|page| match page.args {
                Args::Usages(entries) => Some(entries),
                _ => None,
            });
            let Some(table) = table else {
                let kind = if self.has_usage_page {
                    ErrorKind::MissingNamedUsagePage
                } else {
                    ErrorKind::MissingUsagePage
                };
                return self.fail(self.n, kind);
            };
            self.cur = Args::Usages(table);
        }
        let table = self.cur.entries().unwrap_or(&[]);
        let matched = self.lookup(self.arg_token(), table, ErrorKind::InvalidArgumentName)?;
        if matches!(self.cur, Args::UsagePages(_)) {
            if let Resolved::Entry(entry) = matched {
                self.usage_page = Some(entry);
            }
        }
        match matched {
            Resolved::Entry(entry) if matches!(entry.args, Args::Clear) => {
                self.arg &= !entry.value;
            }
            _ => self.arg |= matched.value(),
        }
        self.has_arg = !self.multi_arg || b != b',';
        // a closing parenthesis also ends the argument list
        Ok(b != b')')
    }

    fn on_unit_system(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if self.has_arg {
            return self.fail(self.n, ErrorKind::InternalError);
        }
        if is_whitespace(b) || b == b'(' {
            if is_whitespace(b) {
                self.skip_whitespace_to_paren();
            }
            let table = self.cur.entries().unwrap_or(&[]);
            let system =
                self.lookup_entry(self.arg_token(), table, ErrorKind::InvalidUnitSystemName)?;
            self.flags |= WITHIN_UNIT_DESC;
            self.arg = system.value;
            self.cur = system.args;
            self.cur_value = system.value;
            self.has_arg = true;
            Ok(true)
        } else if b == b')' {
            // bare unit system without a description
            self.flags &= !WITHIN_UNIT_SYS;
            Ok(false)
        } else {
            self.fail(self.n, ErrorKind::UnexpectedArgumentNameCharacter)
        }
    }

    fn on_unit_desc(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if self.within(WITHIN_UNIT) {
            return self.on_unit(b);
        }
        if self.within(WITHIN_UNIT_EXP) {
            return self.on_unit_exponent(b);
        }
        if is_alpha(b) {
            self.flags |= WITHIN_UNIT;
            self.arg_start = self.n;
            self.arg_len = 1;
        } else if b == b')' {
            self.flags &= !(WITHIN_ARG | WITHIN_UNIT_SYS | WITHIN_UNIT_DESC);
        } else if !is_whitespace(b) {
            return self.fail(self.n, ErrorKind::UnexpectedUnitNameCharacter);
        }
        Ok(true)
    }

    fn on_unit(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if is_alpha(b) {
            self.arg_len += 1;
            return Ok(true);
        }
        if !is_whitespace(b) && b != b')' && b != b'^' {
            return self.fail(self.n, ErrorKind::UnexpectedUnitNameCharacter);
        }
        self.flags &= !WITHIN_UNIT;
        let table = self.cur.entries().unwrap_or(&[]);
        let unit = self.lookup_entry(self.arg_token(), table, ErrorKind::InvalidUnitName)?;
        self.unit = Some(unit);
        if b == b'^' {
            self.flags |= WITHIN_UNIT_EXP;
            self.arg_start = self.n + 1;
            self.arg_len = 0;
            return Ok(true);
        }
        // no exponent given, default to one
        let offset = 4 * unit.value;
        self.arg &= !(0xF << offset);
        self.arg |= 1 << offset;
        Ok(false)
    }

    fn on_unit_exponent(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if b == b'-' {
            // the sign is only valid as the leading character
            if self.arg_len > 0 {
                return self.fail(self.n, ErrorKind::InvalidUnitExponent);
            }
            self.arg_len += 1;
            return Ok(true);
        }
        if is_digit(b) {
            self.arg_len += 1;
            return Ok(true);
        }
        self.flags &= !WITHIN_UNIT_EXP;
        let Some(unit) = self.unit else {
            return self.fail(self.n, ErrorKind::InternalError);
        };
        let table = unit.args.entries().unwrap_or(&[]);
        let exponent =
            self.lookup_entry(self.arg_token(), table, ErrorKind::InvalidUnitExponent)?;
        // the exponent code lands in the nibble assigned to the unit
        let offset = 4 * unit.value;
        self.arg &= !(0xF << offset);
        self.arg |= exponent.value << offset;
        Ok(false)
    }

    fn on_hex_lit(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if let Some(digit) = hex_digit_value(b) {
            let shifted = self.lit.wrapping_shl(4);
            if shifted < self.lit {
                return self.fail(self.n, ErrorKind::NumberOverflow);
            }
            self.lit = shifted | digit;
            return Ok(true);
        }
        if self.within(WITHIN_ARG_LIST) {
            if is_whitespace(b) || b == b')' || (self.multi_arg && b == b',') {
                self.flags &= !WITHIN_HEX_LIT;
                self.merge_literal()?;
                self.has_arg = !self.multi_arg || b != b',';
                return Ok(b != b')');
            }
            return self.fail(self.n, ErrorKind::InvalidHexValue);
        }
        if is_whitespace(b) {
            self.flags &= !WITHIN_HEX_LIT;
            codec::emit_unsigned(self.sink, self.lit);
            return Ok(true);
        }
        self.fail(self.n, ErrorKind::InvalidHexValue)
    }

    fn on_num_lit(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if is_digit(b) {
            let old = self.lit;
            let scaled = old.wrapping_mul(10);
            if scaled < old {
                return self.fail(self.n, ErrorKind::NumberOverflow);
            }
            let next = scaled.wrapping_add(u32::from(b - b'0'));
            if next < old {
                return self.fail(self.n, ErrorKind::NumberOverflow);
            }
            self.lit = next;
            return Ok(true);
        }
        if self.within(WITHIN_ARG_LIST) {
            if is_whitespace(b) || b == b')' || (self.multi_arg && b == b',') {
                self.flags &= !WITHIN_NUM_LIT;
                self.merge_literal()?;
                self.has_arg = !self.multi_arg || b != b',';
                return Ok(b != b')');
            }
            return self.fail(self.n, ErrorKind::InvalidNumericValue);
        }
        if is_whitespace(b) {
            self.flags &= !WITHIN_NUM_LIT;
            codec::emit_unsigned(self.sink, self.lit);
            return Ok(true);
        }
        self.fail(self.n, ErrorKind::InvalidNumericValue)
    }

    /// Merges a finished literal into the argument accumulator.
    fn merge_literal(&mut self) -> Result<(), Diagnostic> {
        if self.neg_lit {
            if self.lit > 0x8000_0000 {
                return self.fail(self.n, ErrorKind::NumberOverflow);
            }
            self.arg |= (self.lit as i32).wrapping_neg() as u32;
            self.neg_lit = false;
        } else {
            if matches!(self.cur, Args::Signed) && self.lit > 0x7FFF_FFFF {
                return self.fail(self.n, ErrorKind::NumberOverflow);
            }
            self.arg |= self.lit;
        }
        Ok(())
    }

    fn on_arg_list(&mut self, b: u8) -> Result<bool, Diagnostic> {
        if self.has_arg {
            if b == b')' {
                self.close_argument_list()?;
            } else if self.multi_arg && b == b',' {
                self.has_arg = false;
            } else if !is_whitespace(b) {
                return self.fail(self.n, ErrorKind::UnexpectedToken);
            }
            return Ok(true);
        }
        if is_item_char(b) {
            self.flags |= WITHIN_ARG;
            self.arg_start = self.n;
            self.arg_len = 1;
        } else if b == b'0' && self.peek(1) == Some(b'x') {
            self.flags |= WITHIN_HEX_LIT;
            self.start_hex_lit()?;
        } else if b == b'-' {
            if !matches!(self.cur, Args::Signed | Args::Exponents(_)) {
                return self.fail(self.n, ErrorKind::NegativeNumbersNotAllowed);
            }
            self.flags |= WITHIN_NUM_LIT;
            self.lit = 0;
            self.neg_lit = true;
        } else if is_digit(b) {
            self.flags |= WITHIN_NUM_LIT;
            self.lit = 0;
            return Ok(false);
        } else if b == b'{' {
            self.flags |= WITHIN_PARAM;
            self.arg_start = self.n + 1;
            self.arg_len = 0;
        } else if b == b')' {
            return self.fail(self.n, ErrorKind::MissingArgument);
        } else if !is_whitespace(b) {
            return self.fail(self.n, ErrorKind::UnexpectedArgumentNameCharacter);
        }
        Ok(true)
    }

    /// Emits the finished item at the closing parenthesis.
    fn close_argument_list(&mut self) -> Result<(), Diagnostic> {
        self.flags &= !(WITHIN_ARG_LIST | WITHIN_UNIT_SYS);
        match self.cur {
            Args::Signed => {
                let value = self.arg as i32;
                let prefix = self.item | codec::size_code(codec::signed_size(value));
                codec::emit_unsigned(self.sink, prefix);
                codec::emit_signed(self.sink, value);
            }
            Args::Exponents(_) => {
                // UnitExponent carries a single nibble in one data byte
                let value = self.arg as i32;
                if !(-8..=7).contains(&value) {
                    return self.fail(self.n, ErrorKind::ArgumentValueOutOfRange);
                }
                codec::emit_unsigned(self.sink, self.item | 1);
                codec::emit_unsigned(self.sink, (value & 0xF) as u32);
            }
            _ => {
                match self.cur {
                    Args::Delimiters(_) => match self.arg {
                        0 => {
                            if self.delim_level <= 0 {
                                return self.fail(self.n, ErrorKind::UnexpectedDelimiterClose);
                            }
                            self.delim_level -= 1;
                        }
                        1 => self.delim_level += 1,
                        _ => return self.fail(self.n, ErrorKind::UnexpectedDelimiterValue),
                    },
                    Args::UsagePages(_) | Args::Usage => {
                        // usage pages and usages are 16 bit
                        if self.arg > 0xFFFF {
                            return self.fail(self.n, ErrorKind::ArgumentValueOutOfRange);
                        }
                        if matches!(self.cur, Args::UsagePages(_)) {
                            self.has_usage_page = true;
                        }
                    }
                    _ if self.cur_value == REPORT_SIZE_PREFIX => self.report_sizes += 1,
                    _ if self.cur_value == REPORT_COUNT_PREFIX => self.report_counts += 1,
                    _ => {}
                }
                let prefix = self.item | codec::size_code(codec::unsigned_size(self.arg));
                codec::emit_unsigned(self.sink, prefix);
                codec::emit_unsigned(self.sink, self.arg);
            }
        }
        // commas are only valid while the argument list is open
        self.multi_arg = false;
        Ok(())
    }

    /// End-of-source: flush pending literals and items, then check the
    /// structural counters.
    fn finish(&mut self) -> Result<(), Diagnostic> {
        if self.within(WITHIN_HEX_LIT | WITHIN_NUM_LIT) {
            self.flags &= !(WITHIN_HEX_LIT | WITHIN_NUM_LIT);
            if self.flags == START {
                codec::emit_unsigned(self.sink, self.lit);
            }
        }
        if self.within(WITHIN_ITEM) {
            self.flags &= !WITHIN_ITEM;
            let entry = self.end_item()?;
            if entry.args.requires_argument() {
                return self.fail(self.n, ErrorKind::MissingArgument);
            }
            if self.flags == START {
                codec::emit_unsigned(self.sink, entry.value);
            }
        }
        if self.col_level > 0 {
            return self.fail(self.n, ErrorKind::MissingEndCollection);
        }
        if self.delim_level > 0 {
            return self.fail(self.n, ErrorKind::MissingDelimiterClose);
        }
        if self.flags != START && self.flags != WITHIN_COMMENT {
            return self.fail(self.n, ErrorKind::UnexpectedEndOfSource);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::compile;
    use crate::sink::BufferSink;
    use crate::sink::Sink;
    use crate::source::SourceText;
    use crate::Diagnostic;
    use crate::ErrorKind;
    use crate::ErrorKind::*;

    const PARAMS: &[(&str, i64)] = &[
        ("arg1", 1),
        ("arg2", 256),
        ("arg3", -1),
        ("arg4", 4294967295),
        (" arg5 ", 4294967296),
    ];

    fn run(src: &str) -> (Result<(), Diagnostic>, Vec<u8>) {
        let mut out = Vec::new();
        let source = SourceText::with_params(src, PARAMS);
        let result = compile(&source, &mut out);
        (result, out)
    }

    #[track_caller]
    fn ok(src: &str, bytes: &[u8]) {
        let (result, out) = run(src);
        assert_eq!(result, Ok(()), "source: {src:?}");
        assert_eq!(out, bytes, "source: {src:?}");
    }

    #[track_caller]
    fn err(src: &str, kind: ErrorKind, character: usize, bytes: &[u8]) {
        let (result, out) = run(src);
        let diag = result.expect_err(src);
        assert_eq!(diag.kind, kind, "source: {src:?}");
        assert_eq!(diag.character, character, "source: {src:?}");
        assert_eq!(out, bytes, "source: {src:?}");
    }

    #[test]
    fn empty_source() {
        ok("", &[]);
    }

    #[test]
    fn comments() {
        ok("#", &[]);
        ok("#\n", &[]);
        ok("#\r", &[]);
        ok("#\n0", &[0]);
        ok("#\r0", &[0]);
        ok("# text", &[]);
        ok("# text\n0", &[0]);
        ok(";", &[]);
        ok("; text\r0", &[0]);
    }

    #[test]
    fn number_literals() {
        ok("0", &[0]);
        ok("0\n", &[0]);
        ok("0\r", &[0]);
        ok("0 ", &[0]);
        ok("1", &[1]);
        ok("256", &[0, 1]);
        ok("4294967295", &[255, 255, 255, 255]);
        err("4294967296", NumberOverflow, 9, &[]);
        err("42949672950", NumberOverflow, 10, &[]);
        err("-1", NegativeNumbersNotAllowed, 0, &[]);
        err("1a", InvalidNumericValue, 1, &[]);
        err("1#", InvalidNumericValue, 1, &[]);
        err("1;", InvalidNumericValue, 1, &[]);
    }

    #[test]
    fn hex_literals() {
        ok("0x0", &[0x00]);
        ok("0x0\n", &[0x00]);
        ok("0x0 ", &[0x00]);
        ok("0x1", &[0x01]);
        ok("0xFF", &[0xFF]);
        ok("0x100", &[0x00, 0x01]);
        ok("0xFFFFFFFF", &[0xFF, 0xFF, 0xFF, 0xFF]);
        ok("0xffffffff", &[0xFF, 0xFF, 0xFF, 0xFF]);
        err("0x100000000", NumberOverflow, 10, &[]);
        err("0X0", InvalidNumericValue, 1, &[]);
        err("0x0z", InvalidHexValue, 3, &[]);
        err("0x0#", InvalidHexValue, 3, &[]);
        err("0x0;", InvalidHexValue, 3, &[]);
        err("0x", UnexpectedEndOfSource, 2, &[]);
        err("0xZ", InvalidHexValue, 2, &[]);
    }

    #[test]
    fn parameters() {
        ok("{arg1}", &[1]);
        ok("{arg1}\n", &[1]);
        ok("{arg1} ", &[1]);
        ok("{arg1}{arg1}", &[1, 1]);
        ok("{arg2}", &[0, 1]);
        err("{arg3}", NegativeNumbersNotAllowed, 5, &[]);
        ok("{arg4}", &[255, 255, 255, 255]);
        err("{ arg5 }", ParameterValueOutOfRange, 7, &[]);
        err("{arg6}", ExpectedValidParameterNameHere, 5, &[]);
        err("{ arg1}", ExpectedValidParameterNameHere, 6, &[]);
        err("{arg1 }", ExpectedValidParameterNameHere, 6, &[]);
        err("{ arg1 }", ExpectedValidParameterNameHere, 7, &[]);
        err("{arg1", UnexpectedEndOfSource, 5, &[]);
    }

    #[test]
    fn items() {
        ok("Push", &[0xA4]);
        ok("PUSH", &[0xA4]);
        ok("push", &[0xA4]);
        ok("Pop", &[0xB4]);
        err("pushx", InvalidItemName, 5, &[]);
        err("pushx ", InvalidItemName, 5, &[]);
        err("push$", UnexpectedItemNameCharacter, 4, &[]);
        err("Push(10)", ItemHasNoArguments, 4, &[]);
        err("Pushx(10)", InvalidItemName, 5, &[]);
        ok("UsagePage(GenericDesktop)", &[0x05, 0x01]);
        ok("USAGEPAGE(GENERICDESKTOP)", &[0x05, 0x01]);
        ok("  UsagePage  (  GenericDesktop  )  ", &[0x05, 0x01]);
        ok("\nUsagePage\n(\nGenericDesktop\n)\n", &[0x05, 0x01]);
        ok("\rUsagePage\r(\nGenericDesktop\r)\r", &[0x05, 0x01]);
        ok("\tUsagePage\t(\nGenericDesktop\t)\t", &[0x05, 0x01]);
        err("$", UnexpectedToken, 0, &[]);
    }

    #[test]
    fn arguments() {
        ok("UsagePage(1)", &[0x05, 0x01]);
        ok("UsagePage(0x1)", &[0x05, 0x01]);
        ok("Delimiter(Open)Delimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
        ok("Delimiter(Open) Delimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
        ok("Delimiter(Open)\nDelimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
        err("Delimiter(Open Open)\rDelimiter(Close)", UnexpectedToken, 15, &[]);
        err(
            "Delimiter(Open)\nDelimiter(Unknown)",
            InvalidArgumentName,
            33,
            &[0xA9, 0x01],
        );
        err("Delimiter(2)", UnexpectedDelimiterValue, 11, &[]);
        err("UsagePage(-1)", NegativeNumbersNotAllowed, 10, &[]);
        err("UsagePage(1", UnexpectedEndOfSource, 11, &[]);
        err("UsagePage(0x", UnexpectedEndOfSource, 12, &[]);
        err("UsagePage(0x1", UnexpectedEndOfSource, 13, &[]);
        err("UsagePage(0xZ)", InvalidHexValue, 12, &[]);
        err("UsagePage(0xAZ)", InvalidHexValue, 13, &[]);
        err("UsagePage(a$)", UnexpectedArgumentNameCharacter, 11, &[]);
        err("UsagePage(Generic Desktop)", InvalidArgumentName, 17, &[]);
        err("UsagePage(Generic\nDesktop)", InvalidArgumentName, 17, &[]);
    }

    #[test]
    fn signed_arguments() {
        ok("LogicalMaximum(1)", &[0x25, 0x01]);
        ok("LogicalMaximum(-1)", &[0x25, 0xFF]);
        ok("LogicalMaximum(127)", &[0x25, 0x7F]);
        ok("LogicalMaximum(-128)", &[0x25, 0x80]);
        ok("LogicalMaximum(128)", &[0x26, 0x80, 0x00]);
        ok("LogicalMaximum(-129)", &[0x26, 0x7F, 0xFF]);
        ok("LogicalMaximum(32767)", &[0x26, 0xFF, 0x7F]);
        ok("LogicalMaximum(-32768)", &[0x26, 0x00, 0x80]);
        ok("LogicalMaximum(32768)", &[0x27, 0x00, 0x80, 0x00, 0x00]);
        ok("LogicalMaximum(-32769)", &[0x27, 0xFF, 0x7F, 0xFF, 0xFF]);
        ok("LogicalMaximum(2147483647)", &[0x27, 0xFF, 0xFF, 0xFF, 0x7F]);
        ok("LogicalMaximum(0x7FFFFFFF)", &[0x27, 0xFF, 0xFF, 0xFF, 0x7F]);
        ok("LogicalMaximum(-2147483648)", &[0x27, 0x00, 0x00, 0x00, 0x80]);
        err("LogicalMaximum(2147483648)", NumberOverflow, 25, &[]);
        err("LogicalMaximum(0x80000000)", NumberOverflow, 25, &[]);
        err("LogicalMaximum(-2147483649)", NumberOverflow, 26, &[]);
        err("LogicalMaximum({arg4})", ParameterValueOutOfRange, 20, &[]);
    }

    #[test]
    fn unsigned_arguments() {
        err("StringMaximum(4294967296)", NumberOverflow, 23, &[]);
        err("StringMaximum(42949672950)", NumberOverflow, 24, &[]);
        err("StringMaximum(0x100000000)", NumberOverflow, 24, &[]);
        err("StringMaximum(10z)", InvalidNumericValue, 16, &[]);
        ok("ReportId(1)", &[0x85, 0x01]);
        ok("ReportId({arg4})", &[0x87, 0xFF, 0xFF, 0xFF, 0xFF]);
        err("ReportId({arg4", UnexpectedEndOfSource, 14, &[]);
        err("ReportId(-1)", NegativeNumbersNotAllowed, 9, &[]);
        err("UsagePage(0x10000)", ArgumentValueOutOfRange, 17, &[]);
        err("UsagePage({arg4})", ArgumentValueOutOfRange, 16, &[]);
        err("UsagePage({ arg5 })", ParameterValueOutOfRange, 17, &[]);
        err(
            "UsagePage(GenericDesktop)\nUsage(0x10000)",
            ArgumentValueOutOfRange,
            39,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage({arg4})",
            ArgumentValueOutOfRange,
            38,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsageMinimum(0x10000)",
            ArgumentValueOutOfRange,
            46,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsageMaximum({arg4})",
            ArgumentValueOutOfRange,
            45,
            &[0x05, 0x01],
        );
    }

    #[test]
    fn indexed_arguments() {
        ok(
            "UsagePage(Button)\nUsage(NoButtonPressed)",
            &[0x05, 0x09, 0x09, 0x00],
        );
        ok("UsagePage(Button)\nUsage(Button1)", &[0x05, 0x09, 0x09, 0x01]);
        ok(
            "UsagePage(Button)\nUsage(Button65535)",
            &[0x05, 0x09, 0x0A, 0xFF, 0xFF],
        );
        ok(
            "UsagePage(MonitorEnumeratedValues)\nUsage(Enum0)",
            &[0x05, 0x81, 0x09, 0x00],
        );
        err(
            "UsagePage(Button)\nUsage(Button65536)",
            ArgumentIndexOutOfRange,
            35,
            &[0x05, 0x09],
        );
        err(
            "UsagePage(Button)\nUsage(Button01)",
            InvalidArgumentName,
            32,
            &[0x05, 0x09],
        );
        err(
            "UsagePage(Button)\nUsage(Button1x)",
            UnexpectedArgumentNameCharacter,
            32,
            &[0x05, 0x09],
        );
        err(
            "UsagePage(Button)\nUsage(Butto1)",
            InvalidArgumentName,
            30,
            &[0x05, 0x09],
        );
        err(
            "UsagePage(Button)\nUsage(Button4294967295)",
            ArgumentIndexOutOfRange,
            40,
            &[0x05, 0x09],
        );
        err(
            "UsagePage(Button)\nUsage(Button4294967296)",
            ArgumentIndexOutOfRange,
            40,
            &[0x05, 0x09],
        );
    }

    #[test]
    fn flag_arguments() {
        ok("Input(0)", &[0x81, 0x00]);
        ok("Input(Cnst)", &[0x81, 0x01]);
        ok("Input(cnst)", &[0x81, 0x01]);
        ok("Input(CNST)", &[0x81, 0x01]);
        ok("Input(Cnst, Data)", &[0x81, 0x00]);
        ok("Input(Data, Cnst)", &[0x81, 0x01]);
        ok("Input(0,1)", &[0x81, 0x01]);
        ok("Input(2, 1, 256)", &[0x82, 0x03, 0x01]);
        ok("Input(2, {arg1}, 0x100, Rel)", &[0x82, 0x07, 0x01]);
        ok("Input(2, {arg1}, 0x100, Data)", &[0x82, 0x02, 0x01]);
        ok(
            "Input(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Buf)",
            &[0x82, 0x7F, 0x01],
        );
        ok(
            "Output(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Vol, Buf)",
            &[0x92, 0xFF, 0x01],
        );
        ok(
            "Feature(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Vol, Buf)",
            &[0xB2, 0xFF, 0x01],
        );
        err("Input(0 1)", UnexpectedToken, 8, &[]);
        err("Input(NVol)", InvalidArgumentName, 10, &[]);
        err("Input(Null", UnexpectedEndOfSource, 10, &[]);
    }

    #[test]
    fn unit_exponent_arguments() {
        ok("UnitExponent(0)", &[0x55, 0x00]);
        ok("UnitExponent(1)", &[0x55, 0x01]);
        ok("UnitExponent(7)", &[0x55, 0x07]);
        err("UnitExponent(8)", ArgumentValueOutOfRange, 14, &[]);
        ok("UnitExponent(-1)", &[0x55, 0x0F]);
        ok("UnitExponent(-8)", &[0x55, 0x08]);
        err("UnitExponent(-9)", ArgumentValueOutOfRange, 15, &[]);
        err("UnitExponent(x1)", InvalidArgumentName, 15, &[]);
    }

    #[test]
    fn unit_arguments() {
        ok("Unit(1)", &[0x65, 0x01]);
        ok("Unit(0x1)", &[0x65, 0x01]);
        ok("Unit({arg1})", &[0x65, 0x01]);
        ok("Unit(None)", &[0x65, 0x00]);
        ok("Unit(SiLin)", &[0x65, 0x01]);
        ok("Unit(None())", &[0x65, 0x00]);
        ok("Unit(SiLin())", &[0x65, 0x01]);
        ok("Unit(SiRot())", &[0x65, 0x02]);
        ok("Unit(ENGLIN())", &[0x65, 0x03]);
        ok("Unit(engrot())", &[0x65, 0x04]);
        ok("Unit(None(Length))", &[0x65, 0x10]);
        ok("Unit(SiLin(Length))", &[0x65, 0x11]);
        ok("Unit  (  SiLin  (  Length  )  )  ", &[0x65, 0x11]);
        ok("Unit(SiLin(Length Mass))", &[0x66, 0x11, 0x01]);
        ok("Unit(SiLin(Length^1Mass^1))", &[0x66, 0x11, 0x01]);
        ok("Unit(SiLin(Length Mass^1))", &[0x66, 0x11, 0x01]);
        ok("Unit(SiLin(Length^1 Mass))", &[0x66, 0x11, 0x01]);
        ok("Unit(SiLin(Length^0 Mass))", &[0x66, 0x01, 0x01]);
        ok("Unit(SiLin(Length Mass^0))", &[0x65, 0x11]);
        ok("Unit(SiLin(Length^-8Mass^7))", &[0x66, 0x81, 0x07]);
        ok("Unit(SiLin(Length^7Mass^-1))", &[0x66, 0x71, 0x0F]);
        ok("Unit(SiLin(Temp^3))", &[0x67, 0x01, 0x00, 0x03, 0x00]);
        ok(
            "Unit(SiLin(Length^2Mass^3Time^4temp^5CURRENT^6luminouS^7))",
            &[0x67, 0x21, 0x43, 0x65, 0x07],
        );
        ok(
            "Unit(SiLin(luminouS^7CURRENT^6temp^5Time^4Mass^3Length^2))",
            &[0x67, 0x21, 0x43, 0x65, 0x07],
        );
        ok(
            "Unit(SiLin(Length^2 Mass^3 Time^4 Temp^5 Current^6 Luminous^7))",
            &[0x67, 0x21, 0x43, 0x65, 0x07],
        );
        err("Unit(())", UnexpectedArgumentNameCharacter, 5, &[]);
        err("Unit()", MissingArgument, 5, &[]);
        err("Unit(Unknown())", InvalidUnitSystemName, 12, &[]);
        err("Unit(None(Length$))", UnexpectedUnitNameCharacter, 16, &[]);
        err("Unit(None(LengthX))", InvalidUnitName, 17, &[]);
        err("Unit(None(^1))", UnexpectedUnitNameCharacter, 10, &[]);
        err("Unit(None(1))", UnexpectedUnitNameCharacter, 10, &[]);
        err("Unit(None(-1))", UnexpectedUnitNameCharacter, 10, &[]);
        err("Unit(None(Length^1-))", InvalidUnitExponent, 18, &[]);
        err("Unit(None(Length^x))", InvalidUnitExponent, 17, &[]);
        err("Unit(None(Length^8))", InvalidUnitExponent, 18, &[]);
        err("Unit(None(Length^-9))", InvalidUnitExponent, 19, &[]);
        err("Unit(None(Length^-0))", InvalidUnitExponent, 19, &[]);
        err("Unit(None$())", UnexpectedArgumentNameCharacter, 9, &[]);
        err("Unit(None None)", InvalidUnitName, 14, &[]);
        err("Unit(None() None)", UnexpectedToken, 12, &[]);
        err("Unit(", UnexpectedEndOfSource, 5, &[]);
        err("Unit(None(", UnexpectedEndOfSource, 10, &[]);
        err("Unit(None()", UnexpectedEndOfSource, 11, &[]);
    }

    #[test]
    fn semantic_errors() {
        err("UsagePage", MissingArgument, 9, &[]);
        err("UsagePage ", MissingArgument, 9, &[]);
        err(
            "UsagePage(GenericDesktop)\nUsage",
            MissingArgument,
            31,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage ",
            MissingArgument,
            31,
            &[0x05, 0x01],
        );
        err("Usage", MissingArgument, 5, &[]);
        err("Usage ", MissingArgument, 5, &[]);
        err("Usage(Pointer)", MissingUsagePage, 13, &[]);
        err("Collection", MissingUsageForCollection, 10, &[]);
        err("Collection(Application)", MissingUsageForCollection, 10, &[]);
        err("EndCollection", UnexpectedEndCollection, 13, &[]);
        err("EndCollection ", UnexpectedEndCollection, 13, &[]);
        ok("UsagePage(1)\nUsage(1)", &[0x05, 0x01, 0x09, 0x01]);
        ok("UsagePage(0x1)\nUsage(0x1)", &[0x05, 0x01, 0x09, 0x01]);
        ok("UsagePage({arg1})\nUsage({arg1})", &[0x05, 0x01, 0x09, 0x01]);
        err(
            "UsagePage(1)\nUsage(Pointer)",
            MissingNamedUsagePage,
            26,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(0x1)\nUsage(Pointer)",
            MissingNamedUsagePage,
            28,
            &[0x05, 0x01],
        );
        err(
            "UsagePage({arg1})\nUsage(Pointer)",
            MissingNamedUsagePage,
            31,
            &[0x05, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection",
            MissingArgument,
            51,
            &[0x05, 0x01, 0x09, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)",
            MissingEndCollection,
            64,
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application) ",
            MissingEndCollection,
            65,
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nEndCollection",
            MissingReportCount,
            92,
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x75, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nEndCollection ",
            MissingReportCount,
            92,
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x75, 0x01],
        );
        err(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportCount(1)\nEndCollection",
            MissingReportSize,
            93,
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x95, 0x01],
        );
        ok(
            "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nReportCount(1)\nEndCollection",
            &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x75, 0x01, 0x95, 0x01, 0xC0],
        );
        err("Delimiter(0)", UnexpectedDelimiterClose, 11, &[]);
        err("Delimiter(Close)", UnexpectedDelimiterClose, 15, &[]);
        err("Delimiter(Open)", MissingDelimiterClose, 15, &[0xA9, 0x01]);
        err("Delimiter(Open) ", MissingDelimiterClose, 16, &[0xA9, 0x01]);
    }

    #[test]
    fn button_collection_report() {
        ok(
            "UsagePage(Button)\nUsage(Button20)\nCollection(Application)\nInput(Data, Var, Abs)\nEndCollection",
            &[0x05, 0x09, 0x09, 0x14, 0xA1, 0x01, 0x81, 0x02, 0xC0],
        );
    }

    /// HID 1.11 appendix D.1 style joystick descriptor with leading and
    /// trailing literals, compared byte for byte.
    #[test]
    fn joystick_descriptor() {
        let source = "0xFF
254 819 189 481 0x1242 {arg1}
UsagePage(GenericDesktop)
Usage(Joystick)
Collection(Application)
	UsagePage(GenericDesktop)
	Usage(Pointer)
	Collection(Physical)
		LogicalMinimum(-127)
		LogicalMaximum(127)
		ReportSize(8)
		ReportCount(2)
		Push
		Usage(X)
		Usage(Y)
		Input(Data, Var, Abs)
		Usage(HatSwitch)
		LogicalMinimum(0)
		LogicalMaximum(3)
		PhysicalMinimum(0)
		PhysicalMaximum(270)
		Unit(EngRot(Length)) # Degrees
		ReportCount(1)
		ReportSize(4)
		Input(Data, Var, Abs, Null)
		LogicalMinimum(0)
		LogicalMaximum(1)
		ReportCount(2)
		ReportSize(1)
		UsagePage(Button)
		UsageMinimum(Button1)
		UsageMaximum(Button2)
		Unit(None())
		Input(Data, Var, Abs)
	EndCollection
	UsageMinimum(Button3)
	UsageMinimum(Button4)
	Input(Data, Var, Abs)
	# use LogicalMinimum/LogicalMaximum from before Push
	Pop
	UsagePage(SimulationControls)
	Usage(Throttle)
	ReportCount({arg1})
	ReportSize(1)
	Input(Data, Var, Abs)
EndCollection
0xFF
";
        let expected: &[u8] = &[
            0xFF, 0xFE, 0x33, 0x03, 0xBD, 0xE1, 0x01, 0x42, 0x12, 0x01, 0x05, 0x01, 0x09, 0x04,
            0xA1, 0x01, 0x05, 0x01, 0x09, 0x01, 0xA1, 0x00, 0x15, 0x81, 0x25, 0x7F, 0x75, 0x08,
            0x95, 0x02, 0xA4, 0x09, 0x30, 0x09, 0x31, 0x81, 0x02, 0x09, 0x39, 0x15, 0x00, 0x25,
            0x03, 0x35, 0x00, 0x46, 0x0E, 0x01, 0x65, 0x14, 0x95, 0x01, 0x75, 0x04, 0x81, 0x42,
            0x15, 0x00, 0x25, 0x01, 0x95, 0x02, 0x75, 0x01, 0x05, 0x09, 0x19, 0x01, 0x29, 0x02,
            0x65, 0x00, 0x81, 0x02, 0xC0, 0x19, 0x03, 0x19, 0x04, 0x81, 0x02, 0xB4, 0x05, 0x02,
            0x09, 0xBB, 0x95, 0x01, 0x75, 0x01, 0x81, 0x02, 0xC0, 0xFF,
        ];
        ok(source, expected);
    }

    /// Substituting random bytes into a valid program must neither panic
    /// nor write past the output buffer.
    #[test]
    fn mutated_input_stays_bounded() {
        let base = "0xFF
UsagePage(GenericDesktop)
Usage(Joystick)
Collection(Application)
	LogicalMinimum(-127)
	LogicalMaximum(127)
	ReportSize(8)
	ReportCount(2)
	Usage(X)
	Usage(Y)
	Input(Data, Var, Abs)
EndCollection
{arg1}
";
        let subs = b" _#;^-,aAx09(){}\0";
        let mut state: u32 = 0x2545_F491;
        let mut rand = move |limit: usize| {
            // xorshift32, deterministic across runs
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as usize % limit
        };
        for _ in 0..2000 {
            let mut input = base.as_bytes().to_vec();
            for _ in 0..10 {
                let at = rand(input.len());
                input[at] = subs[rand(subs.len())];
            }
            let text = String::from_utf8_lossy(&input).into_owned();
            let source = SourceText::with_params(&text, PARAMS);
            let mut buf = [0u8; 64];
            let mut sink = BufferSink::new(&mut buf);
            let _ = compile(&source, &mut sink);
            assert!(sink.position() <= 64);
        }
    }
}
