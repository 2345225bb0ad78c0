//! Compiler for USB HID report descriptor source text.
//!
//! The input is a readable item language (`UsagePage(GenericDesktop)`,
//! `Collection(Application)`, `Input(Data, Var, Abs)`, …); the output is
//! the binary short-item stream defined by HID 1.11 ch. 5.8 and 6.2.2.
//! Compilation is a single pass and stops at the first error with a
//! position-carrying [`Diagnostic`].

pub mod codec;
mod compiler;
mod resolve;
pub mod sink;
pub mod source;
mod tables;

pub use sink::BufferSink;
pub use sink::NullSink;
pub use sink::Sink;
pub use sink::SizeSink;
pub use source::Source;
pub use source::SourceText;

/// Compile error categories.
///
/// The set is closed; [`ErrorKind::NoError`] is the success sentinel used
/// by [`compile_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("No error.")]
    NoError,
    #[error("Internal error.")]
    InternalError,
    #[error("Unexpected token.")]
    UnexpectedToken,
    #[error("Number overflow.")]
    NumberOverflow,
    #[error("Parameter value out of range.")]
    ParameterValueOutOfRange,
    #[error("Unexpected end of source.")]
    UnexpectedEndOfSource,
    #[error("Expected valid parameter name here.")]
    ExpectedValidParameterNameHere,
    #[error("Invalid item name.")]
    InvalidItemName,
    #[error("Missing argument.")]
    MissingArgument,
    #[error("Missing named UsagePage.")]
    MissingNamedUsagePage,
    #[error("Missing UsagePage.")]
    MissingUsagePage,
    #[error("Missing Usage for Collection.")]
    MissingUsageForCollection,
    #[error("This item has no arguments.")]
    ItemHasNoArguments,
    #[error("Unexpected item name character.")]
    UnexpectedItemNameCharacter,
    #[error("Invalid argument name.")]
    InvalidArgumentName,
    #[error("Argument value out of range.")]
    ArgumentValueOutOfRange,
    #[error("Argument index out of range.")]
    ArgumentIndexOutOfRange,
    #[error("Unexpected argument name character.")]
    UnexpectedArgumentNameCharacter,
    #[error("Unexpected unit name character.")]
    UnexpectedUnitNameCharacter,
    #[error("Invalid unit system name.")]
    InvalidUnitSystemName,
    #[error("Invalid unit name.")]
    InvalidUnitName,
    #[error("Invalid unit exponent.")]
    InvalidUnitExponent,
    #[error("Unexpected EndCollection.")]
    UnexpectedEndCollection,
    #[error("Unexpected Delimiter(Close).")]
    UnexpectedDelimiterClose,
    #[error("Unexpected Delimiter value.")]
    UnexpectedDelimiterValue,
    #[error("Missing EndCollection.")]
    MissingEndCollection,
    #[error("Missing Delimiter(Close).")]
    MissingDelimiterClose,
    #[error("Missing ReportSize.")]
    MissingReportSize,
    #[error("Missing ReportCount.")]
    MissingReportCount,
    #[error("Invalid hex value.")]
    InvalidHexValue,
    #[error("Invalid numeric value.")]
    InvalidNumericValue,
    #[error("Negative numbers are not allowed in this context.")]
    NegativeNumbersNotAllowed,
}

/// Position-carrying compile error.
///
/// `character` is the 0-based UTF-8 character offset of the offending
/// byte; `line` and `column` are 1-based and also count characters, not
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {kind}")]
pub struct Diagnostic {
    pub character: usize,
    pub line: usize,
    pub column: usize,
    pub kind: ErrorKind,
}

impl Default for Diagnostic {
    fn default() -> Self {
        Self {
            character: 0,
            line: 0,
            column: 0,
            kind: ErrorKind::NoError,
        }
    }
}

impl Diagnostic {
    /// Builds a diagnostic for the byte offset `pos` into `source`.
    ///
    /// Continuation bytes (top two bits `10`) extend the previous
    /// character and advance neither the character count nor the column;
    /// `\r` does not advance the column either.
    pub(crate) fn at(source: &[u8], pos: usize, kind: ErrorKind) -> Self {
        let mut character = 0;
        let mut line = 1;
        let mut column = 1;
        for &b in &source[..pos.min(source.len())] {
            if b & 0xC0 != 0x80 {
                character += 1;
            }
            if b == b'\n' {
                line += 1;
                column = 1;
            } else if b != b'\r' && b & 0xC0 != 0x80 {
                column += 1;
            }
        }
        Self {
            character,
            line,
            column,
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != ErrorKind::NoError
    }
}

/// Compiles `source` into `sink`.
///
/// Bytes already written when an error is detected stay in the sink; pass
/// a [`NullSink`] to validate without emitting.
pub fn compile<S, W>(source: &S, sink: &mut W) -> Result<(), Diagnostic>
where
    S: Source + ?Sized,
    W: Sink + ?Sized,
{
    compiler::Compiler::new(source, sink).run()
}

/// Returns the byte size of the compiled descriptor.
///
/// Errors are ignored; the size covers everything emitted up to the point
/// of failure.
pub fn compiled_size<S: Source + ?Sized>(source: &S) -> usize {
    let mut sink = SizeSink::default();
    let _ = compile(source, &mut sink);
    sink.position()
}

/// Compiles without emitting and returns the diagnostic.
///
/// On success the diagnostic carries [`ErrorKind::NoError`] and zero
/// positions.
pub fn compile_error<S: Source + ?Sized>(source: &S) -> Diagnostic {
    let mut sink = NullSink;
    match compile(source, &mut sink) {
        Ok(()) => Diagnostic::default(),
        Err(diag) => diag,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn diagnostic_counts_characters_not_bytes() {
        // "ü" is two bytes but one character
        let src = "# ü\n$".as_bytes();
        let diag = Diagnostic::at(src, 5, ErrorKind::UnexpectedToken);
        assert_eq!(diag.character, 4);
        assert_eq!(diag.line, 2);
        assert_eq!(diag.column, 1);
    }

    #[test]
    fn diagnostic_ignores_carriage_returns() {
        let src = b"ab\r\ncd";
        let diag = Diagnostic::at(src, 6, ErrorKind::UnexpectedToken);
        assert_eq!(diag.character, 6);
        assert_eq!(diag.line, 2);
        assert_eq!(diag.column, 3);
    }

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::at(b"$", 0, ErrorKind::UnexpectedToken);
        assert_eq!(diag.to_string(), "1:1: Unexpected token.");
    }

    #[test]
    fn compile_error_reports_no_error_on_success() {
        let diag = compile_error("0xFF ");
        assert!(!diag.is_error());
        assert_eq!(diag, Diagnostic::default());
    }

    #[test]
    fn compiled_size_matches_emitted_bytes() {
        let src = "UsagePage(GenericDesktop)\nUsage(Pointer)";
        let mut out = Vec::new();
        compile(src, &mut out).unwrap();
        assert_eq!(compiled_size(src), out.len());
    }
}
