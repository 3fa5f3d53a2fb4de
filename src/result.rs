use crate::status::{GOOD_STATUSES, InvalidStatusCode, Status, StatusSet};
use std::borrow::Cow;
use std::fmt;

/// The outcome of applying a parser to some input
///
/// What `matched` and `remaining` mean depends on the status:
///
/// - `Ok`: `matched` was consumed and `remaining` follows it.
/// - `UnexpectedChar`: `matched` is the offending character and `remaining`
///   is the whole input the parser was given. It is *not* advanced, so
///   `remaining` does not necessarily follow `matched`.
/// - `UnexpectedEof`: both are empty.
/// - `ExpectedEof`: `matched` is the leftover text and `remaining` the whole
///   input the parser was given.
///
/// Failing results never advance past their input. `alt` restarts from a
/// failing result's `remaining`, so every parser must keep that contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'code> {
    matched: Cow<'code, str>,
    remaining: &'code str,
    status: Status,
}

impl<'code> ParseResult<'code> {
    pub fn new(matched: impl Into<Cow<'code, str>>, remaining: &'code str, status: Status) -> Self {
        Self {
            matched: matched.into(),
            remaining,
            status,
        }
    }

    /// Build a result from a raw status code, rejecting codes outside the
    /// defined range
    pub fn from_code(
        matched: impl Into<Cow<'code, str>>,
        remaining: &'code str,
        code: u8,
    ) -> Result<Self, InvalidStatusCode> {
        let status = Status::try_from(code)?;
        Ok(Self::new(matched, remaining, status))
    }

    pub fn ok(matched: impl Into<Cow<'code, str>>, remaining: &'code str) -> Self {
        Self::new(matched, remaining, Status::Ok)
    }

    /// `offending` is the character that did not match, `input` the text the
    /// failing parser was given
    pub fn unexpected_char(offending: &'code str, input: &'code str) -> Self {
        Self::new(offending, input, Status::UnexpectedChar)
    }

    pub fn unexpected_eof() -> Self {
        Self::new("", "", Status::UnexpectedEof)
    }

    pub fn expected_eof(leftover: &'code str, input: &'code str) -> Self {
        Self::new(leftover, input, Status::ExpectedEof)
    }

    pub fn matched(&self) -> &str {
        &self.matched
    }

    pub fn remaining(&self) -> &'code str {
        self.remaining
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether combinators treat this result as a success
    pub fn is_good(&self) -> bool {
        self.is_good_in(GOOD_STATUSES)
    }

    pub fn is_good_in(&self, good: StatusSet) -> bool {
        good.contains(self.status)
    }

    pub fn into_matched(self) -> Cow<'code, str> {
        self.matched
    }

    pub fn into_parts(self) -> (Cow<'code, str>, &'code str, Status) {
        (self.matched, self.remaining, self.status)
    }
}

impl fmt::Display for ParseResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Ok => write!(f, "Result \"{}\" \"{}\"", self.matched, self.remaining),
            Status::UnexpectedChar => write!(f, "Unexpected char \"{}\"", self.matched),
            Status::UnexpectedEof => f.write_str("Unexpected EOF"),
            Status::ExpectedEof => f.write_str("Expected EOF"),
            Status::Reserved => f.write_str("Reserved status"),
        }
    }
}

/// Join two matched pieces of `input`.
///
/// When both pieces are adjacent slices of `input` the result borrows the
/// covering slice; anything else is copied into a new string.
pub(crate) fn concat<'code>(
    input: &'code str,
    first: Cow<'code, str>,
    second: Cow<'code, str>,
) -> Cow<'code, str> {
    if let (Cow::Borrowed(a), Cow::Borrowed(b)) = (&first, &second) {
        if let Some(span) = adjacent_span(input, a, b) {
            return Cow::Borrowed(span);
        }
    }
    if first.is_empty() {
        return second;
    }
    if second.is_empty() {
        return first;
    }
    Cow::Owned(first.into_owned() + &second)
}

fn adjacent_span<'code>(input: &'code str, first: &str, second: &str) -> Option<&'code str> {
    let base = input.as_ptr() as usize;
    let start = (first.as_ptr() as usize).checked_sub(base)?;
    let middle = start + first.len();
    if second.as_ptr() as usize != base + middle {
        return None;
    }
    input.get(start..middle + second.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_each_status() {
        let input = "xyz";
        assert_eq!(ParseResult::ok("a", "bc").to_string(), "Result \"a\" \"bc\"");
        assert_eq!(
            ParseResult::unexpected_char(&input[..1], input).to_string(),
            "Unexpected char \"x\""
        );
        assert_eq!(ParseResult::unexpected_eof().to_string(), "Unexpected EOF");
        assert_eq!(
            ParseResult::expected_eof(input, input).to_string(),
            "Expected EOF"
        );
        assert_eq!(
            ParseResult::new("", "", Status::Reserved).to_string(),
            "Reserved status"
        );
    }

    #[test]
    fn test_from_code_accepts_defined_codes() {
        let result = ParseResult::from_code("a", "b", 0).unwrap();
        assert_eq!(result, ParseResult::ok("a", "b"));

        let result = ParseResult::from_code("", "", 4).unwrap();
        assert_eq!(result.status(), Status::Reserved);
    }

    #[test]
    fn test_from_code_rejects_out_of_range() {
        let err = ParseResult::from_code("a", "b", 5).unwrap_err();
        assert_eq!(err, InvalidStatusCode(5));
    }

    #[test]
    fn test_only_ok_is_good_by_default() {
        assert!(ParseResult::ok("", "").is_good());
        assert!(!ParseResult::unexpected_eof().is_good());
        assert!(!ParseResult::expected_eof("x", "x").is_good());

        let relaxed = GOOD_STATUSES.with(Status::ExpectedEof);
        assert!(ParseResult::expected_eof("x", "x").is_good_in(relaxed));
    }

    #[test]
    fn test_concat_adjacent_slices_borrows() {
        let input = "hello world";
        let joined = concat(input, Cow::Borrowed(&input[..2]), Cow::Borrowed(&input[2..5]));
        assert_eq!(joined, "hello");
        assert!(matches!(joined, Cow::Borrowed(_)));
    }

    #[test]
    fn test_concat_non_adjacent_copies() {
        let input = "hello world";
        let joined = concat(input, Cow::Borrowed(&input[..2]), Cow::Borrowed(&input[6..]));
        assert_eq!(joined, "heworld");
        assert!(matches!(joined, Cow::Owned(_)));
    }

    #[test]
    fn test_concat_with_foreign_text() {
        let input = "abc";
        let joined = concat(input, Cow::Owned("x".to_string()), Cow::Borrowed(&input[..1]));
        assert_eq!(joined, "xa");

        let joined = concat(input, Cow::Borrowed(""), Cow::Borrowed(&input[1..]));
        assert_eq!(joined, "bc");
    }
}
