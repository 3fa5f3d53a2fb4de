use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser
///
/// The second parser starts from the `remaining` of the first one's failing
/// result, which is the original input because failing parsers never
/// advance. Whichever result comes last is returned verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Alt<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alt<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alt { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        let first = self.parser1.parse(input);
        if first.is_good() {
            first
        } else {
            self.parser2.parse(first.remaining())
        }
    }
}

/// Extension trait to add .alt() method support for parsers
pub trait AltExt<'code>: Parser<'code> + Sized {
    fn alt<P>(self, other: P) -> Alt<Self, P>
    where
        P: Parser<'code>,
    {
        Alt::new(self, other)
    }
}

/// Implement AltExt for all parsers
impl<'code, P> AltExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Alt parser
pub fn alt<'code, P1, P2>(parser1: P1, parser2: P2) -> Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Alt::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser_fn;
    use crate::status::Status;
    use crate::utf8::char;
    use std::cell::Cell;

    #[test]
    fn test_alt_first_succeeds() {
        let parser = alt(char('a'), char('b'));
        assert_eq!(parser.parse("abc"), ParseResult::ok("a", "bc"));
    }

    #[test]
    fn test_alt_second_succeeds() {
        let parser = alt(char('a'), char('b'));
        assert_eq!(parser.parse("bcd"), ParseResult::ok("b", "cd"));
    }

    #[test]
    fn test_alt_both_fail_returns_second() {
        let parser = alt(char('a'), char('b'));
        let result = parser.parse("xyz");
        assert_eq!(result.status(), Status::UnexpectedChar);
        assert_eq!(result.matched(), "x");
        assert_eq!(result.remaining(), "xyz");
    }

    #[test]
    fn test_alt_is_left_biased() {
        let calls = Cell::new(0);
        let counted = parser_fn(|input: &str| {
            calls.set(calls.get() + 1);
            ParseResult::ok("", input)
        });

        let parser = char('1').alt(&counted);
        assert_eq!(parser.parse("12"), ParseResult::ok("1", "2"));
        assert_eq!(calls.get(), 0);

        assert_eq!(parser.parse("21"), ParseResult::ok("", "21"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_alt_after_eof_sees_empty_input() {
        let parser = char('a').alt(char('b'));
        assert_eq!(parser.parse(""), ParseResult::unexpected_eof());
    }

    #[test]
    fn test_alt_method_chain() {
        let parser = char('a').alt(char('b')).alt(char('c')).alt(char('d'));
        assert_eq!(parser.parse("d"), ParseResult::ok("d", ""));
    }
}
