use crate::parser::Parser;
use crate::result::{ParseResult, concat};

/// Parser combinator that runs two parsers one after the other, like a
/// logical AND, and joins their matched text
///
/// If either parser fails its result is returned unchanged. A failure of the
/// second parser therefore drops whatever the first one matched.
///
/// Example:
/// ```
/// use strcomb::{Parser, SeqExt, char};
///
/// let result = char('1').seq(char('2')).parse("123");
/// assert_eq!(result.matched(), "12");
/// assert_eq!(result.remaining(), "3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Seq<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Seq<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Seq { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    fn parse(&self, input: &'code str) -> ParseResult<'code> {
        let first = self.parser1.parse(input);
        if !first.is_good() {
            return first;
        }
        let second = self.parser2.parse(first.remaining());
        if !second.is_good() {
            return second;
        }
        let (second_matched, remaining, _) = second.into_parts();
        ParseResult::ok(concat(input, first.into_matched(), second_matched), remaining)
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, P1, P2>(parser1: P1, parser2: P2) -> Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Seq::new(parser1, parser2)
}

/// Extension trait to add .seq() method support for parsers
pub trait SeqExt<'code>: Parser<'code> + Sized {
    fn seq<P>(self, other: P) -> Seq<Self, P>
    where
        P: Parser<'code>,
    {
        Seq::new(self, other)
    }
}

/// Implement SeqExt for all parsers
impl<'code, P> SeqExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser_fn;
    use crate::status::Status;
    use crate::utf8::{char, literal};
    use std::borrow::Cow;

    #[test]
    fn test_seq_both_succeed() {
        let parser = char('A').seq(char('5'));
        let result = parser.parse("A5xyz");
        assert_eq!(result, ParseResult::ok("A5", "xyz"));
    }

    #[test]
    fn test_seq_first_fails() {
        let parser = char('A').seq(char('x'));
        let result = parser.parse("Bxyz");
        assert_eq!(result.status(), Status::UnexpectedChar);
        assert_eq!(result.matched(), "B");
        assert_eq!(result.remaining(), "Bxyz");
    }

    #[test]
    fn test_seq_second_fails_reports_second() {
        let parser = char('A').seq(char('5'));
        let result = parser.parse("Axyz");
        assert_eq!(result.status(), Status::UnexpectedChar);
        assert_eq!(result.matched(), "x");
        assert_eq!(result.remaining(), "xyz");
    }

    #[test]
    fn test_seq_second_hits_eof() {
        let parser = char('A').seq(char('5'));
        assert_eq!(parser.parse("A"), ParseResult::unexpected_eof());
    }

    #[test]
    fn test_seq_chain() {
        let parser = char('A').seq(char('5')).seq(char('B'));
        assert_eq!(parser.parse("A5B"), ParseResult::ok("A5B", ""));
    }

    #[test]
    fn test_seq_function_syntax() {
        let parser = seq(literal("let"), char(' '));
        assert_eq!(parser.parse("let x"), ParseResult::ok("let ", "x"));
    }

    #[test]
    fn test_seq_borrows_adjacent_input() {
        let parser = literal("ab").seq(literal("cd"));
        let result = parser.parse("abcdef");
        assert!(matches!(result.into_matched(), Cow::Borrowed("abcd")));
    }

    #[test]
    fn test_seq_joins_foreign_text() {
        let marker = parser_fn(|input: &str| ParseResult::ok(String::from("#"), input));
        let parser = marker.seq(char('a'));
        assert_eq!(parser.parse("ab"), ParseResult::ok("#a", "b"));
    }
}
