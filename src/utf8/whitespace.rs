use crate::many::{Many, many};
use crate::utf8::character::{IsChar, char};

/// Zero or more spaces, the default ignored run used by `surround`
pub fn spaces() -> Many<IsChar> {
    many(char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::result::ParseResult;

    #[test]
    fn test_consumes_only_spaces() {
        assert_eq!(spaces().parse("   x "), ParseResult::ok("   ", "x "));
    }

    #[test]
    fn test_tabs_are_not_spaces() {
        assert_eq!(spaces().parse("\tx"), ParseResult::ok("", "\tx"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(spaces().parse(""), ParseResult::ok("", ""));
    }
}
