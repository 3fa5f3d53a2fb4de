pub mod character;
pub mod satisfy;
pub mod string;
pub mod whitespace;

pub use character::char;
pub use satisfy::satisfy;
pub use string::literal;
pub use whitespace::spaces;

/// Split `input` into its first character, that character's text, and the rest
pub(crate) fn split_head(input: &str) -> Option<(char, &str, &str)> {
    let ch = input.chars().next()?;
    let (head, rest) = input.split_at(ch.len_utf8());
    Some((ch, head, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_head_ascii() {
        assert_eq!(split_head("abc"), Some(('a', "a", "bc")));
    }

    #[test]
    fn test_split_head_multibyte() {
        assert_eq!(split_head("åäö"), Some(('å', "å", "äö")));
        assert_eq!(split_head("世"), Some(('世', "世", "")));
    }

    #[test]
    fn test_split_head_empty() {
        assert_eq!(split_head(""), None);
    }
}
