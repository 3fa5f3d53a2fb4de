use crate::result::ParseResult;
use crate::status::Status;

/// Error raised by the terminal stages: an attached backend or a strict
/// sequencer.
///
/// Inside the combinator core failure is a [`ParseResult`] value. It only
/// becomes a `ParseError` once nothing further can recover from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A parser produced a result outside the good set
    #[error("Parse Error: {diagnostic}")]
    Rejected { status: Status, diagnostic: String },
    /// A strict sequencer ran out of input with `pending` handlers left to
    /// apply
    #[error("Parse Error: unexpected EOF")]
    PrematureEof { pending: usize },
    /// Raised by a backend while building its output
    #[error("Parse Error: {0}")]
    Backend(String),
}

impl ParseError {
    /// Error describing a failing result, using its rendering as diagnostic
    pub fn rejected(result: &ParseResult<'_>) -> Self {
        ParseError::Rejected {
            status: result.status(),
            diagnostic: result.to_string(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        ParseError::Backend(message.into())
    }

    /// The human-readable diagnostic without the `Parse Error:` prefix
    pub fn diagnostic(&self) -> String {
        match self {
            ParseError::Rejected { diagnostic, .. } => diagnostic.clone(),
            ParseError::PrematureEof { .. } => "unexpected EOF".to_string(),
            ParseError::Backend(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_result_rendering() {
        let input = "x";
        let result = ParseResult::unexpected_char(input, input);
        let error = ParseError::rejected(&result);

        assert_eq!(error.diagnostic(), "Unexpected char \"x\"");
        assert_eq!(error.to_string(), "Parse Error: Unexpected char \"x\"");
        assert!(matches!(
            error,
            ParseError::Rejected {
                status: Status::UnexpectedChar,
                ..
            }
        ));
    }

    #[test]
    fn test_premature_eof_diagnostic() {
        let error = ParseError::PrematureEof { pending: 2 };
        assert_eq!(error.diagnostic(), "unexpected EOF");
        assert_eq!(error.to_string(), "Parse Error: unexpected EOF");
    }

    #[test]
    fn test_backend_error_message() {
        let error = ParseError::backend("number out of range");
        assert_eq!(error.diagnostic(), "number out of range");
        assert_eq!(error.to_string(), "Parse Error: number out of range");
    }
}
