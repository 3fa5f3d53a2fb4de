use crate::many::Many;
use crate::parser::Parser;
use crate::seq::{Seq, SeqExt};
use crate::utf8::character::IsChar;
use crate::utf8::whitespace::spaces;

/// `ignored`, then the content parser, then `ignored` again
pub type Surround<P, I> = Seq<Seq<I, P>, I>;

/// Wrap `parser` in runs of `ignored` on both sides
///
/// The matched text keeps the ignored runs: `surround_with(char('x'), char('|'))`
/// on `"|x|"` matches all three characters. Attach a backend to pull the
/// content back out.
pub fn surround_with<'code, P, I>(parser: P, ignored: I) -> Surround<P, I>
where
    P: Parser<'code>,
    I: Parser<'code> + Clone,
{
    ignored.clone().seq(parser).seq(ignored)
}

/// Wrap `parser` in optional runs of spaces
pub fn surround<'code, P>(parser: P) -> Surround<P, Many<IsChar>>
where
    P: Parser<'code>,
{
    surround_with(parser, spaces())
}
