/// Outcome code carried by every [`ParseResult`](crate::ParseResult)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    /// `matched` holds the offending character, `remaining` the input as given
    UnexpectedChar = 1,
    /// Input ran out; `matched` and `remaining` are both empty
    UnexpectedEof = 2,
    /// Input was left over where none was allowed
    ExpectedEof = 3,
    Reserved = 4,
}

impl Status {
    /// Every status, in code order
    pub const ALL: [Status; 5] = [
        Status::Ok,
        Status::UnexpectedChar,
        Status::UnexpectedEof,
        Status::ExpectedEof,
        Status::Reserved,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Raised when a raw code outside the five defined statuses is used.
///
/// This is a programming error, never an ordinary parse failure: it does not
/// flow through combinators and is not a [`ParseError`](crate::ParseError).
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid code: `{0}`")]
pub struct InvalidStatusCode(pub u8);

impl TryFrom<u8> for Status {
    type Error = InvalidStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Status::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(InvalidStatusCode(code))
    }
}

/// A set of statuses, stored as one bit per code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct StatusSet(u8);

impl StatusSet {
    pub const EMPTY: StatusSet = StatusSet(0);

    pub const fn only(status: Status) -> Self {
        StatusSet(1 << status as u8)
    }

    pub const fn with(self, status: Status) -> Self {
        StatusSet(self.0 | 1 << status as u8)
    }

    pub const fn contains(self, status: Status) -> bool {
        self.0 & (1 << status as u8) != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Status> {
        Status::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        iter.into_iter().fold(StatusSet::EMPTY, StatusSet::with)
    }
}

/// Statuses every combinator treats as success.
///
/// Combinators only ever consult this set, never a specific status, so a new
/// "good" status is added here and nowhere else.
pub const GOOD_STATUSES: StatusSet = StatusSet::only(Status::Ok);
