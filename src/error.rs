/// An error that can occur when parsing an ISO 8601 duration.
///
/// Parsing is all-or-nothing: the first structural problem encountered
/// aborts the parse and no partial [`Duration`](crate::Duration) is ever
/// returned alongside an error. Formatting a duration, by contrast, can
/// never fail.
///
/// # Example
///
/// ```
/// use isoduration::ErrorKind;
///
/// let err = isoduration::parse("P5MG").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidCharacter { offset: 3 });
/// assert_eq!(err.offset(), Some(3));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of failure that occurred during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input did not begin with the mandatory `P` marker (after an
    /// optional leading `-` sign).
    ///
    /// This kind takes precedence over any later structural error. In
    /// particular, a bare `-` and the empty string both fail with this
    /// kind.
    PrefixMissing,
    /// A numeric literal in the input had a non-zero fractional part.
    ///
    /// Fractional magnitudes are rejected outright, never rounded.
    FractionalValueNotSupported,
    /// A character was found that is neither part of a numeric literal nor
    /// a designator belonging to the active segment.
    InvalidCharacter {
        /// The zero-based byte offset of the offending character in the
        /// original input. When a designator is missing at the very end of
        /// the input, this is the input's length.
        offset: usize,
    },
}

impl Error {
    pub(crate) const fn prefix_missing() -> Error {
        Error { kind: ErrorKind::PrefixMissing }
    }

    pub(crate) const fn fractional_value() -> Error {
        Error { kind: ErrorKind::FractionalValueNotSupported }
    }

    pub(crate) const fn invalid_character(offset: usize) -> Error {
        Error { kind: ErrorKind::InvalidCharacter { offset } }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte offset of the offending character, when this error
    /// has one.
    pub fn offset(&self) -> Option<usize> {
        match self.kind {
            ErrorKind::InvalidCharacter { offset } => Some(offset),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::PrefixMissing => f.write_str(
                "expected duration beginning with `P` or `p` \
                 (possibly preceded by a `-` sign), but none was found",
            ),
            ErrorKind::FractionalValueNotSupported => f.write_str(
                "found fractional value in ISO 8601 duration, \
                 but fractional units are not supported",
            ),
            ErrorKind::InvalidCharacter { offset } => write!(
                f,
                "invalid character in ISO 8601 duration \
                 at offset {offset}",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
