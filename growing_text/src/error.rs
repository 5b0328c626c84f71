// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for styled text and text surface operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted byte range and the length of the
/// text it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context, not the size of the error."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::NotOnCharBoundary => write!(
                f,
                "range {}..{} not on UTF-8 boundary",
                self.start, self.end
            ),
            ErrorKind::NotEditable => write!(
                f,
                "edit {}..{} rejected: surface is not editable",
                self.start, self.end
            ),
            ErrorKind::NotEditing => write!(
                f,
                "edit {}..{} rejected: surface is not focused",
                self.start, self.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,

    /// An edit was attempted on a disabled surface, such as a placeholder.
    NotEditable,

    /// An edit was attempted while the surface did not have focus.
    NotEditing,
}

/// Checks that `range` is a valid byte range into `text`.
pub(crate) fn validate_range(text: &str, range: &core::ops::Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range.start, range.end, len));
    }
    if range.end > len {
        return Err(Error::new(ErrorKind::InvalidBounds, range.start, range.end, len));
    }
    if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
        return Err(Error::new(
            ErrorKind::NotOnCharBoundary,
            range.start,
            range.end,
            len,
        ));
    }
    Ok(())
}
