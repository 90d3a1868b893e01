use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
    #[error("{0} must not be null")]
    NullArgument(&'static str),
    /// `remove`/`set` on a cursor with no element pending.
    #[error("no element pending for cursor {0}")]
    IllegalState(&'static str),
    #[error("no more elements")]
    NoSuchElement,
}

impl Error {
    /// Returns `true` for both index and range violations.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfBounds { .. } | Error::RangeOutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Element index: `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Gap index used for insertion and cursor placement: `index <= len`.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(())
}

pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
    if from > to || to > len {
        return Err(Error::RangeOutOfBounds { from, to, len });
    }
    Ok(())
}
