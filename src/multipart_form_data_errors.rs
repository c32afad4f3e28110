use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// Why a field was rejected before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFieldReason {
    EmptyName,
    NameTooLong { length: usize, max: usize },
    FileNameTooLong { length: usize, max: usize },
}

impl Display for InvalidFieldReason {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            InvalidFieldReason::EmptyName => f.write_str("the field name is empty"),
            InvalidFieldReason::NameTooLong {
                length,
                max,
            } => f.write_fmt(format_args!(
                "the field name is {} bytes long, the limit is {}",
                length, max
            )),
            InvalidFieldReason::FileNameTooLong {
                length,
                max,
            } => f.write_fmt(format_args!(
                "the filename is {} bytes long, the limit is {}",
                length, max
            )),
        }
    }
}

#[derive(Debug)]
pub enum MultipartFormDataError {
    /// A field descriptor is malformed. Nothing has been encoded.
    InvalidFieldError { index: usize, field_name: Arc<str>, reason: InvalidFieldReason },
    /// No randomness could be obtained for the boundary.
    EntropySourceUnavailable(getrandom::Error),
}

impl From<getrandom::Error> for MultipartFormDataError {
    #[inline]
    fn from(err: getrandom::Error) -> MultipartFormDataError {
        MultipartFormDataError::EntropySourceUnavailable(err)
    }
}

impl Display for MultipartFormDataError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            MultipartFormDataError::InvalidFieldError {
                index,
                field_name,
                reason,
            } => f.write_fmt(format_args!(
                "The field #{} (`{}`) is invalid: {}.",
                index, field_name, reason
            )),
            MultipartFormDataError::EntropySourceUnavailable(err) => {
                f.write_fmt(format_args!("The entropy source is unavailable: {}", err))
            },
        }
    }
}

impl Error for MultipartFormDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MultipartFormDataError::EntropySourceUnavailable(err) => Some(err),
            _ => None,
        }
    }
}
