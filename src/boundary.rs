use std::fmt::{self, Display, Formatter};

use crate::MultipartFormDataError;

/// The characters a generated boundary is made of. RFC 2046 allows all of them in a boundary without quoting.
pub const BOUNDARY_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

pub const DEFAULT_BOUNDARY_LENGTH: usize = 32;
pub const MIN_BOUNDARY_LENGTH: usize = 16;
/// RFC 2046 limits a boundary to 70 characters.
pub const MAX_BOUNDARY_LENGTH: usize = 70;

/// A source of random bytes for boundaries.
pub trait EntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), getrandom::Error>;
}

/// Randomness from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), getrandom::Error> {
        getrandom::getrandom(dest)
    }
}

/// A delimiter token for one multipart body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary(pub(crate) String);

impl Boundary {
    /// Generate a boundary of the default length from the operating system's randomness. It is not a substring of any of `avoiding`.
    #[inline]
    pub fn generate<T: AsRef<[u8]>>(avoiding: &[T]) -> Result<Boundary, MultipartFormDataError> {
        Self::generate_with(avoiding, DEFAULT_BOUNDARY_LENGTH, &mut OsEntropy)
    }

    /// Generate a boundary of `length` characters from `source`. It is not a substring of any of `avoiding`.
    ///
    /// `length` is clamped into `16..=70`. A failure of `source` is returned as is and never retried.
    pub fn generate_with<T: AsRef<[u8]>, E: EntropySource + ?Sized>(
        avoiding: &[T],
        length: usize,
        source: &mut E,
    ) -> Result<Boundary, MultipartFormDataError> {
        let length = length.clamp(MIN_BOUNDARY_LENGTH, MAX_BOUNDARY_LENGTH);

        let mut token = vec![0u8; length];

        loop {
            source.fill_bytes(&mut token)?;

            // 256 is a multiple of 64, so masking keeps the draw uniform.
            for b in token.iter_mut() {
                *b = BOUNDARY_ALPHABET[(*b & 0x3f) as usize];
            }

            if avoiding.iter().any(|haystack| contains(haystack.as_ref(), &token)) {
                log::trace!("The drawn boundary collides with the field data. Draw again.");

                continue;
            }

            break;
        }

        // Every byte comes from `BOUNDARY_ALPHABET`, which is ASCII.
        let token = token.into_iter().map(char::from).collect();

        Ok(Boundary(token))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Boundary {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Boundary {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

#[inline]
pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty()
        || (haystack.len() >= needle.len() && haystack.windows(needle.len()).any(|w| w == needle))
}
