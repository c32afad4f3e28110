use crate::boundary::{DEFAULT_BOUNDARY_LENGTH, MAX_BOUNDARY_LENGTH, MIN_BOUNDARY_LENGTH};

const DEFAULT_MAX_NAME_LENGTH: usize = 1024;

/// Options for encoding multipart/form-data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultipartFormDataOptions {
    /// The number of characters of a generated boundary. It is kept within `16..=70`.
    pub boundary_length: usize,
    /// The max number of bytes of a field name or a filename.
    pub max_name_length: usize,
}

impl MultipartFormDataOptions {
    /// Create a default `MultipartFormDataOptions` instance.
    #[inline]
    pub fn new() -> MultipartFormDataOptions {
        MultipartFormDataOptions {
            boundary_length: DEFAULT_BOUNDARY_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }

    /// Set the boundary length. Values outside `16..=70` are clamped.
    pub fn boundary_length(mut self, boundary_length: usize) -> MultipartFormDataOptions {
        let clamped = boundary_length.clamp(MIN_BOUNDARY_LENGTH, MAX_BOUNDARY_LENGTH);

        if clamped != boundary_length {
            log::warn!(
                "The boundary length should be between {} and {}. Use {} instead of {}.",
                MIN_BOUNDARY_LENGTH,
                MAX_BOUNDARY_LENGTH,
                clamped,
                boundary_length
            );
        }

        self.boundary_length = clamped;
        self
    }

    /// Set the max number of bytes of a field name or a filename. It should be bigger than 0.
    pub fn max_name_length(mut self, max_name_length: usize) -> MultipartFormDataOptions {
        if max_name_length == 0 {
            log::warn!("The max name length should be bigger than 0. Use 1 instead.");

            self.max_name_length = 1;
        } else {
            self.max_name_length = max_name_length;
        }
        self
    }
}

impl Default for MultipartFormDataOptions {
    #[inline]
    fn default() -> Self {
        MultipartFormDataOptions::new()
    }
}
