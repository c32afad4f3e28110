use std::borrow::Cow;

/// The payload of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    File { file_name: Cow<'a, str>, data: Cow<'a, [u8]> },
}

impl<'a> FieldValue<'a> {
    /// The exact bytes that will be placed in the part body.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        match self {
            FieldValue::Text(text) => text.as_bytes(),
            FieldValue::File {
                data, ..
            } => data,
        }
    }

    #[inline]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::File {
                file_name, ..
            } => Some(file_name),
        }
    }
}
