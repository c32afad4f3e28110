use std::borrow::Cow;
use std::str::FromStr;

use crate::mime::{self, Mime};
use crate::{FieldValue, MultipartFormDataType};

/// The content type of a file field whose content type is not set.
pub const DEFAULT_FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// One logical form field to be encoded as a part.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartFormDataField<'a> {
    /// The name of this field. Duplicated names are allowed and kept in order.
    pub field_name:   Cow<'a, str>,
    /// The payload of this field.
    pub value:        FieldValue<'a>,
    /// The content type of this field. File fields fall back to `application/octet-stream`; text fields send no `Content-Type` line unless this is set.
    pub content_type: Option<Mime>,
}

impl<'a> MultipartFormDataField<'a> {
    /// Create a text field.
    pub fn text<N: Into<Cow<'a, str>>, V: Into<Cow<'a, str>>>(
        field_name: N,
        text: V,
    ) -> MultipartFormDataField<'a> {
        MultipartFormDataField {
            field_name:   field_name.into(),
            value:        FieldValue::Text(text.into()),
            content_type: None,
        }
    }

    /// Create a file field.
    pub fn file<N: Into<Cow<'a, str>>, F: Into<Cow<'a, str>>, D: Into<Cow<'a, [u8]>>>(
        field_name: N,
        file_name: F,
        data: D,
    ) -> MultipartFormDataField<'a> {
        MultipartFormDataField {
            field_name:   field_name.into(),
            value:        FieldValue::File {
                file_name: file_name.into(), data: data.into()
            },
            content_type: None,
        }
    }

    /// Create a file field without a meaningful filename. It is sent with `filename=""`, the same way web browsers send an unnamed blob.
    pub fn bytes<N: Into<Cow<'a, str>>, D: Into<Cow<'a, [u8]>>>(
        field_name: N,
        data: D,
    ) -> MultipartFormDataField<'a> {
        Self::file(field_name, "", data)
    }

    /// Set the content type of this field. `None` resets it.
    pub fn content_type(mut self, content_type: Option<Mime>) -> MultipartFormDataField<'a> {
        self.content_type = content_type;
        self
    }

    /// Set the content type of this field by parsing a string. `None` resets it.
    pub fn content_type_by_string<S: AsRef<str>>(
        mut self,
        content_type: Option<S>,
    ) -> Result<MultipartFormDataField<'a>, mime::FromStrError> {
        self.content_type = match content_type {
            Some(content_type) => Some(Mime::from_str(content_type.as_ref())?),
            None => None,
        };

        Ok(self)
    }

    #[inline]
    pub fn typ(&self) -> MultipartFormDataType {
        match self.value {
            FieldValue::Text(_) => MultipartFormDataType::Text,
            FieldValue::File {
                ..
            } => MultipartFormDataType::File,
        }
    }

    #[inline]
    pub fn file_name(&self) -> Option<&str> {
        self.value.file_name()
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        self.value.payload()
    }

    /// The content type written in the part headers, if any.
    pub fn effective_content_type(&self) -> Option<&str> {
        match (&self.content_type, self.typ()) {
            (Some(content_type), _) => Some(content_type.as_ref()),
            (None, MultipartFormDataType::File) => Some(DEFAULT_FILE_CONTENT_TYPE),
            (None, MultipartFormDataType::Text) => None,
        }
    }
}
