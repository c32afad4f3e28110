//! Capabilities a host environment hands to the encoder.
//!
//! The encoder never reaches into the host. The host exposes the fields of the request being edited through [`FormSource`] and receives the encoded body through [`RequestSink`].

use crate::MultipartFormDataField;

/// The fields of the request currently being edited.
pub trait FormSource {
    /// The fields to encode, in the order they should be sent.
    fn form_fields(&self) -> Vec<MultipartFormDataField<'_>>;
}

/// An outgoing request which can take a new body.
pub trait RequestSink {
    /// Set a header, replacing any header with the same name.
    fn set_header(&mut self, name: &str, value: &str);

    fn set_body(&mut self, body: Vec<u8>);
}

impl<'a> FormSource for [MultipartFormDataField<'a>] {
    #[inline]
    fn form_fields(&self) -> Vec<MultipartFormDataField<'_>> {
        self.to_vec()
    }
}
