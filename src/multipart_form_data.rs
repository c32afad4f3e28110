use std::borrow::Cow;
use std::sync::Arc;

use crate::boundary::{Boundary, EntropySource, OsEntropy};
use crate::host::{FormSource, RequestSink};
use crate::{
    InvalidFieldReason, MultipartFormDataError, MultipartFormDataField, MultipartFormDataOptions,
};

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";
const CONTENT_DISPOSITION: &[u8] = b"Content-Disposition: form-data; name=\"";
const FILENAME: &[u8] = b"\"; filename=\"";
const CONTENT_TYPE: &[u8] = b"Content-Type: ";

/// The name of the header which carries the boundary.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

const PREVIEW_HEAD: usize = 300;
const PREVIEW_TAIL: usize = 120;

/// An encoded multipart/form-data body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFormData {
    boundary: Boundary,
    body:     Vec<u8>,
}

/// A field whose header parameters have been escaped.
struct PreparedField<'f> {
    field_name:   Cow<'f, str>,
    file_name:    Option<Cow<'f, str>>,
    content_type: Option<&'f str>,
    payload:      &'f [u8],
}

impl MultipartFormData {
    /// Encode fields with the default options and the operating system's randomness.
    #[inline]
    pub fn encode(
        fields: &[MultipartFormDataField<'_>],
    ) -> Result<MultipartFormData, MultipartFormDataError> {
        Self::encode_with_options(fields, &MultipartFormDataOptions::default())
    }

    /// Encode fields with the operating system's randomness.
    #[inline]
    pub fn encode_with_options(
        fields: &[MultipartFormDataField<'_>],
        options: &MultipartFormDataOptions,
    ) -> Result<MultipartFormData, MultipartFormDataError> {
        Self::encode_with_entropy(fields, options, &mut OsEntropy)
    }

    /// Encode fields, in order, into a multipart/form-data body.
    ///
    /// All fields are validated before anything is written, and the boundary is drawn from `source` so that it appears in no payload, name, filename or content type. Either the whole body is returned or an error is.
    pub fn encode_with_entropy<E: EntropySource + ?Sized>(
        fields: &[MultipartFormDataField<'_>],
        options: &MultipartFormDataOptions,
        source: &mut E,
    ) -> Result<MultipartFormData, MultipartFormDataError> {
        for (index, field) in fields.iter().enumerate() {
            validate(index, field, options)?;
        }

        let prepared: Vec<PreparedField> = fields
            .iter()
            .map(|field| PreparedField {
                field_name:   escape_parameter(&field.field_name),
                file_name:    field.file_name().map(escape_parameter),
                content_type: field.effective_content_type(),
                payload:      field.payload(),
            })
            .collect();

        let mut avoiding: Vec<&[u8]> = Vec::with_capacity(fields.len() * 6);

        for (field, prepared) in fields.iter().zip(prepared.iter()) {
            avoiding.push(prepared.payload);
            avoiding.push(field.field_name.as_bytes());

            if let Cow::Owned(escaped) = &prepared.field_name {
                avoiding.push(escaped.as_bytes());
            }

            if let Some(file_name) = field.file_name() {
                avoiding.push(file_name.as_bytes());
            }

            if let Some(Cow::Owned(escaped)) = &prepared.file_name {
                avoiding.push(escaped.as_bytes());
            }

            if let Some(content_type) = prepared.content_type {
                avoiding.push(content_type.as_bytes());
            }
        }

        let boundary = Boundary::generate_with(&avoiding, options.boundary_length, source)?;

        let body = write_body(&prepared, boundary.as_str().as_bytes());

        let encoded = MultipartFormData {
            boundary,
            body,
        };

        log::debug!(
            "Encoded {} part(s) into {} bytes with a {}-character boundary.",
            fields.len(),
            encoded.body.len(),
            encoded.boundary.len()
        );

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Multipart preview >>>\n{}", encoded.preview(PREVIEW_HEAD, PREVIEW_TAIL));
        }

        Ok(encoded)
    }

    /// Encode the fields a host exposes.
    #[inline]
    pub fn from_source<S: FormSource + ?Sized>(
        source: &S,
        options: &MultipartFormDataOptions,
    ) -> Result<MultipartFormData, MultipartFormDataError> {
        let fields = source.form_fields();

        Self::encode_with_options(&fields, options)
    }

    #[inline]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The value of the `Content-Type` header which must be sent along with the body.
    #[inline]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    #[inline]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Split into the `Content-Type` header value and the body.
    #[inline]
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.content_type(), self.body)
    }

    /// Put the body and its `Content-Type` header into an outgoing request.
    pub fn apply_to<R: RequestSink + ?Sized>(self, request: &mut R) {
        let (content_type, body) = self.into_parts();

        request.set_header(CONTENT_TYPE_HEADER, &content_type);
        request.set_body(body);
    }

    /// Render the first `head` bytes and the last `tail` bytes for diagnostics. `\r` is shown as the two characters `\` and `r`.
    pub fn preview(&self, head: usize, tail: usize) -> String {
        let len = self.body.len();

        let render = |bytes: &[u8]| String::from_utf8_lossy(bytes).replace('\r', "\\r");

        if head.saturating_add(tail) >= len {
            return render(&self.body);
        }

        format!("{}\n...\n{}", render(&self.body[..head]), render(&self.body[len - tail..]))
    }
}

/// Replace every `"` with `%22` and remove CR and LF, so that the value can be placed in a quoted header parameter.
pub fn escape_parameter(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);

    for c in value.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' | '\n' => (),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

fn validate(
    index: usize,
    field: &MultipartFormDataField<'_>,
    options: &MultipartFormDataOptions,
) -> Result<(), MultipartFormDataError> {
    let max = options.max_name_length;

    // A name made of line breaks only would be emitted as `name=""`.
    let reason = if field.field_name.chars().all(|c| c == '\r' || c == '\n') {
        Some(InvalidFieldReason::EmptyName)
    } else if field.field_name.len() > max {
        Some(InvalidFieldReason::NameTooLong {
            length: field.field_name.len(),
            max,
        })
    } else {
        match field.file_name() {
            Some(file_name) if file_name.len() > max => {
                Some(InvalidFieldReason::FileNameTooLong {
                    length: file_name.len(),
                    max,
                })
            },
            _ => None,
        }
    };

    match reason {
        Some(reason) => Err(MultipartFormDataError::InvalidFieldError {
            index,
            field_name: Arc::from(field.field_name.as_ref()),
            reason,
        }),
        None => Ok(()),
    }
}

fn body_len(fields: &[PreparedField], boundary: &[u8]) -> usize {
    let delimiter = DASHES.len() + boundary.len() + CRLF.len();

    let parts: usize = fields
        .iter()
        .map(|field| {
            let mut n = delimiter
                + CONTENT_DISPOSITION.len()
                + field.field_name.len()
                + 1
                + CRLF.len()
                + CRLF.len()
                + field.payload.len()
                + CRLF.len();

            if let Some(file_name) = &field.file_name {
                n += FILENAME.len() + file_name.len();
            }

            if let Some(content_type) = field.content_type {
                n += CONTENT_TYPE.len() + content_type.len() + CRLF.len();
            }

            n
        })
        .sum();

    parts + DASHES.len() + boundary.len() + DASHES.len() + CRLF.len()
}

fn write_body(fields: &[PreparedField], boundary: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(body_len(fields, boundary));

    for field in fields {
        body.extend_from_slice(DASHES);
        body.extend_from_slice(boundary);
        body.extend_from_slice(CRLF);

        body.extend_from_slice(CONTENT_DISPOSITION);
        body.extend_from_slice(field.field_name.as_bytes());

        if let Some(file_name) = &field.file_name {
            body.extend_from_slice(FILENAME);
            body.extend_from_slice(file_name.as_bytes());
        }

        body.push(b'"');
        body.extend_from_slice(CRLF);

        if let Some(content_type) = field.content_type {
            body.extend_from_slice(CONTENT_TYPE);
            body.extend_from_slice(content_type.as_bytes());
            body.extend_from_slice(CRLF);
        }

        body.extend_from_slice(CRLF);
        body.extend_from_slice(field.payload);
        body.extend_from_slice(CRLF);
    }

    body.extend_from_slice(DASHES);
    body.extend_from_slice(boundary);
    body.extend_from_slice(DASHES);
    body.extend_from_slice(CRLF);

    body
}
