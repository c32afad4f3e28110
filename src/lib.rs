/*!
# Multipart Form Data Encoder

This crate builds `multipart/form-data` request bodies (RFC 7578) along with the matching `Content-Type` header value. A fresh boundary is drawn for every body and it never occurs in any of the field data.

## Example

```rust
use multipart_form_data_encoder::{mime, MultipartFormData, MultipartFormDataField};

let photo = [0x89u8, b'P', b'N', b'G', b'\r', b'\n'];

let fields = vec![
    MultipartFormDataField::text("name", "Magic Len"),
    MultipartFormDataField::text("email", "len@magiclen.org"),
    MultipartFormDataField::text("email", "len@example.com"), // duplicated names are sent as separate parts, in order
    MultipartFormDataField::file("photo", "photo.png", &photo[..]).content_type(Some(mime::IMAGE_PNG)),
];

let multipart_form_data = MultipartFormData::encode(&fields).unwrap();

let (content_type, body) = multipart_form_data.into_parts();

assert!(content_type.starts_with("multipart/form-data; boundary="));
assert!(body.ends_with(b"--\r\n"));
```

Field names and filenames are escaped by the encoder: `"` becomes `%22`, and CR and LF are removed.
*/

pub use mime;

mod boundary;
mod fields;
mod host;
mod multipart_form_data;
mod multipart_form_data_errors;
mod multipart_form_data_field;
mod multipart_form_data_options;
mod multipart_form_data_type;
mod worker_upload;

pub use boundary::*;
pub use fields::*;
pub use host::*;
pub use multipart_form_data::*;
pub use multipart_form_data_errors::*;
pub use multipart_form_data_field::*;
pub use multipart_form_data_options::*;
pub use multipart_form_data_type::*;
pub use worker_upload::*;
