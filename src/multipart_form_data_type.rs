#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MultipartFormDataType {
    /// A plain text value. No filename is sent.
    Text,
    /// A file-like binary value sent with a filename and a content type.
    File,
}
