use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct UploadImageInput {
    pub filename: String,
    pub mime_type: String,
    pub payload: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct StoredImageFilter {
    pub mime_type: Option<String>,
}
