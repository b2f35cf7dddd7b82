use crate::domain::common::entities::app_errors::CoreError;

pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "image/gif"];

pub const MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024; // 10 MiB

/// Admission policy for uploaded images.
pub fn ensure_acceptable_image(mime_type: &str, size_bytes: usize) -> Result<(), CoreError> {
    if !ALLOWED_IMAGE_MIME_TYPES.contains(&mime_type) {
        return Err(CoreError::InvalidParameter(format!(
            "unsupported image type '{mime_type}'"
        )));
    }
    if size_bytes == 0 {
        return Err(CoreError::InvalidParameter(
            "image payload is empty".to_string(),
        ));
    }
    if size_bytes > MAX_IMAGE_SIZE_BYTES {
        return Err(CoreError::InvalidParameter(format!(
            "image exceeds maximum size of {MAX_IMAGE_SIZE_BYTES} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_image_types_within_bounds() {
        assert!(ensure_acceptable_image("image/png", 1024).is_ok());
        assert!(ensure_acceptable_image("image/webp", MAX_IMAGE_SIZE_BYTES).is_ok());
    }

    #[test]
    fn rejects_non_image_and_oversized_payloads() {
        assert!(ensure_acceptable_image("application/pdf", 1024).is_err());
        assert!(ensure_acceptable_image("image/png", 0).is_err());
        assert!(ensure_acceptable_image("image/png", MAX_IMAGE_SIZE_BYTES + 1).is_err());
    }
}
