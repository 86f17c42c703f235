use crate::error::CaptureError;

/// Client-side cap on upload size.
pub const MAX_UPLOAD_BYTES: u64 = 4 * 1024 * 1024;

/// Gate a user-supplied file before any decode work happens. Only image
/// MIME types at or under 4MiB pass.
pub fn validate_upload(mime: &str, size: u64) -> Result<(), CaptureError> {
    if !mime.starts_with("image/") {
        return Err(CaptureError::InvalidFileType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(CaptureError::FileTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_image_type_under_the_limit() {
        assert!(validate_upload("image/jpeg", 1024).is_ok());
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("image/webp", 2 * 1024 * 1024).is_ok());
    }

    #[test]
    fn rejects_non_image_mime_types() {
        assert_eq!(
            validate_upload("application/pdf", 1024),
            Err(CaptureError::InvalidFileType)
        );
        assert_eq!(
            validate_upload("text/plain", 10),
            Err(CaptureError::InvalidFileType)
        );
        assert_eq!(validate_upload("", 10), Err(CaptureError::InvalidFileType));
    }

    #[test]
    fn rejects_files_over_four_mebibytes() {
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES + 1),
            Err(CaptureError::FileTooLarge)
        );
        assert_eq!(
            validate_upload("image/png", 10 * 1024 * 1024),
            Err(CaptureError::FileTooLarge)
        );
    }

    #[test]
    fn type_check_runs_before_the_size_check() {
        // A 10MB PDF is reported as the wrong type, not as too large.
        assert_eq!(
            validate_upload("application/pdf", 10 * 1024 * 1024),
            Err(CaptureError::InvalidFileType)
        );
    }
}
