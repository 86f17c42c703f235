use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Every failure the capture pipeline can report. The `Display` form is
/// user-facing: it is shown verbatim in the notification toast. Errors are
/// handled where they occur and never propagate past the handler that
/// raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera access error: {0}")]
    DeviceAcquisition(String),

    #[error("Camera not available")]
    CameraUnavailable,

    #[error("Please select an image file")]
    InvalidFileType,

    #[error("File size exceeds 4MB")]
    FileTooLarge,

    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Prediction error: {0}")]
    PredictionService(String),

    #[error("Session login failed: {0}")]
    SessionEstablishment(String),
}

/// Best-effort human-readable message out of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_messages_are_human_readable() {
        assert_eq!(
            CaptureError::DeviceAcquisition("Permission denied".into()).to_string(),
            "Camera access error: Permission denied"
        );
        assert_eq!(CaptureError::CameraUnavailable.to_string(), "Camera not available");
        assert_eq!(CaptureError::InvalidFileType.to_string(), "Please select an image file");
        assert_eq!(CaptureError::FileTooLarge.to_string(), "File size exceeds 4MB");
    }

    #[test]
    fn service_errors_carry_the_service_message() {
        let err = CaptureError::PredictionService("No image provided in the request.".into());
        assert_eq!(err.to_string(), "Prediction error: No image provided in the request.");
    }
}
