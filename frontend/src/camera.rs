use shared::FacingMode;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    ConstrainDomStringParameters, ConstrainDoubleRange, MediaStream, MediaStreamConstraints,
    MediaStreamTrack, MediaTrackConstraints,
};

use crate::error::{js_error_message, CaptureError};

pub const IDEAL_WIDTH: f64 = 1280.0;
pub const IDEAL_HEIGHT: f64 = 720.0;

/// Exclusive owner of the live media stream handle. At most one stream is
/// held at a time; every track is stopped before the handle is dropped or
/// replaced, including on error paths.
pub struct CameraSession {
    stream: Option<MediaStream>,
    facing: FacingMode,
    acquiring: bool,
}

impl CameraSession {
    pub fn new() -> Self {
        Self {
            stream: None,
            facing: FacingMode::default(),
            acquiring: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    pub fn stream(&self) -> Option<&MediaStream> {
        self.stream.as_ref()
    }

    /// Claim the right to start an acquisition. Returns `false` when one
    /// is already pending; the caller must drop the attempt (a second
    /// toggle or switch before the first resolves is ignored, not queued).
    pub fn begin_acquire(&mut self) -> bool {
        if self.acquiring {
            return false;
        }
        self.acquiring = true;
        true
    }

    /// Clear the in-flight guard after a failed acquisition.
    pub fn abort_acquire(&mut self) {
        self.acquiring = false;
    }

    /// Install a freshly acquired stream. Any stream still held is
    /// released first.
    pub fn adopt(&mut self, stream: MediaStream, facing: FacingMode) {
        self.release();
        self.stream = Some(stream);
        self.facing = facing;
        self.acquiring = false;
    }

    /// Stop every track and drop the handle.
    pub fn release(&mut self) {
        if let Some(stream) = self.stream.take() {
            for track in stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }
}

impl Default for CameraSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Request a camera stream with the given facing mode preferred at
/// 1280x720. Suspends until the user grants or denies access.
pub async fn acquire_stream(facing: FacingMode) -> Result<MediaStream, CaptureError> {
    let window = web_sys::window()
        .ok_or_else(|| CaptureError::DeviceAcquisition("no window".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CaptureError::DeviceAcquisition(js_error_message(&e)))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints(facing).into());
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CaptureError::DeviceAcquisition(js_error_message(&e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| CaptureError::DeviceAcquisition(js_error_message(&e)))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| CaptureError::DeviceAcquisition("unexpected stream object".to_string()))
}

fn video_constraints(facing: FacingMode) -> MediaTrackConstraints {
    let video = MediaTrackConstraints::new();

    let mode = ConstrainDomStringParameters::new();
    mode.set_ideal(&JsValue::from_str(&facing.to_string()));
    video.set_facing_mode(&mode.into());

    let width = ConstrainDoubleRange::new();
    width.set_ideal(IDEAL_WIDTH);
    video.set_width(&width.into());

    let height = ConstrainDoubleRange::new();
    height.set_ideal(IDEAL_HEIGHT);
    video.set_height(&height.into());

    video
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_inactive_and_faces_back() {
        let session = CameraSession::new();
        assert!(!session.is_active());
        assert!(session.stream().is_none());
        assert_eq!(session.facing(), FacingMode::Environment);
    }

    #[test]
    fn begin_acquire_rejects_a_second_attempt() {
        let mut session = CameraSession::new();
        assert!(session.begin_acquire());
        // The first acquisition has not resolved: ignore, don't queue.
        assert!(!session.begin_acquire());
    }

    #[test]
    fn abort_acquire_allows_a_retry() {
        let mut session = CameraSession::new();
        assert!(session.begin_acquire());
        session.abort_acquire();
        assert!(session.begin_acquire());
    }

    #[test]
    fn release_without_a_stream_is_harmless() {
        let mut session = CameraSession::new();
        session.release();
        assert!(!session.is_active());
    }
}
