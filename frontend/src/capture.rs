use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, HtmlVideoElement};

use crate::error::{js_error_message, CaptureError};

const ENCODE_MIME: &str = "image/jpeg";

/// A single encoded still. Produced per capture or upload event and handed
/// straight to submission; never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    /// JPEG data URL, ready for the request body.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Draw the current video frame onto the off-screen canvas at the stream's
/// native resolution and encode it.
pub fn capture_video_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
) -> Result<CapturedImage, CaptureError> {
    let width = video.video_width();
    let height = video.video_height();

    let ctx = canvas_context(canvas, width, height).map_err(|msg| {
        log::error!("frame capture failed: {msg}");
        CaptureError::CameraUnavailable
    })?;
    ctx.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| {
        log::error!("frame capture failed: {}", js_error_message(&e));
        CaptureError::CameraUnavailable
    })?;

    encode(canvas, width, height).map_err(|msg| {
        log::error!("frame encode failed: {msg}");
        CaptureError::CameraUnavailable
    })
}

/// Draw a decoded upload onto the off-screen canvas at its natural
/// dimensions and encode it.
pub fn capture_decoded_image(
    image: &HtmlImageElement,
    canvas: &HtmlCanvasElement,
) -> Result<CapturedImage, CaptureError> {
    let width = image.natural_width();
    let height = image.natural_height();

    let ctx = canvas_context(canvas, width, height).map_err(|msg| {
        log::error!("upload capture failed: {msg}");
        CaptureError::InvalidFileType
    })?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(|e| {
            log::error!("upload capture failed: {}", js_error_message(&e));
            CaptureError::InvalidFileType
        })?;

    encode(canvas, width, height).map_err(|msg| {
        log::error!("upload encode failed: {msg}");
        CaptureError::InvalidFileType
    })
}

fn canvas_context(
    canvas: &HtmlCanvasElement,
    width: u32,
    height: u32,
) -> Result<CanvasRenderingContext2d, String> {
    canvas.set_width(width);
    canvas.set_height(height);

    canvas
        .get_context("2d")
        .map_err(|e| js_error_message(&e))?
        .ok_or_else(|| "no 2d canvas context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "canvas context cast failed".to_string())
}

fn encode(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<CapturedImage, String> {
    let data_url = canvas
        .to_data_url_with_type(ENCODE_MIME)
        .map_err(|e| js_error_message(&e))?;

    Ok(CapturedImage {
        data_url,
        width,
        height,
    })
}
