use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::FacingMode;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlCanvasElement, HtmlImageElement, HtmlVideoElement, MediaStream};
use yew::prelude::*;

use super::toast::{Toast, TOAST_DURATION_MS};
use crate::capture::CapturedImage;
use crate::error::CaptureError;
use crate::state::UiState;
use crate::{api, camera, capture, upload, Model, Msg};

// --- Camera lifecycle ---

pub fn handle_toggle_camera(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.state.is_busy() {
        return false;
    }

    if model.camera.is_active() {
        model.camera.release();
        clear_video_surface(model);
        model.state = UiState::Idle;
        log::info!("camera stopped");
        show_toast(model, ctx, "Camera stopped".to_string(), true);
        return true;
    }

    let facing = model.camera.facing();
    start_acquisition(model, ctx, facing)
}

pub fn handle_switch_camera(model: &mut Model, ctx: &Context<Model>) -> bool {
    // No-op while busy or without a live stream.
    if model.state.is_busy() || !model.camera.is_active() {
        return false;
    }

    let next = model.camera.facing().opposite();
    log::info!("switching to {} camera", next.label());

    // The old stream is released before the new one is requested. On
    // failure the pipeline falls back to idle; it is not restored.
    model.camera.release();
    clear_video_surface(model);
    start_acquisition(model, ctx, next)
}

fn start_acquisition(model: &mut Model, ctx: &Context<Model>, facing: FacingMode) -> bool {
    if !model.camera.begin_acquire() {
        log::warn!("camera request ignored: acquisition already in flight");
        return false;
    }

    model.state = UiState::CameraStarting;

    let link = ctx.link().clone();
    spawn_local(async move {
        match camera::acquire_stream(facing).await {
            Ok(stream) => link.send_message(Msg::CameraAcquired(stream, facing)),
            Err(err) => link.send_message(Msg::CameraFailed(err)),
        }
    });

    true
}

pub fn handle_camera_acquired(
    model: &mut Model,
    ctx: &Context<Model>,
    stream: MediaStream,
    facing: FacingMode,
) -> bool {
    model.camera.adopt(stream, facing);

    if let Some(video) = model.video_ref.cast::<HtmlVideoElement>() {
        video.set_src_object(model.camera.stream());
    }

    model.state = UiState::CameraActive;
    log::info!("camera started facing {}", facing);
    show_toast(
        model,
        ctx,
        format!("Camera started: {} camera", facing.label()),
        true,
    );
    true
}

pub fn handle_camera_failed(model: &mut Model, ctx: &Context<Model>, err: CaptureError) -> bool {
    model.camera.abort_acquire();
    clear_video_surface(model);
    fail(model, ctx, err);
    true
}

fn clear_video_surface(model: &Model) {
    if let Some(video) = model.video_ref.cast::<HtmlVideoElement>() {
        video.set_src_object(None);
    }
}

// --- Capture & upload ---

pub fn handle_capture_frame(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.state.is_busy() {
        return false;
    }
    if !model.camera.is_active() {
        fail(model, ctx, CaptureError::CameraUnavailable);
        return true;
    }

    let (Some(video), Some(canvas)) = (
        model.video_ref.cast::<HtmlVideoElement>(),
        model.canvas_ref.cast::<HtmlCanvasElement>(),
    ) else {
        fail(model, ctx, CaptureError::CameraUnavailable);
        return true;
    };

    model.state = UiState::Capturing;
    match capture::capture_video_frame(&video, &canvas) {
        Ok(image) => submit_for_prediction(model, ctx, image),
        Err(err) => fail(model, ctx, err),
    }
    true
}

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: File) -> bool {
    if model.state.is_busy() {
        return false;
    }

    if let Err(err) = upload::validate_upload(&file.type_(), file.size() as u64) {
        log::warn!("rejected upload {:?}: {err}", file.name());
        fail(model, ctx, err);
        return true;
    }

    model.state = UiState::Capturing;

    let link = ctx.link().clone();
    let file = GlooFile::from(file);
    model.pending_read = Some(gloo_file::callbacks::read_as_data_url(&file, move |result| {
        link.send_message(Msg::FileRead(result.map_err(|e| e.to_string())));
    }));
    true
}

pub fn handle_file_read(
    model: &mut Model,
    ctx: &Context<Model>,
    result: Result<String, String>,
) -> bool {
    model.pending_read = None;

    match result {
        Ok(data_url) => begin_decode(model, ctx, &data_url),
        Err(e) => {
            log::error!("file read failed: {e}");
            fail(model, ctx, CaptureError::InvalidFileType);
        }
    }
    true
}

fn begin_decode(model: &mut Model, ctx: &Context<Model>, data_url: &str) {
    let Ok(image) = HtmlImageElement::new() else {
        fail(model, ctx, CaptureError::InvalidFileType);
        return;
    };

    let link = ctx.link().clone();
    let on_load = EventListener::once(&image, "load", move |_| {
        link.send_message(Msg::ImageDecoded);
    });
    let link = ctx.link().clone();
    let on_error = EventListener::once(&image, "error", move |_| {
        link.send_message(Msg::ImageDecodeFailed);
    });

    image.set_src(data_url);

    // Keep the element and its listeners alive until a decode event fires.
    model.decoding_image = Some(image);
    model.decode_listeners = vec![on_load, on_error];
}

pub fn handle_image_decoded(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.decode_listeners.clear();
    let Some(image) = model.decoding_image.take() else {
        return false;
    };
    let Some(canvas) = model.canvas_ref.cast::<HtmlCanvasElement>() else {
        fail(model, ctx, CaptureError::InvalidFileType);
        return true;
    };

    match capture::capture_decoded_image(&image, &canvas) {
        Ok(captured) => submit_for_prediction(model, ctx, captured),
        Err(err) => fail(model, ctx, err),
    }
    true
}

pub fn handle_image_decode_failed(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.decode_listeners.clear();
    model.decoding_image = None;
    log::error!("upload could not be decoded as an image");
    fail(model, ctx, CaptureError::InvalidFileType);
    true
}

// --- Prediction ---

fn submit_for_prediction(model: &mut Model, ctx: &Context<Model>, image: CapturedImage) {
    log::info!(
        "submitting {}x{} capture for prediction",
        image.width,
        image.height
    );

    model.submitted_preview = Some(image.data_url.clone());
    model.prediction = None;
    model.state = UiState::AwaitingPrediction;

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::request_prediction(image.data_url).await {
            Ok(prediction) => link.send_message(Msg::PredictionReady(prediction)),
            Err(err) => link.send_message(Msg::PredictionFailed(err)),
        }
    });
}

pub fn handle_prediction_ready(
    model: &mut Model,
    ctx: &Context<Model>,
    prediction: api::Prediction,
) -> bool {
    log::info!("predicted class: {}", prediction.predicted_class);
    model.prediction = Some(prediction);
    model.state = UiState::resting(model.camera.is_active());
    show_toast(model, ctx, "Prediction complete".to_string(), true);
    true
}

pub fn handle_prediction_failed(model: &mut Model, ctx: &Context<Model>, err: CaptureError) -> bool {
    fail(model, ctx, err);
    true
}

// --- Session ---

pub fn handle_session_login(model: &mut Model, ctx: &Context<Model>, token: String) -> bool {
    model.authenticating = true;
    log::info!("exchanging identity token for a session");

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::establish_session(token).await {
            Ok(()) => link.send_message(Msg::SessionEstablished),
            Err(err) => link.send_message(Msg::SessionFailed(err)),
        }
    });
    true
}

pub fn handle_session_established(model: &mut Model) -> bool {
    model.authenticating = false;
    log::info!("session established");

    // Land on the home page with a clean URL; the toast rides along in
    // session storage.
    super::toast::stash_redirect_toast("Login successful!", true);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
    true
}

pub fn handle_session_failed(model: &mut Model, ctx: &Context<Model>, err: CaptureError) -> bool {
    model.authenticating = false;
    fail(model, ctx, err);
    true
}

pub fn handle_logout(model: &mut Model) -> bool {
    // Session teardown happens server-side; drop the stream before leaving.
    model.camera.release();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/logout");
    }
    true
}

// --- Notifications ---

pub fn show_toast(model: &mut Model, ctx: &Context<Model>, message: String, success: bool) {
    model.toast = Some(Toast { message, success });

    let link = ctx.link().clone();
    model.toast_timer = Some(Timeout::new(TOAST_DURATION_MS, move || {
        link.send_message(Msg::DismissToast);
    }));
}

pub fn handle_dismiss_toast(model: &mut Model) -> bool {
    model.toast = None;
    model.toast_timer = None;

    // The error state is transient: it clears with its notification.
    if model.state == UiState::Error {
        model.state = UiState::resting(model.camera.is_active());
    }
    true
}

/// Log the failure, surface it as an error toast, and park the pipeline
/// in the transient error state. Controls come back immediately.
pub fn fail(model: &mut Model, ctx: &Context<Model>, err: CaptureError) {
    log::error!("{err}");
    model.state = UiState::Error;
    show_toast(model, ctx, err.to_string(), false);
}
