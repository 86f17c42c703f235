use yew::prelude::*;

use super::utils::debounce;
use crate::state::UiState;
use crate::{Model, Msg};

pub fn render_camera_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let busy = model.state.is_busy();
    let active = model.camera.is_active();

    html! {
        <div class="camera-section">
            <video
                id="camera"
                ref={model.video_ref.clone()}
                class={classes!("camera-feed", active.then_some("active"))}
                autoplay=true
                playsinline=true
                muted=true
            />
            // Off-screen drawing surface for frame grabs and uploads.
            <canvas id="canvas" ref={model.canvas_ref.clone()} style="display: none;" />

            <div class="button-container">
                <button
                    id="camera-control-btn"
                    class="camera-btn"
                    disabled={busy}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ToggleCamera)
                    })}
                >
                    { render_toggle_content(model) }
                </button>
                <button
                    id="switch-camera-btn"
                    class="camera-btn"
                    disabled={!active || busy}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::SwitchCamera)
                    })}
                >
                    <i class="fa-solid fa-camera-rotate"></i>{" Switch Camera"}
                </button>
                <button
                    id="capture-btn"
                    class="capture-btn"
                    disabled={!model.state.can_capture()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::CaptureFrame)
                    })}
                >
                    { render_capture_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_toggle_content(model: &Model) -> Html {
    if model.state == UiState::CameraStarting {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Starting..."}</> }
    } else if model.camera.is_active() {
        html! { <><i class="fa-solid fa-stop"></i>{" Stop Camera"}</> }
    } else {
        html! { <><i class="fa-solid fa-play"></i>{" Start Camera"}</> }
    }
}

fn render_capture_content(model: &Model) -> Html {
    if model.state == UiState::AwaitingPrediction {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-camera"></i>{" Capture & Predict"}</> }
    }
}
