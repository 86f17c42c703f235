use gloo_events::EventListener;
use gloo_file::callbacks::FileReader;
use gloo_timers::callback::Timeout;
use shared::FacingMode;
use web_sys::{File, HtmlImageElement, MediaStream};
use yew::prelude::*;

mod api;
mod camera;
mod capture;
mod components;
mod error;
mod state;
mod upload;

use camera::CameraSession;
use components::toast::Toast;
use components::{auth_button, camera_section, handlers, header, results, toast, upload_section};
use error::CaptureError;
use state::UiState;

// Yew msg components
enum Msg {
    // Camera lifecycle
    ToggleCamera,
    SwitchCamera,
    CameraAcquired(MediaStream, FacingMode),
    CameraFailed(CaptureError),

    // Capture & upload
    CaptureFrame,
    FileSelected(File),
    FileRead(Result<String, String>),
    ImageDecoded,
    ImageDecodeFailed,

    // Prediction
    PredictionReady(api::Prediction),
    PredictionFailed(CaptureError),

    // Session
    SessionLogin(String),
    SessionEstablished,
    SessionFailed(CaptureError),
    Logout,

    // Notifications
    ShowToast(Toast),
    DismissToast,
}

// Main component
struct Model {
    state: UiState,
    camera: CameraSession,
    prediction: Option<api::Prediction>,
    /// Data URL of the last image handed to submission, shown as preview.
    submitted_preview: Option<String>,

    toast: Option<Toast>,
    toast_timer: Option<Timeout>,

    // In-flight upload decode; dropping the handles cancels the work.
    pending_read: Option<FileReader>,
    decoding_image: Option<HtmlImageElement>,
    decode_listeners: Vec<EventListener>,

    authenticating: bool,

    video_ref: NodeRef,
    canvas_ref: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let model = Self {
            state: UiState::default(),
            camera: CameraSession::new(),
            prediction: None,
            submitted_preview: None,
            toast: None,
            toast_timer: None,
            pending_read: None,
            decoding_image: None,
            decode_listeners: Vec::new(),
            authenticating: false,
            video_ref: NodeRef::default(),
            canvas_ref: NodeRef::default(),
        };

        // A toast stashed before the login redirect survives the reload.
        if let Some(stashed) = toast::take_redirect_toast() {
            ctx.link().send_message(Msg::ShowToast(stashed));
        }

        // The identity-provider page hands the token back via the URL.
        if let Some(token) = auth_button::id_token_from_url() {
            ctx.link().send_message(Msg::SessionLogin(token));
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Camera lifecycle
            Msg::ToggleCamera => handlers::handle_toggle_camera(self, ctx),
            Msg::SwitchCamera => handlers::handle_switch_camera(self, ctx),
            Msg::CameraAcquired(stream, facing) => {
                handlers::handle_camera_acquired(self, ctx, stream, facing)
            }
            Msg::CameraFailed(err) => handlers::handle_camera_failed(self, ctx, err),

            // Capture & upload
            Msg::CaptureFrame => handlers::handle_capture_frame(self, ctx),
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::FileRead(result) => handlers::handle_file_read(self, ctx, result),
            Msg::ImageDecoded => handlers::handle_image_decoded(self, ctx),
            Msg::ImageDecodeFailed => handlers::handle_image_decode_failed(self, ctx),

            // Prediction
            Msg::PredictionReady(prediction) => {
                handlers::handle_prediction_ready(self, ctx, prediction)
            }
            Msg::PredictionFailed(err) => handlers::handle_prediction_failed(self, ctx, err),

            // Session
            Msg::SessionLogin(token) => handlers::handle_session_login(self, ctx, token),
            Msg::SessionEstablished => handlers::handle_session_established(self),
            Msg::SessionFailed(err) => handlers::handle_session_failed(self, ctx, err),
            Msg::Logout => handlers::handle_logout(self),

            // Notifications
            Msg::ShowToast(t) => {
                handlers::show_toast(self, ctx, t.message, t.success);
                true
            }
            Msg::DismissToast => handlers::handle_dismiss_toast(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { auth_button::render_auth_section(self, ctx) }

                <main class="main-content">
                    { camera_section::render_camera_section(self, ctx) }
                    { upload_section::render_upload_section(self, ctx) }
                    { results::render_results(self) }
                </main>

                { toast::render_toast(self) }

                <footer class="app-footer">
                    <p>{"Milk sample classification"}</p>
                </footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // The stream handle must not outlive the page session.
        self.camera.release();
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
