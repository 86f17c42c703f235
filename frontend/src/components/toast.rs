use gloo_storage::{SessionStorage, Storage};
use yew::prelude::*;

use crate::Model;

/// How long a notification stays visible.
pub const TOAST_DURATION_MS: u32 = 3000;

const MESSAGE_KEY: &str = "toastMessage";
const SUCCESS_KEY: &str = "toastSuccess";

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub success: bool,
}

/// Keep a toast alive across a full-page redirect.
pub fn stash_redirect_toast(message: &str, success: bool) {
    let _ = SessionStorage::set(MESSAGE_KEY, message);
    let _ = SessionStorage::set(SUCCESS_KEY, success);
}

/// Pop a toast stashed before the last redirect, if any.
pub fn take_redirect_toast() -> Option<Toast> {
    let message: String = SessionStorage::get(MESSAGE_KEY).ok()?;
    let success: bool = SessionStorage::get(SUCCESS_KEY).unwrap_or(false);
    SessionStorage::delete(MESSAGE_KEY);
    SessionStorage::delete(SUCCESS_KEY);
    Some(Toast { message, success })
}

pub fn render_toast(model: &Model) -> Html {
    match &model.toast {
        Some(toast) => html! {
            <div
                id="toast"
                class={classes!("toast", if toast.success { "toast-success" } else { "toast-error" })}
            >
                { &toast.message }
            </div>
        },
        None => html! {},
    }
}
