use web_sys::UrlSearchParams;
use yew::prelude::*;

use crate::{Model, Msg};

/// Query parameter the identity-provider page hands the token back in.
const ID_TOKEN_PARAM: &str = "id_token";

/// Pull a pending identity token out of the current URL, if the page was
/// just returned to from the provider.
pub fn id_token_from_url() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.is_empty() {
        return None;
    }

    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(ID_TOKEN_PARAM).filter(|token| !token.is_empty())
}

pub fn render_auth_section(model: &Model, ctx: &Context<Model>) -> Html {
    if model.authenticating {
        return html! {
            <div class="auth-section">
                <div class="auth-loading">
                    <i class="fa-solid fa-spinner fa-spin"></i>
                    {" Signing in..."}
                </div>
            </div>
        };
    }

    let handle_login = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    });

    html! {
        <div class="auth-section">
            <button class="login-button" onclick={handle_login} title="Login">
                <i class="fa-solid fa-right-to-bracket"></i>
                {" Login"}
            </button>
            <button
                class="logout-button"
                onclick={ctx.link().callback(|_| Msg::Logout)}
                title="Logout"
            >
                <i class="fa-solid fa-sign-out-alt"></i>
                {" Logout"}
            </button>
        </div>
    }
}
