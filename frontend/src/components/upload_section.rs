use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::utils::debounce;
use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));

        // Reset so re-selecting the same file fires another change event.
        input.set_value("");

        file.map(Msg::FileSelected)
    });

    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("upload-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="upload-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="upload-btn"
                disabled={model.state.is_busy()}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Upload Image"}
            </button>
            <p class="file-types">{"JPG, PNG or WEBP, up to 4MB"}</p>
        </div>
    }
}
