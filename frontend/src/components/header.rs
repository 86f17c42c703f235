use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-flask"></i> {" Milk Adulteration Detection"}</h1>
            <p class="subtitle">{"Capture a sample with your camera or upload a photo"}</p>
        </header>
    }
}
