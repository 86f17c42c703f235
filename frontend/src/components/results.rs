use yew::prelude::*;

use crate::state::UiState;
use crate::Model;

/// The class the service reports for an unadulterated sample.
const CLEAN_CLASS: &str = "Milk";

fn is_clean(predicted_class: &str) -> bool {
    predicted_class == CLEAN_CLASS
}

pub fn render_results(model: &Model) -> Html {
    html! {
        <div class="results-section">
            { render_submitted_preview(model) }
            { render_prediction(model) }
            { render_cropped_image(model) }
        </div>
    }
}

fn render_submitted_preview(model: &Model) -> Html {
    match &model.submitted_preview {
        Some(data_url) => html! {
            <img id="image-preview" class="image-preview" src={data_url.clone()} alt="Submitted sample" />
        },
        None => html! {},
    }
}

fn render_prediction(model: &Model) -> Html {
    if model.state == UiState::AwaitingPrediction {
        return html! {
            <div id="prediction-text" class="prediction-result">
                <i class="fa-solid fa-spinner fa-spin"></i>{" Loading..."}
            </div>
        };
    }

    match &model.prediction {
        Some(prediction) => {
            let clean = is_clean(&prediction.predicted_class);
            html! {
                <div
                    id="prediction-text"
                    class={classes!(
                        "prediction-result",
                        if clean { "result-positive" } else { "result-negative" }
                    )}
                >
                    {"Predicted Class: "}<strong>{ &prediction.predicted_class }</strong>
                </div>
            }
        }
        None => html! {
            <div id="prediction-text" class="prediction-result prediction-placeholder">
                {"Capture or upload a sample to classify it"}
            </div>
        },
    }
}

fn render_cropped_image(model: &Model) -> Html {
    match model.prediction.as_ref().and_then(|p| p.cropped_image.as_ref()) {
        Some(data_url) => html! {
            <img
                id="cropped-image-preview"
                class="image-preview"
                src={data_url.clone()}
                alt="Cropped sample"
            />
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_clean_class_is_positive() {
        assert!(is_clean("Milk"));
        assert!(!is_clean("Milk+Oil"));
        assert!(!is_clean("milk"));
        assert!(!is_clean(""));
    }
}
