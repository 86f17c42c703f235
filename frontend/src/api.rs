use gloo_console::error;
use gloo_net::http::Request;
use shared::{PredictRequest, PredictResponse, SessionLoginRequest, SessionLoginResponse};

use crate::error::CaptureError;

pub const PREDICT_ENDPOINT: &str = "/predict";
pub const SESSION_LOGIN_ENDPOINT: &str = "/auth/sessionLogin";

/// Outcome of a successful classification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predicted_class: String,
    /// Data URL of the background-cropped sample the service classified.
    pub cropped_image: Option<String>,
}

/// POST the encoded image to the prediction endpoint. Suspends until the
/// service responds or the transport fails; no timeout, no retry, no
/// cancellation once in flight.
pub async fn request_prediction(image: String) -> Result<Prediction, CaptureError> {
    let request = Request::post(PREDICT_ENDPOINT)
        .json(&PredictRequest { image })
        .map_err(|e| CaptureError::Transport(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        error!(format!("prediction request failed: {e:?}"));
        CaptureError::Transport(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        // Error statuses still carry a JSON body with a message where the
        // service could produce one.
        let body = response.json::<PredictResponse>().await.unwrap_or_default();
        let message = body
            .error
            .unwrap_or_else(|| format!("service returned status {status}"));
        return Err(CaptureError::PredictionService(message));
    }

    let body = response
        .json::<PredictResponse>()
        .await
        .map_err(|e| CaptureError::PredictionService(format!("unreadable response: {e}")))?;

    if let Some(message) = body.error {
        return Err(CaptureError::PredictionService(message));
    }

    match body.predicted_class {
        Some(predicted_class) => Ok(Prediction {
            predicted_class,
            cropped_image: body.cropped_image,
        }),
        None => Err(CaptureError::PredictionService(
            "response carried no predicted class".to_string(),
        )),
    }
}

/// Exchange an identity-provider token for a server-side session.
pub async fn establish_session(id_token: String) -> Result<(), CaptureError> {
    let request = Request::post(SESSION_LOGIN_ENDPOINT)
        .json(&SessionLoginRequest { id_token })
        .map_err(|e| CaptureError::SessionEstablishment(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        error!(format!("session login failed: {e:?}"));
        CaptureError::SessionEstablishment(e.to_string())
    })?;

    let body = response
        .json::<SessionLoginResponse>()
        .await
        .unwrap_or_default();

    if !response.ok() {
        let message = body
            .error
            .unwrap_or_else(|| format!("service returned status {}", response.status()));
        return Err(CaptureError::SessionEstablishment(message));
    }
    if let Some(message) = body.error {
        return Err(CaptureError::SessionEstablishment(message));
    }

    Ok(())
}
