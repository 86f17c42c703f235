use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Body of a classification request: the captured frame or upload as a
/// JPEG data URL.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PredictRequest {
    pub image: String,
}

/// Classification response. Success carries `predicted_class` and the
/// background-cropped image; failure carries `error`. The service never
/// sets both.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PredictResponse {
    pub predicted_class: Option<String>,
    pub cropped_image: Option<String>,
    pub error: Option<String>,
}

/// Exchanges an identity-provider token for a server-side session cookie.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionLoginRequest {
    #[serde(rename = "idToken")]
    pub id_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SessionLoginResponse {
    pub status: Option<String>,
    pub error: Option<String>,
}

/// Which physical camera a capture constraint requests. The `Display`
/// form is the exact `facingMode` constraint value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FacingMode {
    User,
    #[default]
    Environment,
}

impl FacingMode {
    pub fn opposite(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }

    /// Human-readable name used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "front",
            Self::Environment => "back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_request_serialises_with_image_field() {
        let req = PredictRequest {
            image: "data:image/jpeg;base64,abc".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["image"], "data:image/jpeg;base64,abc");
    }

    #[test]
    fn predict_response_parses_success_body() {
        let body = r#"{"predicted_class":"Milk","cropped_image":"data:image/jpeg;base64,xyz","status":"success"}"#;
        let resp: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.predicted_class.as_deref(), Some("Milk"));
        assert_eq!(resp.cropped_image.as_deref(), Some("data:image/jpeg;base64,xyz"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn predict_response_parses_error_body() {
        let body = r#"{"error":"No image provided in the request."}"#;
        let resp: PredictResponse = serde_json::from_str(body).unwrap();
        assert!(resp.predicted_class.is_none());
        assert_eq!(resp.error.as_deref(), Some("No image provided in the request."));
    }

    #[test]
    fn session_login_request_uses_camel_case_token_field() {
        let req = SessionLoginRequest {
            id_token: "tok".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["idToken"], "tok");
        assert!(json.get("id_token").is_none());
    }

    #[test]
    fn session_login_response_parses_both_shapes() {
        let ok: SessionLoginResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(ok.status.as_deref(), Some("success"));
        assert!(ok.error.is_none());

        let err: SessionLoginResponse = serde_json::from_str(r#"{"error":"Invalid token"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("Invalid token"));
    }

    #[test]
    fn facing_mode_display_matches_constraint_values() {
        assert_eq!(FacingMode::User.to_string(), "user");
        assert_eq!(FacingMode::Environment.to_string(), "environment");
    }

    #[test]
    fn facing_mode_parses_constraint_values() {
        assert_eq!("user".parse::<FacingMode>(), Ok(FacingMode::User));
        assert_eq!("environment".parse::<FacingMode>(), Ok(FacingMode::Environment));
        assert!("rear".parse::<FacingMode>().is_err());
    }

    #[test]
    fn facing_mode_opposite_flips_both_ways() {
        assert_eq!(FacingMode::User.opposite(), FacingMode::Environment);
        assert_eq!(FacingMode::Environment.opposite(), FacingMode::User);
        assert_eq!(FacingMode::default(), FacingMode::Environment);
    }
}
