//! Request and response types for the vendor auth API. Wire field names are
//! camelCase. The verify response is deliberately loose: the backend omits
//! `setupToken` for vendors who already have a password, and the credential
//! responses may arrive incomplete, which callers must treat as a protocol
//! error rather than a success.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub needs_password: bool,
    #[serde(default)]
    pub setup_token: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential payload returned by password creation and login. Both fields are
/// required for the response to count as a success, regardless of HTTP status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub vendor: Option<VendorInfo>,
}

impl AuthResponse {
    /// Unpacks the session credentials, rejecting 2xx responses that are
    /// missing either field.
    pub fn into_credentials(self) -> Result<(String, VendorInfo), AppError> {
        match (self.token, self.vendor) {
            (Some(token), Some(vendor)) if !token.is_empty() => Ok((token, vendor)),
            _ => Err(AppError::Protocol("Invalid response from server".to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl VendorInfo {
    /// Newly registered vendors stay pending until an operator approves them.
    pub fn is_pending(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("pending") | Some("pending_approval")
        )
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_response_decodes_camel_case_fields() {
        let response: VerifyOtpResponse =
            serde_json::from_str(r#"{"needsPassword":true,"setupToken":"tok1"}"#)
                .expect("Failed to deserialize");
        assert!(response.needs_password);
        assert_eq!(response.setup_token.as_deref(), Some("tok1"));

        let returning: VerifyOtpResponse = serde_json::from_str(r#"{"needsPassword":false}"#)
            .expect("Failed to deserialize");
        assert!(!returning.needs_password);
        assert_eq!(returning.setup_token, None);
    }

    #[test]
    fn verify_response_tolerates_extra_fields() {
        let response: VerifyOtpResponse =
            serde_json::from_str(r#"{"needsPassword":false,"vendorId":"v-1"}"#)
                .expect("Failed to deserialize");
        assert!(!response.needs_password);
    }

    #[test]
    fn set_password_request_serializes_confirm_password_in_camel_case() {
        let request = SetPasswordRequest {
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("confirmPassword"));
    }

    #[test]
    fn auth_response_requires_token_and_vendor() {
        let complete: AuthResponse =
            serde_json::from_str(r#"{"token":"T","vendor":{"id":"v-1","email":"a@b.com"}}"#)
                .expect("Failed to deserialize");
        let (token, vendor) = complete.into_credentials().expect("expected credentials");
        assert_eq!(token, "T");
        assert_eq!(vendor.email, "a@b.com");

        let missing_vendor: AuthResponse =
            serde_json::from_str(r#"{"token":"T"}"#).expect("Failed to deserialize");
        let err = missing_vendor.into_credentials().unwrap_err();
        assert_eq!(err.to_string(), "Invalid response from server");

        let empty_token: AuthResponse =
            serde_json::from_str(r#"{"token":"","vendor":{"id":"v-1","email":"a@b.com"}}"#)
                .expect("Failed to deserialize");
        assert!(empty_token.into_credentials().is_err());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let vendor = VendorInfo {
            id: "v-1".to_string(),
            email: "a@b.com".to_string(),
            name: Some("  ".to_string()),
            status: None,
        };
        assert_eq!(vendor.display_name(), "a@b.com");
    }
}
