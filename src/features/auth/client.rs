//! Client wrappers for the vendor auth API endpoints. These helpers centralize
//! paths and auth headers, keeping the flow steps free of request plumbing.

use crate::{
    app_lib::{AppError, api},
    features::auth::types::{
        AuthResponse, LoginRequest, SendOtpRequest, SetPasswordRequest, VerifyOtpRequest,
        VerifyOtpResponse,
    },
};

/// Asks the backend to email a one-time code. Only the status matters; the
/// success body carries nothing the client consumes.
pub async fn send_otp(request: &SendOtpRequest) -> Result<(), AppError> {
    api::post_json_discard("/vendor/send-otp", request).await
}

/// Submits the 6-digit code for verification and returns the branching
/// payload (needs-password vs. already-has-password).
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<VerifyOtpResponse, AppError> {
    api::post_json("/vendor/verify-otp", request).await
}

/// Sets the first password, authenticated by the short-lived setup token.
pub async fn set_password(
    request: &SetPasswordRequest,
    setup_token: &str,
) -> Result<AuthResponse, AppError> {
    api::post_json_with_bearer("/vendor/set-password", request, setup_token).await
}

/// Signs a returning vendor in.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    api::post_json("/vendor/login", request).await
}
