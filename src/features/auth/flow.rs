//! State machine for the vendor signup/login flow. Each step carries only its
//! own payload, so a setup token can exist while creating a password and at no
//! other time. The transition helpers are pure; the signup route owns the
//! rendering and the navigation side effects.

use crate::app_lib::AppError;
use crate::features::auth::session::{self, SessionStore};
use crate::features::auth::types::{VendorInfo, VerifyOtpResponse};

/// Number of OTP slots.
pub const OTP_LEN: usize = 6;
/// Seconds before the resend action becomes available again.
pub const RESEND_COOLDOWN_SECS: u32 = 60;
/// Minimum password length enforced by the client before any request.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Active step of the flow. Reached states:
/// Email → Otp → (CreatePassword | Login), CreatePassword → (Success | Login
/// | dashboard), Success → Login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupStep {
    Email,
    Otp { email: String },
    CreatePassword { email: String, setup_token: String },
    Success { email: String },
    Login { email: String },
}

/// Email step: the OTP dispatch succeeded, move on with the collected address.
pub fn otp_dispatched(email: String) -> SignupStep {
    SignupStep::Otp { email }
}

/// OTP step: the user wants a different address; the collected email is
/// discarded.
pub fn back_to_email() -> SignupStep {
    SignupStep::Email
}

/// Branches on the verify response shape. First-time vendors get a setup
/// token and go on to create a password; returning vendors sign in. A
/// response claiming a password is needed without carrying a usable token
/// matches neither branch and is rejected as a protocol error.
pub fn verification_outcome(
    email: &str,
    response: &VerifyOtpResponse,
) -> Result<SignupStep, AppError> {
    if !response.needs_password {
        return Ok(SignupStep::Login {
            email: email.to_string(),
        });
    }

    match response.setup_token.as_deref() {
        Some(token) if !token.is_empty() => Ok(SignupStep::CreatePassword {
            email: email.to_string(),
            setup_token: token.to_string(),
        }),
        _ => Err(AppError::Protocol("Invalid response from server".to_string())),
    }
}

/// Success step: the vendor continues to sign in with the same address.
pub fn continue_to_login(email: String) -> SignupStep {
    SignupStep::Login { email }
}

/// Where the flow goes after a password was created and the credentials were
/// written to durable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostCreate {
    /// Approved vendor with an observable token: leave the flow.
    Dashboard,
    /// Newly registered vendor awaiting operator approval.
    Success { email: String },
    /// The stored token is unobservable; recover by signing in instead of
    /// failing the whole flow.
    Login { email: String },
}

pub fn after_password_created(
    store: &impl SessionStore,
    email: &str,
    vendor: &VendorInfo,
) -> PostCreate {
    if vendor.is_pending() {
        return PostCreate::Success {
            email: email.to_string(),
        };
    }

    if session::token(store).is_some() {
        PostCreate::Dashboard
    } else {
        PostCreate::Login {
            email: email.to_string(),
        }
    }
}

/// Reduces arbitrary input-field content to the single digit a slot keeps:
/// non-digits are stripped and only the last remaining digit survives.
pub fn normalize_digit(raw: &str) -> Option<char> {
    raw.chars().filter(char::is_ascii_digit).next_back()
}

/// Accepts a pasted code only when it is exactly `OTP_LEN` digits after
/// trimming; anything else leaves the slots untouched.
pub fn parse_paste(text: &str) -> Option<[char; OTP_LEN]> {
    let trimmed = text.trim();
    if trimmed.len() != OTP_LEN || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits: Vec<char> = trimmed.chars().collect();
    digits.try_into().ok()
}

/// Concatenates the slots into a submittable code, or `None` while any slot
/// is still empty.
pub fn complete_code(digits: &[String]) -> Option<String> {
    if digits.len() != OTP_LEN || digits.iter().any(|slot| slot.is_empty()) {
        return None;
    }
    Some(digits.concat())
}

/// One resend-countdown tick, with a floor of zero.
pub fn tick(countdown: u32) -> u32 {
    countdown.saturating_sub(1)
}

/// Client-side checks before the password-set request. Order matters: the
/// mismatch message wins over the length message.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    if password != confirm {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::MemorySession;

    fn vendor(status: Option<&str>) -> VendorInfo {
        VendorInfo {
            id: "v-1".to_string(),
            email: "a@b.com".to_string(),
            name: None,
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn dispatch_carries_the_collected_email() {
        assert_eq!(
            otp_dispatched("a@b.com".to_string()),
            SignupStep::Otp {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn backing_out_discards_the_email() {
        assert_eq!(back_to_email(), SignupStep::Email);
    }

    #[test]
    fn first_time_vendor_goes_to_password_creation() {
        let response = VerifyOtpResponse {
            needs_password: true,
            setup_token: Some("tok1".to_string()),
        };
        assert_eq!(
            verification_outcome("a@b.com", &response).expect("expected step"),
            SignupStep::CreatePassword {
                email: "a@b.com".to_string(),
                setup_token: "tok1".to_string(),
            }
        );
    }

    #[test]
    fn returning_vendor_goes_to_login_with_prefilled_email() {
        let response = VerifyOtpResponse {
            needs_password: false,
            setup_token: None,
        };
        assert_eq!(
            verification_outcome("a@b.com", &response).expect("expected step"),
            SignupStep::Login {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn needs_password_without_a_token_is_a_protocol_error() {
        for setup_token in [None, Some(String::new())] {
            let response = VerifyOtpResponse {
                needs_password: true,
                setup_token,
            };
            let err = verification_outcome("a@b.com", &response).unwrap_err();
            assert_eq!(err.to_string(), "Invalid response from server");
        }
    }

    #[test]
    fn persisted_token_leads_to_the_dashboard() {
        let store = MemorySession::default();
        session::persist(&store, "T", &vendor(None)).expect("persist failed");

        assert_eq!(
            after_password_created(&store, "a@b.com", &vendor(None)),
            PostCreate::Dashboard
        );
    }

    #[test]
    fn unobservable_token_falls_back_to_login() {
        let store = MemorySession::default();
        assert_eq!(
            after_password_created(&store, "a@b.com", &vendor(None)),
            PostCreate::Login {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn pending_vendor_sees_the_success_screen() {
        let store = MemorySession::default();
        session::persist(&store, "T", &vendor(Some("pending"))).expect("persist failed");

        assert_eq!(
            after_password_created(&store, "a@b.com", &vendor(Some("pending"))),
            PostCreate::Success {
                email: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn normalize_digit_keeps_the_last_digit_only() {
        assert_eq!(normalize_digit("7"), Some('7'));
        assert_eq!(normalize_digit("a7b9"), Some('9'));
        assert_eq!(normalize_digit("12"), Some('2'));
        assert_eq!(normalize_digit("x"), None);
        assert_eq!(normalize_digit(""), None);
    }

    #[test]
    fn paste_requires_exactly_six_digits() {
        assert_eq!(
            parse_paste("123456"),
            Some(['1', '2', '3', '4', '5', '6'])
        );
        assert_eq!(parse_paste(" 123456 "), Some(['1', '2', '3', '4', '5', '6']));
        assert_eq!(parse_paste("12345"), None);
        assert_eq!(parse_paste("1234567"), None);
        assert_eq!(parse_paste("12345a"), None);
        assert_eq!(parse_paste(""), None);
    }

    #[test]
    fn code_is_submittable_only_when_every_slot_is_filled() {
        let typed: Vec<String> = "123456".chars().map(|c| c.to_string()).collect();
        assert_eq!(complete_code(&typed).as_deref(), Some("123456"));

        let mut partial = typed.clone();
        partial[3].clear();
        assert_eq!(complete_code(&partial), None);
    }

    #[test]
    fn digit_by_digit_entry_submits_exactly_what_was_typed() {
        for code in ["000000", "918273", "555555"] {
            let slots: Vec<String> = code
                .chars()
                .map(|c| normalize_digit(&c.to_string()).expect("digit").to_string())
                .collect();
            assert_eq!(complete_code(&slots).as_deref(), Some(code));
        }
    }

    #[test]
    fn countdown_ticks_to_a_floor_of_zero() {
        let mut countdown = RESEND_COOLDOWN_SECS;
        for _ in 0..RESEND_COOLDOWN_SECS {
            assert!(countdown > 0);
            countdown = tick(countdown);
        }
        assert_eq!(countdown, 0);
        assert_eq!(tick(countdown), 0);
    }

    #[test]
    fn mismatched_passwords_are_rejected_before_length() {
        let err = validate_new_password("short", "other").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn short_passwords_are_rejected() {
        let err = validate_new_password("five5", "five5").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn valid_passwords_pass() {
        assert!(validate_new_password("secret1", "secret1").is_ok());
    }
}
