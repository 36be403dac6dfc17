//! Auth feature module covering the OTP signup flow, credential persistence,
//! and session hydration. It keeps authentication logic out of the UI and
//! must stay aligned with backend protocol expectations.
//!
//! Flow Overview: Signup dispatches an email OTP, verifies it, and branches
//! into password creation (first sign-in, gated by a short-lived setup token)
//! or login. Both credential endpoints return `{ token, vendor }`, persisted
//! together and read back before the dashboard is entered.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireVendor;
