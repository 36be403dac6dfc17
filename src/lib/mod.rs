//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Email:** The client POSTs to `/vendor/send-otp` and the backend emails
//!    a 6-digit code.
//! 2. **OTP:** The code is submitted to `/vendor/verify-otp`; the response
//!    shape decides whether the vendor creates a password (first sign-in,
//!    short-lived setup token) or signs in with an existing one.
//! 3. **Credentials:** `/vendor/set-password` (bearer setup token) and
//!    `/vendor/login` both return `{ token, vendor }`, persisted together in
//!    durable browser storage and read by the dashboard.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::AppError;
