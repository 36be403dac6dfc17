//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount from durable storage and exposes derived auth
//! signals for guards and routes.

use crate::features::auth::session::{self, BrowserSession};
use crate::features::auth::types::VendorInfo;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<VendorInfo>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<VendorInfo>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after login or password creation.
    pub fn set_session(&self, vendor: VendorInfo) {
        self.session.set(Some(vendor));
    }

    /// Clears durable storage and the in-memory session on sign-out.
    pub fn clear_session(&self) {
        session::clear(&BrowserSession);
        self.session.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session_signal = RwSignal::new(None);
    let auth = AuthContext::new(session_signal);
    provide_context(auth);

    if let Some((_token, vendor)) = session::load(&BrowserSession) {
        auth.set_session(vendor);
    }

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}
