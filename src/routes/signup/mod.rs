//! Multi-step vendor signup flow: email → one-time code → first password or
//! sign-in. The controller owns the active step and everything carried across
//! transitions; steps hand data back through callbacks and never talk to each
//! other directly. Pure transition logic lives in `features::auth::flow`.

mod email;
mod otp;
mod password;
mod success;

use crate::components::AppShell;
use crate::features::auth::flow::{self, PostCreate, SignupStep};
use crate::features::auth::session::BrowserSession;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::VendorInfo;
use crate::routes::login::LoginForm;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use self::email::EmailStep;
use self::otp::OtpStep;
use self::password::CreatePasswordStep;
use self::success::SuccessStep;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (step, set_step) = signal(SignupStep::Email);
    let (entered, set_entered) = signal(false);

    Effect::new(move |_| {
        if entered.get() {
            navigate(paths::DASHBOARD, Default::default());
        }
    });

    let advance = Callback::new(move |next: SignupStep| set_step.set(next));

    let on_created = Callback::new(move |(email, vendor): (String, VendorInfo)| {
        match flow::after_password_created(&BrowserSession, &email, &vendor) {
            PostCreate::Dashboard => {
                auth.set_session(vendor);
                set_entered.set(true);
            }
            PostCreate::Success { email } => set_step.set(SignupStep::Success { email }),
            // The write is unobservable; recover through a normal sign-in.
            PostCreate::Login { email } => set_step.set(SignupStep::Login { email }),
        }
    });

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                {move || match step.get() {
                    SignupStep::Email => view! { <EmailStep on_advance=advance /> }.into_any(),
                    SignupStep::Otp { email } => {
                        view! { <OtpStep email=email on_advance=advance /> }.into_any()
                    }
                    SignupStep::CreatePassword { email, setup_token } => {
                        view! {
                            <CreatePasswordStep
                                email=email
                                setup_token=setup_token
                                on_created=on_created
                            />
                        }
                            .into_any()
                    }
                    SignupStep::Success { email } => {
                        view! { <SuccessStep email=email on_continue=advance /> }.into_any()
                    }
                    SignupStep::Login { email } => {
                        view! { <LoginForm prefill_email=email /> }.into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
