//! Code-entry step: six single-digit slots, a resend window, and submission.
//! The one-second resend tick lives exactly as long as this step; navigating
//! back to the email step tears it down.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, OtpInput, Spinner, focus_slot};
use crate::features::auth::types::{SendOtpRequest, VerifyOtpRequest};
use crate::features::auth::{client, flow};
use gloo_timers::callback::Interval;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn OtpStep(
    email: String,
    #[prop(into)] on_advance: Callback<flow::SignupStep>,
) -> impl IntoView {
    let digits = RwSignal::new(vec![String::new(); flow::OTP_LEN]);
    let (countdown, set_countdown) = signal(flow::RESEND_COOLDOWN_SECS);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let slots: Vec<NodeRef<html::Input>> =
        (0..flow::OTP_LEN).map(|_| NodeRef::new()).collect();

    let ticker = StoredValue::new_local(Some(Interval::new(1_000, move || {
        set_countdown.update(|seconds| *seconds = flow::tick(*seconds));
    })));
    on_cleanup(move || {
        if let Some(handle) = ticker.try_update_value(|stored| stored.take()).flatten() {
            handle.cancel();
        }
    });

    let email_for_verify = email.clone();
    let verify_action = Action::new_local(move |code: &String| {
        let request = VerifyOtpRequest {
            email: email_for_verify.clone(),
            otp: code.clone(),
        };
        async move {
            let response = client::verify_otp(&request).await?;
            flow::verification_outcome(&request.email, &response)
        }
    });

    let slots_for_verify = slots.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(next) => on_advance.run(next),
                Err(err) => {
                    // A rejected code forces full re-entry.
                    set_error.set(Some(err));
                    digits.set(vec![String::new(); flow::OTP_LEN]);
                    focus_slot(&slots_for_verify, 0);
                }
            }
        }
    });

    let email_for_resend = email.clone();
    let resend_action = Action::new_local(move |_: &()| {
        let request = SendOtpRequest {
            email: email_for_resend.clone(),
        };
        async move { client::send_otp(&request).await }
    });

    let slots_for_resend = slots.clone();
    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    set_countdown.set(flow::RESEND_COOLDOWN_SECS);
                    digits.set(vec![String::new(); flow::OTP_LEN]);
                    focus_slot(&slots_for_resend, 0);
                }
                // The countdown keeps running out; only a successful resend
                // restarts it.
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if verify_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        match digits.with_untracked(|ds| flow::complete_code(ds)) {
            Some(code) => {
                verify_action.dispatch(code);
            }
            None => {
                set_error.set(Some(AppError::Validation(
                    "Please enter the complete 6-digit code".to_string(),
                )));
            }
        }
    };

    let shown_email = email.clone();
    view! {
        <form on:submit=on_submit>
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Check your email"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "We sent a 6-digit code to " <span class="font-medium">{shown_email}</span>
                </p>
            </div>

            <div class="mt-6">
                <OtpInput digits=digits slots=slots.clone() />
            </div>

            <div class="mt-4 text-sm">
                <button
                    type="button"
                    class="font-medium text-blue-600 hover:underline disabled:cursor-not-allowed disabled:text-gray-400 disabled:no-underline dark:text-blue-400"
                    disabled=move || countdown.get() > 0 || resend_action.pending().get()
                    on:click=move |_| {
                        resend_action.dispatch(());
                    }
                >
                    {move || {
                        let seconds = countdown.get();
                        if seconds > 0 {
                            format!("Resend code in {seconds}s")
                        } else if resend_action.pending().get() {
                            "Resending...".to_string()
                        } else {
                            "Resend code".to_string()
                        }
                    }}
                </button>
            </div>

            <div class="mt-6">
                <Button button_type="submit" disabled=verify_action.pending()>
                    {move || if verify_action.pending().get() { "Verifying..." } else { "Verify" }}
                </Button>
            </div>

            <div class="mt-4">
                <button
                    type="button"
                    class="text-sm font-medium text-gray-600 underline decoration-gray-300 underline-offset-4 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
                    on:click=move |_| on_advance.run(flow::back_to_email())
                >
                    "Use a different email"
                </button>
            </div>

            {move || {
                verify_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}
