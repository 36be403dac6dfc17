//! First step of the signup flow: collect an email and dispatch a one-time
//! code to it. Format checking is left to the browser's native email input.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::types::SendOtpRequest;
use crate::features::auth::{client, flow};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn EmailStep(#[prop(into)] on_advance: Callback<flow::SignupStep>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let send_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move {
            client::send_otp(&SendOtpRequest {
                email: email.clone(),
            })
            .await?;
            Ok::<String, AppError>(email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(email) => on_advance.run(flow::otp_dispatched(email)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if send_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);
        send_action.dispatch(email.get_untracked().trim().to_string());
    };

    view! {
        <form on:submit=on_submit>
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Become a seller"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Enter your email and we'll send you a 6-digit code."
                </p>
            </div>

            <div class="mt-6">
                <label
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                    for="email"
                >
                    "Email"
                </label>
                <input
                    id="email"
                    type="email"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    autocomplete="email"
                    autofocus
                    placeholder="you@stallname.com"
                    required
                    on:input=move |event| set_email.set(event_target_value(&event))
                />
            </div>

            <div class="mt-6">
                <Button button_type="submit" disabled=send_action.pending()>
                    {move || if send_action.pending().get() { "Sending..." } else { "Send code" }}
                </Button>
            </div>

            {move || {
                send_action
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
