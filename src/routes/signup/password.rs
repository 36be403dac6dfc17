//! Password-creation step for first-time vendors. Client-side checks run
//! before any request; the request itself is authenticated by the short-lived
//! setup token. Credentials are persisted only when the response carries both
//! the session token and the vendor profile.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::session::{self, BrowserSession};
use crate::features::auth::types::{SetPasswordRequest, VendorInfo};
use crate::features::auth::{client, flow};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct PasswordInput {
    password: String,
    confirm: String,
}

#[component]
pub fn CreatePasswordStep(
    email: String,
    setup_token: String,
    #[prop(into)] on_created: Callback<(String, VendorInfo)>,
) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |input: &PasswordInput| {
        let input = input.clone();
        let setup_token = setup_token.clone();
        async move {
            let request = SetPasswordRequest {
                password: input.password,
                confirm_password: input.confirm,
            };
            let response = client::set_password(&request, &setup_token).await?;
            let (token, vendor) = response.into_credentials()?;
            session::persist(&BrowserSession, &token, &vendor)?;
            Ok::<VendorInfo, AppError>(vendor)
        }
    });

    let email_for_done = email.clone();
    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(vendor) => on_created.run((email_for_done.clone(), vendor)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if create_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();
        if let Err(err) = flow::validate_new_password(&password_value, &confirm_value) {
            set_error.set(Some(err));
            return;
        }

        create_action.dispatch(PasswordInput {
            password: password_value,
            confirm: confirm_value,
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create a password"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "You're verified. Choose a password for " <span class="font-medium">{email}</span>
                </p>
            </div>

            <div class="mt-6 space-y-4">
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="new-password"
                        autofocus
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="confirm_password"
                    >
                        "Confirm password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_confirm.set(event_target_value(&event))
                    />
                </div>
            </div>

            <div class="mt-6">
                <Button button_type="submit" disabled=create_action.pending()>
                    {move || {
                        if create_action.pending().get() { "Creating..." } else { "Create password" }
                    }}
                </Button>
            </div>

            {move || {
                create_action
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
