//! Sign-in for returning vendors. The form is shared with the signup flow,
//! which renders it as its final step with the verified email prefilled; the
//! standalone route prefills from the persisted session when one exists.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::session::{self, BrowserSession};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{LoginRequest, VendorInfo};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let prefill = session::load(&BrowserSession)
        .map(|(_token, vendor)| vendor.email)
        .unwrap_or_default();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <LoginForm prefill_email=prefill />
            </div>
        </AppShell>
    }
}

#[component]
pub fn LoginForm(#[prop(optional)] prefill_email: String) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let focus_email = prefill_email.is_empty();
    let (email, set_email) = signal(prefill_email);
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = LoginRequest {
                email: input.email,
                password: input.password,
            };
            let response = client::login(&request).await?;
            let (token, vendor) = response.into_credentials()?;
            session::persist(&BrowserSession, &token, &vendor)?;
            Ok::<VendorInfo, AppError>(vendor)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(vendor) => {
                    auth.set_session(vendor);
                    navigate(paths::DASHBOARD, Default::default());
                }
                // The password field keeps its value for a quick retry.
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if login_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Sign in"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Welcome back. Enter your seller credentials."
                </p>
            </div>

            <div class="mt-6 space-y-4">
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="email"
                        autofocus={focus_email}
                        required
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 pr-16 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            autocomplete="current-password"
                            autofocus={!focus_email}
                            required
                            prop:value=move || password.get()
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 px-3 text-xs font-medium text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>
            </div>

            <div class="mt-6">
                <Button button_type="submit" disabled=login_action.pending()>
                    {move || if login_action.pending().get() { "Signing in..." } else { "Sign in" }}
                </Button>
            </div>

            {move || {
                login_action
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
