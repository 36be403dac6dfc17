//! Terminal informational step for newly registered vendors awaiting operator
//! approval. No network calls; the single action continues to sign-in.

use crate::components::Button;
use crate::features::auth::flow;
use leptos::prelude::*;

#[component]
pub fn SuccessStep(
    email: String,
    #[prop(into)] on_continue: Callback<flow::SignupStep>,
) -> impl IntoView {
    let email_for_continue = email.clone();

    view! {
        <div>
            <div class="space-y-2">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "You're registered"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    <span class="font-medium">{email}</span>
                    " is set up as a seller account."
                </p>
            </div>

            <div class="mt-6 rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-800 dark:border-amber-400 dark:bg-amber-900/30 dark:text-amber-200">
                "Your store is pending approval. We'll email you once an operator "
                "reviews it; you can sign in in the meantime."
            </div>

            <div class="mt-6">
                <Button on:click=move |_| {
                    on_continue.run(flow::continue_to_login(email_for_continue.clone()))
                }>"Continue"</Button>
            </div>
        </div>
    }
}
