//! Shared layout wrapper with the header, side navigation, and content
//! container. It centralizes chrome markup so routes can focus on content.
//! Navigation remains client-side; the backend enforces real access control.

use super::sidebar::Sidebar;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Wraps routes with the header, sidebar, and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="flex items-center justify-between px-4 py-3">
                    <A href=paths::DASHBOARD {..} class="flex items-center space-x-3">
                        <img src="/logo.svg" class="h-8" alt="Vendora" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Vendora Seller Hub"
                        </span>
                    </A>
                    <div class="flex items-center gap-4">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <Show
                                        when=on_login
                                        fallback=move || {
                                            view! {
                                                <A
                                                    href=paths::LOGIN
                                                    {..}
                                                    class="text-sm font-medium text-gray-700 hover:text-blue-700 dark:text-gray-200 dark:hover:text-blue-400"
                                                >
                                                    "Sign In"
                                                </A>
                                            }
                                        }
                                    >
                                        <A
                                            href=paths::SIGNUP
                                            {..}
                                            class="text-sm font-medium text-gray-700 hover:text-blue-700 dark:text-gray-200 dark:hover:text-blue-400"
                                        >
                                            "Sign Up"
                                        </A>
                                    </Show>
                                }
                            }
                        >
                            <span class="hidden sm:block text-sm text-gray-500 dark:text-gray-400">
                                {move || {
                                    auth.session
                                        .get()
                                        .map(|vendor| vendor.display_name().to_string())
                                        .unwrap_or_default()
                                }}
                            </span>
                            <button
                                type="button"
                                class="text-sm font-medium text-gray-700 hover:text-blue-700 dark:text-gray-200 dark:hover:text-blue-400"
                                on:click=move |_| auth.clear_session()
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <Show when=move || is_authenticated.get()>
                    <Sidebar />
                </Show>
                <main class="flex-1">
                    <div class="container mx-auto p-4 mt-6">{children()}</div>
                </main>
            </div>
        </div>
    }
}
