//! Marketplace announcements feed.

use crate::components::AppShell;
use crate::features::auth::RequireVendor;
use crate::features::store::sample::sample_announcements;
use leptos::prelude::*;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let announcements = sample_announcements();

    view! {
        <RequireVendor>
            <AppShell>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Announcements"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "News from the marketplace team."
                        </p>
                    </div>

                    <div class="space-y-4">
                        {announcements
                            .into_iter()
                            .map(|announcement| {
                                view! {
                                    <article class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                                        <div class="flex items-center justify-between">
                                            <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                                                {announcement.title}
                                            </h2>
                                            <div class="flex items-center gap-3">
                                                {announcement
                                                    .pinned
                                                    .then(|| {
                                                        view! {
                                                            <span class="inline-flex rounded-full bg-blue-100 px-2.5 py-0.5 text-xs font-medium text-blue-800">
                                                                "Pinned"
                                                            </span>
                                                        }
                                                    })}
                                                <span class="text-xs text-gray-400">
                                                    {announcement.published_at}
                                                </span>
                                            </div>
                                        </div>
                                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                            {announcement.body}
                                        </p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </AppShell>
        </RequireVendor>
    }
}
