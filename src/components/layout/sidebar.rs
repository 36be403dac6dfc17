//! Side navigation for signed-in vendors, grouped by area of the storefront.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Store"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::DASHBOARD
                            icon="dashboard"
                            label="Dashboard"
                            active=Signal::derive(move || pathname() == paths::DASHBOARD)
                        />
                        <SidebarLink
                            target=paths::INVENTORY
                            icon="inventory_2"
                            label="Inventory"
                            active=Signal::derive(move || pathname().starts_with(paths::INVENTORY))
                        />
                        <SidebarLink
                            target=paths::ORDERS
                            icon="orders"
                            label="Orders"
                            active=Signal::derive(move || pathname().starts_with(paths::ORDERS))
                        />
                    </div>
                </div>

                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Finance"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::PAYMENTS
                            icon="payments"
                            label="Payments"
                            active=Signal::derive(move || pathname().starts_with(paths::PAYMENTS))
                        />
                        <SidebarLink
                            target=paths::ANALYTICS
                            icon="monitoring"
                            label="Analytics"
                            active=Signal::derive(move || pathname().starts_with(paths::ANALYTICS))
                        />
                    </div>
                </div>

                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Workspace"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::ANNOUNCEMENTS
                            icon="campaign"
                            label="Announcements"
                            active=Signal::derive(move || {
                                pathname().starts_with(paths::ANNOUNCEMENTS)
                            })
                        />
                    </div>
                </div>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "Vendora Seller Hub"
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <span class="material-symbols-outlined mr-3 text-xl transition-colors">{icon}</span>
            {label}
        </A>
    }
}
