//! Landing page for signed-in vendors: headline numbers and the most recent
//! orders.

use crate::components::AppShell;
use crate::features::auth::RequireVendor;
use crate::features::auth::state::use_auth;
use crate::features::store::sample::{sample_orders, sample_products};
use crate::features::store::types::format_cents;
use crate::features::store::{low_stock_count, open_order_count, revenue_cents};
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let orders = sample_orders();
    let products = sample_products();

    let revenue = format_cents(revenue_cents(&orders));
    let open_orders = open_order_count(&orders);
    let low_stock = low_stock_count(&products);
    let recent: Vec<_> = orders.into_iter().take(5).collect();

    view! {
        <RequireVendor>
            <AppShell>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {move || {
                                auth.session
                                    .get()
                                    .map(|vendor| format!("Welcome back, {}", vendor.display_name()))
                                    .unwrap_or_else(|| "Welcome back".to_string())
                            }}
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Here's how your store is doing."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <StatTile label="Revenue" value=revenue />
                        <StatTile label="Open orders" value=open_orders.to_string() />
                        <StatTile label="Low stock" value=low_stock.to_string() />
                    </div>

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                            <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                                "Recent orders"
                            </h2>
                        </div>
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {recent
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                    {order.id}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                    {order.customer}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class=order.status.badge_class()>
                                                        {order.status.label()}
                                                    </span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm text-gray-900 dark:text-white">
                                                    {format_cents(order.total_cents)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </AppShell>
        </RequireVendor>
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <p class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                {label}
            </p>
            <p class="mt-2 text-2xl font-semibold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}
