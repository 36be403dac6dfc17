//! Analytics overview: headline numbers plus a simple per-status breakdown
//! rendered as proportional bars. All figures come from the sample data.

use crate::components::AppShell;
use crate::features::auth::RequireVendor;
use crate::features::store::sample::{sample_orders, sample_products};
use crate::features::store::types::{OrderStatus, format_cents};
use crate::features::store::{low_stock_count, open_order_count, revenue_cents};
use leptos::prelude::*;

const STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let orders = sample_orders();
    let products = sample_products();

    let revenue = format_cents(revenue_cents(&orders));
    let open_orders = open_order_count(&orders);
    let low_stock = low_stock_count(&products);
    let total = orders.len().max(1);
    let breakdown: Vec<(OrderStatus, usize)> = STATUSES
        .iter()
        .map(|status| {
            (
                *status,
                orders.iter().filter(|order| order.status == *status).count(),
            )
        })
        .collect();

    view! {
        <RequireVendor>
            <AppShell>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Analytics"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "A snapshot of recent store activity."
                        </p>
                    </div>

                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                            <p class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Revenue"
                            </p>
                            <p class="mt-2 text-2xl font-semibold text-gray-900 dark:text-white">
                                {revenue}
                            </p>
                        </div>
                        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                            <p class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Open orders"
                            </p>
                            <p class="mt-2 text-2xl font-semibold text-gray-900 dark:text-white">
                                {open_orders}
                            </p>
                        </div>
                        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                            <p class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Low-stock products"
                            </p>
                            <p class="mt-2 text-2xl font-semibold text-gray-900 dark:text-white">
                                {low_stock}
                            </p>
                        </div>
                    </div>

                    <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                        <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                            "Orders by status"
                        </h2>
                        <div class="mt-4 space-y-3">
                            {breakdown
                                .into_iter()
                                .map(|(status, count)| {
                                    let percent = count * 100 / total;
                                    view! {
                                        <div>
                                            <div class="flex items-center justify-between text-sm">
                                                <span class="text-gray-600 dark:text-gray-300">
                                                    {status.label()}
                                                </span>
                                                <span class="text-gray-500 dark:text-gray-400">
                                                    {count}
                                                </span>
                                            </div>
                                            <div class="mt-1 h-2 rounded-full bg-gray-100 dark:bg-gray-700">
                                                <div
                                                    class="h-2 rounded-full bg-blue-600"
                                                    style=format!("width: {percent}%")
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </AppShell>
        </RequireVendor>
    }
}
