//! Payout list over sample data with settlement state badges.

use crate::components::AppShell;
use crate::features::auth::RequireVendor;
use crate::features::store::sample::sample_payments;
use crate::features::store::settled_cents;
use crate::features::store::types::format_cents;
use leptos::prelude::*;

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let payments = sample_payments();
    let settled = format_cents(settled_cents(&payments));

    view! {
        <RequireVendor>
            <AppShell>
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                "Payments"
                            </h1>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Payouts for completed orders."
                            </p>
                        </div>
                        <div class="text-right">
                            <p class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                                "Settled to date"
                            </p>
                            <p class="text-xl font-semibold text-gray-900 dark:text-white">
                                {settled}
                            </p>
                        </div>
                    </div>

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Payout"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Order"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Date"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "State"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Amount"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {payments
                                    .into_iter()
                                    .map(|payment| {
                                        view! {
                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                    {payment.id}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                    {payment.order_id}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                    {payment.date}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class=payment.state.badge_class()>
                                                        {payment.state.label()}
                                                    </span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm text-gray-900 dark:text-white">
                                                    {format_cents(payment.amount_cents)}
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
