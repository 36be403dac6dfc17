//! Inventory list over sample products with stock flags.

use crate::components::AppShell;
use crate::features::auth::RequireVendor;
use crate::features::store::sample::sample_products;
use crate::features::store::types::format_cents;
use leptos::prelude::*;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let products = sample_products();

    view! {
        <RequireVendor>
            <AppShell>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Inventory"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Listings currently on your storefront."
                        </p>
                    </div>

                    <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "SKU"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Product"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Category"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Price"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                        "Stock"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {products
                                    .into_iter()
                                    .map(|product| {
                                        let low = product.is_low_stock();
                                        view! {
                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                    {product.sku}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                                                    {product.name}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                    {product.category}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm text-gray-900 dark:text-white">
                                                    {format_cents(product.price_cents)}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                                    {if low {
                                                        view! {
                                                            <span class="inline-flex rounded-full bg-amber-100 px-2.5 py-0.5 text-xs font-medium text-amber-800">
                                                                {product.stock} " left"
                                                            </span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="text-gray-500 dark:text-gray-400">
                                                                {product.stock}
                                                            </span>
                                                        }
                                                            .into_any()
                                                    }}
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
