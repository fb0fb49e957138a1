//! POS Cart Table Component
//!
//! Editable sale lines. Quantity and unit price route through the cart
//! functions so the clamps hold no matter how the value was entered.

use leptos::*;

use crate::api::models::InvoiceItem;
use crate::state::cart;
use crate::state::global::GlobalState;
use crate::util::format_money;

#[component]
pub fn CartTable(lines: RwSignal<Vec<InvoiceItem>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg overflow-x-auto">
            <table class="w-full">
                <thead class="bg-gray-900/50">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                            "Item"
                        </th>
                        <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                            "Unit Price"
                        </th>
                        <th class="px-4 py-3 text-center text-xs font-medium text-gray-400 uppercase tracking-wider">
                            "Qty"
                        </th>
                        <th class="px-4 py-3 text-right text-xs font-medium text-gray-400 uppercase tracking-wider">
                            "Total"
                        </th>
                        <th class="px-4 py-3 w-10"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = lines.get();
                        if items.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="px-4 py-10 text-center text-gray-500">
                                        "Cart is empty. Search for a product above to add it."
                                    </td>
                                </tr>
                            }.into_view();
                        }

                        let symbol = state.company.with(|c| c.currency_symbol.clone());
                        items.into_iter().enumerate().map(|(i, line)| {
                            let symbol = symbol.clone();
                            view! {
                                <tr class="border-t border-gray-700">
                                    <td class="px-4 py-3">
                                        <span class="block text-sm text-white">{line.name.clone()}</span>
                                        <span class="block text-xs text-gray-400 font-mono">{line.sku.clone()}</span>
                                    </td>
                                    <td class="px-4 py-3">
                                        <input
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            class="w-28 bg-gray-900 border border-gray-700 rounded-lg px-2 py-1 \
                                                   text-sm text-white focus:outline-none focus:border-blue-500"
                                            prop:value=line.price.to_string()
                                            on:input=move |ev| {
                                                let price = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                                                lines.update(|l| cart::set_price(l, i, price));
                                            }
                                        />
                                    </td>
                                    <td class="px-4 py-3">
                                        <div class="flex items-center justify-center gap-1">
                                            <button
                                                class="w-7 h-7 rounded bg-gray-700 hover:bg-gray-600 text-white"
                                                on:click=move |_| lines.update(|l| {
                                                    let current = l.get(i).map(|x| x.quantity).unwrap_or(1);
                                                    cart::set_quantity(l, i, current.saturating_sub(1));
                                                })
                                            >
                                                "−"
                                            </button>
                                            <input
                                                type="number"
                                                min="1"
                                                class="w-16 bg-gray-900 border border-gray-700 rounded-lg px-2 py-1 \
                                                       text-sm text-white text-center focus:outline-none focus:border-blue-500"
                                                prop:value=line.quantity.to_string()
                                                on:input=move |ev| {
                                                    let quantity = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                                    lines.update(|l| cart::set_quantity(l, i, quantity));
                                                }
                                            />
                                            <button
                                                class="w-7 h-7 rounded bg-gray-700 hover:bg-gray-600 text-white"
                                                on:click=move |_| lines.update(|l| {
                                                    let current = l.get(i).map(|x| x.quantity).unwrap_or(1);
                                                    cart::set_quantity(l, i, current + 1);
                                                })
                                            >
                                                "+"
                                            </button>
                                        </div>
                                    </td>
                                    <td class="px-4 py-3 text-right text-sm text-white">
                                        {symbol} " " {format_money(line.line_total())}
                                    </td>
                                    <td class="px-4 py-3 text-center">
                                        <button
                                            class="text-red-400 hover:text-red-300"
                                            on:click=move |_| lines.update(|l| cart::remove_line(l, i))
                                        >
                                            "✕"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
