//! POS Summary Component
//!
//! Customer details, payment options, discount and tax entry, and the money
//! figures for the sale being built. Save buttons stay disabled while the
//! cart is empty, a save is in flight, or the discount exceeds the subtotal.

use leptos::*;

use crate::api::models::{InvoiceItem, PaymentMethod, PaymentStatus};
use crate::components::loading::InlineLoading;
use crate::state::cart;
use crate::state::global::GlobalState;
use crate::util::format_money;

#[component]
pub fn InvoiceSummary<F>(
    lines: RwSignal<Vec<InvoiceItem>>,
    customer_name: RwSignal<String>,
    customer_phone: RwSignal<String>,
    payment_method: RwSignal<PaymentMethod>,
    payment_status: RwSignal<PaymentStatus>,
    tax_rate: RwSignal<f64>,
    discount: RwSignal<f64>,
    #[prop(into)]
    processing: Signal<bool>,
    /// Called with `true` when the sale should also open the print view
    on_save: F,
) -> impl IntoView
where
    F: Fn(bool) + Clone + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let totals = create_memo(move |_| {
        lines.with(|l| cart::totals(l, discount.get(), tax_rate.get()))
    });
    let savable = create_memo(move |_| {
        lines.with(|l| cart::can_save(l, discount.get(), processing.get()))
    });
    let discount_stale = create_memo(move |_| discount.get() > totals.get().sub_total);

    let symbol = move || state.company.with(|c| c.currency_symbol.clone());

    let input_class = "w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    let save = {
        let on_save = on_save.clone();
        move |_| on_save(false)
    };
    let save_and_print = move |_| on_save(true);

    let status_button = move |status: PaymentStatus, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if payment_status.get() == status {
                        "flex-1 px-3 py-1.5 rounded-lg text-sm bg-blue-600 text-white"
                    } else {
                        "flex-1 px-3 py-1.5 rounded-lg text-sm bg-gray-900 text-gray-400 \
                         border border-gray-700 hover:text-white"
                    }
                }
                on:click=move |_| payment_status.set(status)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg p-5 space-y-4">
            <h2 class="text-lg font-semibold text-white">"Sale Details"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Customer Name"</label>
                <input
                    type="text"
                    class=input_class
                    placeholder="Walk-in Customer"
                    prop:value=customer_name
                    on:input=move |ev| customer_name.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Phone"</label>
                <input
                    type="text"
                    class=input_class
                    placeholder="Optional"
                    prop:value=customer_phone
                    on:input=move |ev| customer_phone.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Payment Method"</label>
                <select
                    class=input_class
                    prop:value=move || payment_method.get().label()
                    on:change=move |ev| {
                        payment_method.set(PaymentMethod::from_label(&event_target_value(&ev)));
                    }
                >
                    {PaymentMethod::ALL.iter().map(|m| view! {
                        <option value=m.label()>{m.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Payment Status"</label>
                <div class="flex gap-2">
                    {status_button(PaymentStatus::Paid, "Paid")}
                    {status_button(PaymentStatus::Pending, "Pending")}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Tax Rate (%)"</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="0.1"
                        class=input_class
                        prop:value=move || tax_rate.get().to_string()
                        on:input=move |ev| {
                            let rate = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            tax_rate.set(cart::clamp_tax_rate(rate));
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Discount"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        class=input_class
                        prop:value=move || discount.get().to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            let ceiling = lines.with_untracked(|l| cart::subtotal(l));
                            discount.set(cart::clamp_discount(value, ceiling));
                        }
                    />
                </div>
            </div>

            <div class="border-t border-gray-700 pt-4 space-y-2">
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">"Subtotal"</span>
                    <span class="text-white">{move || format!("{} {}", symbol(), format_money(totals.get().sub_total))}</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">"Tax"</span>
                    <span class="text-white">{move || format!("{} {}", symbol(), format_money(totals.get().tax_amount))}</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">"Discount"</span>
                    <span class="text-white">{move || format!("- {} {}", symbol(), format_money(discount.get()))}</span>
                </div>
                <div class="flex justify-between text-base font-semibold border-t border-gray-700 pt-2">
                    <span class="text-white">"Grand Total"</span>
                    <span class="text-white">{move || format!("{} {}", symbol(), format_money(totals.get().grand_total))}</span>
                </div>
            </div>

            <Show when=move || discount_stale.get()>
                <p class="text-xs text-yellow-400 bg-yellow-900/30 border border-yellow-800 rounded-lg px-3 py-2">
                    "Discount exceeds the current subtotal. Reduce it before saving."
                </p>
            </Show>

            <div class="space-y-2">
                <button
                    class="w-full px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || !savable.get()
                    on:click=save
                >
                    <Show when=move || processing.get() fallback=|| "Save Invoice">
                        <InlineLoading /> " Saving..."
                    </Show>
                </button>
                <button
                    class="w-full px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-white font-medium \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || !savable.get()
                    on:click=save_and_print
                >
                    "Save & Print"
                </button>
            </div>
        </div>
    }
}
