//! Global Search Component
//!
//! Navbar search across products and invoices, focused with Ctrl/Cmd+K.

use leptos::*;

use crate::api::client;
use crate::api::models::{Invoice, Product};
use crate::state::global::GlobalState;
use crate::util::{format_money, Debouncer};

#[component]
pub fn GlobalSearch() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (query, set_query) = create_signal(String::new());
    let (open, set_open) = create_signal(false);
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (invoices, set_invoices) = create_signal(Vec::<Invoice>::new());

    let debouncer = store_value(Debouncer::new(300));
    let input_ref = create_node_ref::<html::Input>();

    let run_search = move |term: String| {
        let term = term.trim().to_string();
        if term.is_empty() {
            set_products.set(Vec::new());
            set_invoices.set(Vec::new());
            set_open.set(false);
            return;
        }
        set_open.set(true);

        // Product and invoice lookups run as two concurrent tasks
        spawn_local({
            let term = term.clone();
            async move {
                match client::fetch_products(&term, 1).await {
                    Ok(page) => set_products.set(page.products.into_iter().take(5).collect()),
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            }
        });
        spawn_local(async move {
            match client::fetch_invoices(None, None, &term).await {
                Ok(list) => set_invoices.set(list.into_iter().take(5).collect()),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    };

    // Ctrl/Cmd+K pulls focus into the search box from anywhere
    let shortcut = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "k" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });
    on_cleanup(move || shortcut.remove());

    let close_soon = move || {
        // Let a click on a result land before the dropdown goes away
        gloo_timers::callback::Timeout::new(150, move || {
            set_open.set(false);
        })
        .forget();
    };

    let clear = move || {
        set_query.set(String::new());
        set_products.set(Vec::new());
        set_invoices.set(Vec::new());
        set_open.set(false);
    };

    let no_matches = move || products.with(|p| p.is_empty()) && invoices.with(|i| i.is_empty());
    let currency = move || state.company.with(|c| c.currency_symbol.clone());

    view! {
        <div class="relative w-72">
            <input
                type="text"
                node_ref=input_ref
                class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-1.5 text-sm text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500"
                placeholder="Search products, invoices... (Ctrl+K)"
                prop:value=query
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.set(value.clone());
                    debouncer.update_value(|d| d.run(move || run_search(value)));
                }
                on:focus=move |_| {
                    if !query.get_untracked().trim().is_empty() {
                        set_open.set(true);
                    }
                }
                on:blur=move |_| close_soon()
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        set_open.set(false);
                    }
                }
            />

            <Show when=move || open.get()>
                <div class="absolute mt-1 w-full max-h-96 overflow-y-auto bg-gray-800 border border-gray-700 \
                            rounded-lg shadow-xl z-50">
                    <Show when=move || !no_matches() fallback=|| view! {
                        <p class="px-3 py-3 text-sm text-gray-500">"No matches"</p>
                    }>
                        <Show when=move || products.with(|p| !p.is_empty())>
                            <p class="px-3 pt-2 pb-1 text-xs uppercase tracking-wide text-gray-500">"Products"</p>
                            {move || products.get().into_iter().map(|p| {
                                let symbol = currency();
                                view! {
                                    <a
                                        href=format!("/inventory/edit/{}", p.id)
                                        class="block px-3 py-2 hover:bg-gray-700"
                                        on:click=move |_| clear()
                                    >
                                        <span class="text-sm text-white">{p.name.clone()}</span>
                                        <span class="block text-xs text-gray-400">
                                            {p.sku.clone()} " | " {symbol} " " {format_money(p.selling_price)}
                                        </span>
                                    </a>
                                }
                            }).collect_view()}
                        </Show>

                        <Show when=move || invoices.with(|i| !i.is_empty())>
                            <p class="px-3 pt-2 pb-1 text-xs uppercase tracking-wide text-gray-500">"Invoices"</p>
                            {move || invoices.get().into_iter().map(|inv| {
                                let symbol = currency();
                                view! {
                                    <a
                                        href=format!("/invoices/{}", inv.id)
                                        class="block px-3 py-2 hover:bg-gray-700"
                                        on:click=move |_| clear()
                                    >
                                        <span class="text-sm text-white">{inv.invoice_number.clone()}</span>
                                        <span class="block text-xs text-gray-400">
                                            {inv.customer_name.clone()} " | " {symbol} " " {format_money(inv.grand_total)}
                                        </span>
                                    </a>
                                }
                            }).collect_view()}
                        </Show>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
