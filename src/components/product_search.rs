//! POS Product Search Component
//!
//! Debounced product lookup for the sales screen. Arrow keys move the
//! highlight, Enter adds the highlighted product, Escape closes. A quantity
//! box next to the search sets how many units each add puts in the cart.

use leptos::*;

use crate::api::client;
use crate::api::models::Product;
use crate::state::global::GlobalState;
use crate::util::{format_money, Debouncer};

#[component]
pub fn ProductSearch<F>(on_add: F) -> impl IntoView
where
    F: Fn(Product, u32) + Clone + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (query, set_query) = create_signal(String::new());
    let (results, set_results) = create_signal(Vec::<Product>::new());
    let (open, set_open) = create_signal(false);
    let (highlight, set_highlight) = create_signal(0usize);
    let (qty, set_qty) = create_signal(1u32);

    let debouncer = store_value(Debouncer::new(300));
    let input_ref = create_node_ref::<html::Input>();

    let run_search = move |term: String| {
        let term = term.trim().to_string();
        if term.is_empty() {
            set_results.set(Vec::new());
            set_open.set(false);
            return;
        }
        spawn_local(async move {
            match client::fetch_products(&term, 1).await {
                Ok(page) => {
                    set_results.set(page.products);
                    set_highlight.set(0);
                    set_open.set(true);
                }
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    };

    // Refuses the add when stock cannot cover the requested quantity,
    // otherwise hands the product to the cart and resets for the next scan.
    let add_product = {
        let on_add = on_add.clone();
        move |product: Product| {
            let quantity = qty.get_untracked().max(1);
            if product.stock < quantity as i32 {
                state.show_error(&format!(
                    "Only {} in stock for {}",
                    product.stock.max(0),
                    product.name
                ));
                return;
            }
            on_add(product, quantity);
            set_query.set(String::new());
            set_results.set(Vec::new());
            set_open.set(false);
            set_highlight.set(0);
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    let on_keydown = {
        let add_product = add_product.clone();
        move |ev: ev::KeyboardEvent| {
            let count = results.with_untracked(|r| r.len());
            match ev.key().as_str() {
                "ArrowDown" if count > 0 => {
                    ev.prevent_default();
                    set_highlight.update(|h| *h = (*h + 1) % count);
                }
                "ArrowUp" if count > 0 => {
                    ev.prevent_default();
                    set_highlight.update(|h| *h = if *h == 0 { count - 1 } else { *h - 1 });
                }
                "Enter" => {
                    ev.prevent_default();
                    if open.get_untracked() && count > 0 {
                        let index = highlight.get_untracked().min(count - 1);
                        let picked = results.with_untracked(|r| r[index].clone());
                        add_product(picked);
                    }
                }
                "Escape" => set_open.set(false),
                _ => {}
            }
        }
    };

    let close_soon = move || {
        // Let a click on a result land before the dropdown goes away
        gloo_timers::callback::Timeout::new(150, move || {
            set_open.set(false);
        })
        .forget();
    };

    view! {
        <div class="flex items-start gap-3">
            <div class="relative flex-1">
                <input
                    type="text"
                    node_ref=input_ref
                    class="w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                           placeholder-gray-500 focus:outline-none focus:border-blue-500"
                    placeholder="Search products by name or SKU..."
                    prop:value=query
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_query.set(value.clone());
                        debouncer.update_value(|d| d.run(move || run_search(value)));
                    }
                    on:keydown=on_keydown
                    on:blur=move |_| close_soon()
                />

                <Show when=move || open.get()>
                    <div class="absolute mt-1 w-full max-h-80 overflow-y-auto bg-gray-800 border \
                                border-gray-700 rounded-lg shadow-xl z-40">
                        {let add_product = add_product.clone(); move || {
                            let list = results.get();
                            if list.is_empty() {
                                return view! {
                                    <p class="px-3 py-3 text-sm text-gray-500">"No products found"</p>
                                }.into_view();
                            }

                            let symbol = state.company.with(|c| c.currency_symbol.clone());
                            list.into_iter().enumerate().map(|(i, product)| {
                                let add_product = add_product.clone();
                                let row_product = product.clone();
                                let out_of_stock = product.stock <= 0;
                                let symbol = symbol.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            let base = "w-full flex items-center justify-between px-3 py-2 text-left";
                                            if highlight.get() == i {
                                                format!("{} bg-gray-700", base)
                                            } else {
                                                format!("{} hover:bg-gray-700/60", base)
                                            }
                                        }
                                        on:mouseenter=move |_| set_highlight.set(i)
                                        on:click=move |_| add_product(row_product.clone())
                                    >
                                        <span>
                                            <span class="block text-sm text-white">{product.name.clone()}</span>
                                            <span class="block text-xs text-gray-400 font-mono">{product.sku.clone()}</span>
                                        </span>
                                        <span class="text-right">
                                            <span class="block text-sm text-white">
                                                {symbol} " " {format_money(product.selling_price)}
                                            </span>
                                            <span class=format!(
                                                "block text-xs {}",
                                                if out_of_stock { "text-red-400" } else { "text-gray-400" }
                                            )>
                                                {product.stock} " in stock"
                                            </span>
                                        </span>
                                    </button>
                                }
                            }).collect_view()
                        }}
                    </div>
                </Show>
            </div>

            <div>
                <input
                    type="number"
                    min="1"
                    class="w-20 bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                           text-center focus:outline-none focus:border-blue-500"
                    prop:value=move || qty.get().to_string()
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                        set_qty.set(parsed.max(1));
                    }
                />
                <p class="mt-1 text-xs text-gray-500 text-center">"Qty"</p>
            </div>
        </div>
    }
}
