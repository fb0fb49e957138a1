//! Inventory Page
//!
//! Paginated product list with server-side keyword search and client-side
//! sorting.

use leptos::*;

use crate::api::client;
use crate::api::models::Product;
use crate::components::loading::TableSkeleton;
use crate::components::product_table::ProductTable;
use crate::state::global::GlobalState;
use crate::util::Debouncer;

/// Inventory page component
#[component]
pub fn Inventory() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (page, set_page) = create_signal(1u32);
    let (pages, set_pages) = create_signal(1u32);
    let (keyword, set_keyword) = create_signal(String::new());
    let (loaded, set_loaded) = create_signal(false);

    let debouncer = store_value(Debouncer::new(300));

    let load = move |term: String, page_no: u32| {
        spawn_local(async move {
            state.loading.set(true);
            match client::fetch_products(&term, page_no).await {
                Ok(result) => {
                    set_products.set(result.products);
                    set_page.set(result.page);
                    set_pages.set(result.pages.max(1));
                }
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
            set_loaded.set(true);
        });
    };

    // Initial load
    create_effect(move |_| {
        load(String::new(), 1);
    });

    // Typing filters server-side after the debounce window, back on page 1
    let on_search = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        set_keyword.set(value.clone());
        debouncer.update_value(|d| d.run(move || load(value, 1)));
    };

    let go_to = move |target: u32| {
        load(keyword.get_untracked(), target);
    };

    let handle_delete = move |product: Product| {
        spawn_local(async move {
            match client::delete_product(&product.id).await {
                Ok(()) => {
                    state.show_success(&format!("Deleted {}", product.name));
                    load(keyword.get_untracked(), page.get_untracked());
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Inventory"</h1>
                    <p class="text-gray-400 mt-1">"Products, prices, and stock levels"</p>
                </div>
                <a
                    href="/inventory/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium"
                >
                    "+ Add Product"
                </a>
            </div>

            // Search
            <input
                type="text"
                class="w-full max-w-md bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500"
                placeholder="Search by name or SKU..."
                prop:value=keyword
                on:input=on_search
            />

            // Table
            <Show when=move || loaded.get() fallback=|| view! { <TableSkeleton rows=6 /> }>
                <ProductTable products=products on_delete=handle_delete />
            </Show>

            // Pagination
            <div class="flex items-center justify-between">
                <span class="text-sm text-gray-400">
                    {move || format!("Page {} of {}", page.get(), pages.get())}
                </span>
                <div class="space-x-2">
                    <button
                        class="px-3 py-1.5 rounded-lg bg-gray-800 border border-gray-700 text-sm text-gray-300 \
                               hover:text-white disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || page.get() <= 1
                        on:click=move |_| go_to(page.get_untracked() - 1)
                    >
                        "Previous"
                    </button>
                    <button
                        class="px-3 py-1.5 rounded-lg bg-gray-800 border border-gray-700 text-sm text-gray-300 \
                               hover:text-white disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || page.get() >= pages.get()
                        on:click=move |_| go_to(page.get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}
