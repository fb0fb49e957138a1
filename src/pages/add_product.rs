//! Add Product Page

use leptos::*;
use leptos_router::use_navigate;

use crate::api::client;
use crate::components::product_form::ProductForm;
use crate::state::global::GlobalState;

#[component]
pub fn AddProduct() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (submitting, set_submitting) = create_signal(false);

    let handle_submit = move |form: web_sys::FormData| {
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::create_product(form).await {
                Ok(product) => {
                    state.show_success(&format!("Added {}", product.name));
                    navigate("/inventory", Default::default());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Add Product"</h1>
                <p class="text-gray-400 mt-1">"New inventory item"</p>
            </div>

            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6">
                <ProductForm
                    submit_label="Add Product"
                    submitting=submitting
                    on_submit=handle_submit
                />
            </div>
        </div>
    }
}
