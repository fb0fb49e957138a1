//! Edit Product Page
//!
//! Loads the product from the route id and pre-fills the shared form.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api::client;
use crate::api::models::Product;
use crate::components::loading::Loading;
use crate::components::product_form::ProductForm;
use crate::state::global::GlobalState;

#[component]
pub fn EditProduct() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let params = use_params_map();

    let (product, set_product) = create_signal(None::<Product>);
    let (submitting, set_submitting) = create_signal(false);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match client::fetch_product(&id).await {
                Ok(p) => set_product.set(Some(p)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let handle_submit = move |form: web_sys::FormData| {
        let id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::update_product(&id, form).await {
                Ok(updated) => {
                    state.show_success(&format!("Updated {}", updated.name));
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
                <h1 class="text-3xl font-bold">"Edit Product"</h1>
                <p class="text-gray-400 mt-1">
                    {move || product.get().map(|p| p.name).unwrap_or_default()}
                </p>
            </div>

            {move || {
                let handle_submit = handle_submit.clone();
                match product.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(p) => view! {
                        <div class="bg-gray-800 border border-gray-700 rounded-lg p-6">
                            <ProductForm
                                initial=p
                                submit_label="Save Changes"
                                submitting=submitting
                                on_submit=handle_submit
                            />
                        </div>
                    }.into_view(),
                }
            }}
        </div>
    }
}
