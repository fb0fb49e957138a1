//! Point of Sale Page
//!
//! Builds a sale from product search into an editable cart, then saves it as
//! an invoice. "Save & Print" additionally jumps to the printable detail view.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::client;
use crate::api::models::{InvoiceItem, NewInvoice, PaymentMethod, PaymentStatus, Product};
use crate::components::cart_table::CartTable;
use crate::components::invoice_summary::InvoiceSummary;
use crate::components::product_search::ProductSearch;
use crate::state::cart;
use crate::state::global::GlobalState;
use crate::util::new_invoice_number;

/// Point of sale page component
#[component]
pub fn Pos() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let lines = create_rw_signal(Vec::<InvoiceItem>::new());
    let customer_name = create_rw_signal(String::new());
    let customer_phone = create_rw_signal(String::new());
    let payment_method = create_rw_signal(PaymentMethod::Cash);
    let payment_status = create_rw_signal(PaymentStatus::Paid);
    let tax_rate = create_rw_signal(0.0f64);
    let discount = create_rw_signal(0.0f64);
    let (processing, set_processing) = create_signal(false);

    // The sale starts from the company's configured tax rate
    create_effect(move |_| {
        tax_rate.set(state.company.with(|c| c.tax_rate));
    });

    let handle_add = move |product: Product, quantity: u32| {
        lines.update(|l| cart::add_product(l, &product, quantity));
    };

    let handle_save = move |print: bool| {
        let items = lines.get_untracked();
        let discount_v = discount.get_untracked();
        if !cart::can_save(&items, discount_v, processing.get_untracked()) {
            return;
        }

        let rate = tax_rate.get_untracked();
        let totals = cart::totals(&items, discount_v, rate);
        let name_v = customer_name.get_untracked().trim().to_string();
        let invoice = NewInvoice {
            invoice_number: new_invoice_number(),
            customer_name: if name_v.is_empty() {
                "Walk-in Customer".to_string()
            } else {
                name_v
            },
            customer_phone: customer_phone.get_untracked().trim().to_string(),
            items,
            sub_total: totals.sub_total,
            discount_amount: discount_v,
            tax_rate: rate,
            tax_amount: totals.tax_amount,
            grand_total: totals.grand_total,
            payment_method: payment_method.get_untracked(),
            payment_status: payment_status.get_untracked(),
        };

        set_processing.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::create_invoice(&invoice).await {
                Ok(saved) => {
                    state.show_success(&format!("Invoice {} saved", saved.invoice_number));
                    lines.set(Vec::new());
                    customer_name.set(String::new());
                    customer_phone.set(String::new());
                    discount.set(0.0);
                    payment_status.set(PaymentStatus::Paid);
                    if print {
                        navigate(&format!("/invoices/{}?print=1", saved.id), Default::default());
                    }
                }
                Err(e) => state.show_error(&e),
            }
            set_processing.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"New Sale"</h1>
                <p class="text-gray-400 mt-1">"Scan or search products to build the invoice"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 items-start">
                <div class="lg:col-span-2 space-y-4">
                    <ProductSearch on_add=handle_add />
                    <CartTable lines=lines />
                </div>

                <InvoiceSummary
                    lines=lines
                    customer_name=customer_name
                    customer_phone=customer_phone
                    payment_method=payment_method
                    payment_status=payment_status
                    tax_rate=tax_rate
                    discount=discount
                    processing=processing
                    on_save=handle_save
                />
            </div>
        </div>
    }
}
