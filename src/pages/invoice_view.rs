//! Invoice Detail Page
//!
//! Renders a single invoice as a print-ready sale document. Arriving with
//! `?print=1` opens the browser print dialog once the invoice has loaded.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::{use_params_map, use_query_map};

use crate::api::client;
use crate::api::models::{CompanySettings, Invoice, PaymentStatus};
use crate::components::loading::Loading;
use crate::state::global::GlobalState;
use crate::util::{format_date, format_money};

/// Invoice detail page component
#[component]
pub fn InvoiceView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let query = use_query_map();

    let (invoice, set_invoice) = create_signal(None::<Invoice>);
    let (loaded, set_loaded) = create_signal(false);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        if id.is_empty() {
            return;
        }
        let auto_print =
            query.with_untracked(|q| q.get("print").map(|v| v == "1").unwrap_or(false));
        spawn_local(async move {
            match client::fetch_invoice(&id).await {
                Ok(inv) => {
                    set_invoice.set(Some(inv));
                    if auto_print {
                        // Give the sheet a beat to render before the dialog opens
                        Timeout::new(500, || {
                            let _ = window().print();
                        })
                        .forget();
                    }
                }
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <Show when=move || loaded.get() fallback=|| view! { <Loading /> }>
            {move || match invoice.get() {
                Some(inv) => {
                    let company = state.company.get();
                    invoice_sheet(&inv, &company).into_view()
                }
                None => view! {
                    <div class="text-center py-12 text-gray-500">
                        "Invoice not found"
                    </div>
                }
                .into_view(),
            }}
        </Show>
    }
}

fn invoice_sheet(inv: &Invoice, company: &CompanySettings) -> impl IntoView {
    let contact_lines: Vec<String> = [
        company.address.clone(),
        company.phone.clone(),
        company.email.clone(),
    ]
    .into_iter()
    .filter(|l| !l.is_empty())
    .collect();

    let logo_url = company.logo.as_ref().map(|img| img.url.clone());
    let company_name = company.name.clone();
    let thanks_from = company.name.clone();
    let symbol = company.currency_symbol.clone();

    let status_text = match inv.payment_status {
        PaymentStatus::Paid => view! { <span class="font-bold text-green-700">"PAID"</span> },
        PaymentStatus::Pending => view! { <span class="font-bold text-red-600">"PENDING"</span> },
    };

    let rows = inv
        .items
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td class="py-3 px-2 font-medium">{item.name.clone()}</td>
                    <td class="py-3 px-2 text-center">{item.quantity}</td>
                    <td class="py-3 px-2 text-center">{format_money(item.price)}</td>
                    <td class="py-3 px-2 text-right">{format_money(item.line_total())}</td>
                </tr>
            }
        })
        .collect_view();

    let discount_row = (inv.discount_amount > 0.0).then(|| {
        view! {
            <div class="flex justify-between text-sm">
                <span>"Discount"</span>
                <span>{format!("{} -{}", symbol, format_money(inv.discount_amount))}</span>
            </div>
        }
    });

    let tax_row = (inv.tax_amount > 0.0).then(|| {
        view! {
            <div class="flex justify-between text-sm">
                <span>{format!("Tax ({}%)", inv.tax_rate)}</span>
                <span>{format!("{} {}", symbol, format_money(inv.tax_amount))}</span>
            </div>
        }
    });

    view! {
        <div class="max-w-4xl mx-auto">
            // Hidden when printing
            <div class="print-hidden flex items-center justify-between mb-6">
                <a
                    href="/invoices"
                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                >
                    "← Back to Invoices"
                </a>
                <button
                    class="px-6 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium"
                    on:click=move |_| {
                        let _ = window().print();
                    }
                >
                    "🖨 Print Invoice"
                </button>
            </div>

            // The printable sheet itself stays light regardless of app theme
            <div class="invoice-sheet bg-white text-gray-900 p-8 rounded-lg shadow">
                <div class="flex justify-between items-start mb-8">
                    {logo_url.map(|url| view! {
                        <img src=url alt="Logo" class="h-20 w-20 object-contain" />
                    })}
                    <div class="text-right ml-auto">
                        <h3 class="font-bold text-lg bg-gray-200 px-4 py-1 rounded inline-block">
                            "Outlet Details:"
                        </h3>
                        <div class="mt-2 text-sm space-y-1">
                            {contact_lines.into_iter().map(|l| view! { <p>{l}</p> }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="text-center mb-8">
                    <h1 class="text-4xl font-black tracking-tight uppercase">{company_name}</h1>
                </div>

                <div class="flex justify-between mb-8">
                    <div class="w-1/2">
                        <h3 class="bg-gray-200 px-3 py-1 font-bold inline-block mb-2">"Sold to:"</h3>
                        <p class="font-bold text-lg">{inv.customer_name.clone()}</p>
                        <p class="text-sm">{inv.customer_phone.clone()}</p>
                    </div>
                    <div class="w-1/3">
                        <h2 class="bg-gray-200 text-center font-bold py-1 mb-2">"SALE INVOICE"</h2>
                        <div class="grid grid-cols-2 text-sm gap-y-1">
                            <span class="font-bold">"Invoice #"</span>
                            <span class="text-right font-mono">{inv.invoice_number.clone()}</span>
                            <span class="font-bold">"Invoice Date"</span>
                            <span class="text-right">{format_date(&inv.created_at)}</span>
                        </div>
                    </div>
                </div>

                <table class="w-full mb-8">
                    <thead>
                        <tr class="border-y-2 border-black bg-gray-50">
                            <th class="text-left py-2 px-2 uppercase text-sm">"Description"</th>
                            <th class="text-center py-2 px-2 uppercase text-sm">"Qty"</th>
                            <th class="text-center py-2 px-2 uppercase text-sm">"Rate"</th>
                            <th class="text-right py-2 px-2 uppercase text-sm">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">{rows}</tbody>
                </table>

                <div class="flex justify-between items-start border-t-2 border-dashed border-black pt-4">
                    <div class="w-1/2 text-sm">
                        <h4 class="font-bold underline mb-2">"Payment"</h4>
                        <p>"Method: " {inv.payment_method.label()}</p>
                        <p class="mt-1">"Status: " {status_text}</p>
                    </div>

                    <div class="w-1/3 space-y-2">
                        <div class="flex justify-between font-bold">
                            <span>"Subtotal"</span>
                            <span>{format!("{} {}", symbol, format_money(inv.sub_total))}</span>
                        </div>
                        {discount_row}
                        {tax_row}
                        <div class="flex justify-between font-black text-xl border-t border-black pt-2">
                            <span>"Balance Due"</span>
                            <span>{format!("{} {}", symbol, format_money(inv.grand_total))}</span>
                        </div>
                    </div>
                </div>

                <div class="mt-12 grid grid-cols-2 gap-8 items-end">
                    <div class="text-xs border border-gray-300 p-2 rounded">
                        <h4 class="font-bold bg-gray-200 px-2 py-1 mb-2">"Terms & Conditions:"</h4>
                        <ol class="list-decimal ml-4 space-y-1">
                            <li>"Prices do not include bulbs or delivery charges"</li>
                            <li>"Goods cannot be exchanged or returned"</li>
                            <li>"Confirm your order at the time of delivery"</li>
                            <li>"Damage claims are not accepted once delivery is confirmed"</li>
                            <li>"Advance payments are valid for 10 days"</li>
                        </ol>
                    </div>

                    <div class="text-right italic">
                        <p class="text-sm">{format!("On behalf of {},", thanks_from)}</p>
                        <h2 class="text-2xl font-serif font-bold text-green-700">"Thank You"</h2>
                        <p class="text-xs mt-2">"We look forward to serving you again."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
