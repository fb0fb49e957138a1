//! Invoice History Page
//!
//! Date-window and customer filters over past sales, with a summary row for
//! the filtered set.

use leptos::*;

use crate::api::client;
use crate::api::models::Invoice;
use crate::components::badges::PaymentBadge;
use crate::components::loading::TableSkeleton;
use crate::state::global::GlobalState;
use crate::util::{date_input_iso, end_of_day_iso, format_date, format_money, start_of_day_iso, Debouncer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFilter {
    All,
    Today,
    Last7,
    Last30,
    Last90,
    Custom,
}

impl DateFilter {
    const ALL: [DateFilter; 6] = [
        DateFilter::All,
        DateFilter::Today,
        DateFilter::Last7,
        DateFilter::Last30,
        DateFilter::Last90,
        DateFilter::Custom,
    ];

    fn label(self) -> &'static str {
        match self {
            DateFilter::All => "All Time",
            DateFilter::Today => "Today",
            DateFilter::Last7 => "Last 7 Days",
            DateFilter::Last30 => "Last 30 Days",
            DateFilter::Last90 => "Last 90 Days",
            DateFilter::Custom => "Custom Range",
        }
    }

    fn from_label(label: &str) -> DateFilter {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == label)
            .unwrap_or(DateFilter::All)
    }
}

/// RFC3339 window for a filter choice; `None` means unbounded.
fn filter_bounds(
    filter: DateFilter,
    custom_from: &str,
    custom_to: &str,
) -> (Option<String>, Option<String>) {
    match filter {
        DateFilter::All => (None, None),
        DateFilter::Today => (Some(start_of_day_iso(0)), Some(end_of_day_iso())),
        DateFilter::Last7 => (Some(start_of_day_iso(7)), Some(end_of_day_iso())),
        DateFilter::Last30 => (Some(start_of_day_iso(30)), Some(end_of_day_iso())),
        DateFilter::Last90 => (Some(start_of_day_iso(90)), Some(end_of_day_iso())),
        DateFilter::Custom => (
            date_input_iso(custom_from, false),
            date_input_iso(custom_to, true),
        ),
    }
}

/// Invoice history page component
#[component]
pub fn Invoices() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (invoices, set_invoices) = create_signal(Vec::<Invoice>::new());
    let (filter, set_filter) = create_signal(DateFilter::All);
    let (custom_from, set_custom_from) = create_signal(String::new());
    let (custom_to, set_custom_to) = create_signal(String::new());
    let (customer, set_customer) = create_signal(String::new());
    let (loaded, set_loaded) = create_signal(false);

    let debouncer = store_value(Debouncer::new(300));

    let load = move || {
        let (start, end) = filter_bounds(
            filter.get_untracked(),
            &custom_from.get_untracked(),
            &custom_to.get_untracked(),
        );
        let customer_v = customer.get_untracked().trim().to_string();
        spawn_local(async move {
            state.loading.set(true);
            match client::fetch_invoices(start.as_deref(), end.as_deref(), &customer_v).await {
                Ok(list) => set_invoices.set(list),
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
            set_loaded.set(true);
        });
    };

    // Initial load
    create_effect(move |_| load());

    let summary = create_memo(move |_| {
        invoices.with(|list| {
            let total: f64 = list.iter().map(|i| i.grand_total).sum();
            (list.len(), total)
        })
    });

    let symbol = move || state.company.with(|c| c.currency_symbol.clone());

    let input_class = "bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Invoices"</h1>
                <p class="text-gray-400 mt-1">"Sales history"</p>
            </div>

            // Filters
            <div class="flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Customer"</label>
                    <input
                        type="text"
                        class=format!("{} w-64", input_class)
                        placeholder="Search by customer name..."
                        prop:value=customer
                        on:input=move |ev| {
                            set_customer.set(event_target_value(&ev));
                            debouncer.update_value(|d| d.run(move || load()));
                        }
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Period"</label>
                    <select
                        class=input_class
                        prop:value=move || filter.get().label()
                        on:change=move |ev| {
                            let choice = DateFilter::from_label(&event_target_value(&ev));
                            set_filter.set(choice);
                            load();
                        }
                    >
                        {DateFilter::ALL.iter().map(|f| view! {
                            <option value=f.label()>{f.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <Show when=move || filter.get() == DateFilter::Custom>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"From"</label>
                        <input
                            type="date"
                            class=input_class
                            prop:value=custom_from
                            on:change=move |ev| {
                                set_custom_from.set(event_target_value(&ev));
                                load();
                            }
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"To"</label>
                        <input
                            type="date"
                            class=input_class
                            prop:value=custom_to
                            on:change=move |ev| {
                                set_custom_to.set(event_target_value(&ev));
                                load();
                            }
                        />
                    </div>
                </Show>
            </div>

            // Summary of the filtered set
            <div class="flex items-center gap-6 text-sm text-gray-400">
                <span>
                    {move || format!("{} invoices", summary.get().0)}
                </span>
                <span>
                    "Total: "
                    <span class="text-white font-semibold">
                        {move || format!("{} {}", symbol(), format_money(summary.get().1))}
                    </span>
                </span>
            </div>

            // Table
            <Show when=move || loaded.get() fallback=|| view! { <TableSkeleton rows=6 /> }>
                <div class="bg-gray-800 border border-gray-700 rounded-lg overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-900/50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Invoice #"
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Date"
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Customer"
                                </th>
                                <th class="px-4 py-3 text-center text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Items"
                                </th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Total"
                                </th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    "Status"
                                </th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = invoices.get();
                                if list.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="7" class="px-4 py-8 text-center text-gray-500">
                                                "No invoices match the current filters"
                                            </td>
                                        </tr>
                                    }.into_view();
                                }

                                let symbol = symbol();
                                list.into_iter().map(|inv| {
                                    let href = format!("/invoices/{}", inv.id);
                                    let symbol = symbol.clone();
                                    view! {
                                        <tr class="border-t border-gray-700 hover:bg-gray-750">
                                            <td class="px-4 py-3 text-sm text-white font-mono">
                                                {inv.invoice_number.clone()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-gray-300">
                                                {format_date(&inv.created_at)}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-gray-300">
                                                {inv.customer_name.clone()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-gray-300 text-center">
                                                {inv.items.len()}
                                            </td>
                                            <td class="px-4 py-3 text-sm text-white text-right">
                                                {symbol} " " {format_money(inv.grand_total)}
                                            </td>
                                            <td class="px-4 py-3">
                                                <PaymentBadge status=inv.payment_status />
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                <a href=href class="text-sm text-blue-400 hover:text-blue-300">
                                                    "View"
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
