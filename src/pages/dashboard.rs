//! Dashboard Page
//!
//! Today's sales figures, quick actions, low-stock alerts, and the most
//! recent invoices.

use leptos::*;

use crate::api::client;
use crate::api::models::DashboardStats;
use crate::components::badges::PaymentBadge;
use crate::components::loading::{CardSkeleton, ListSkeleton};
use crate::components::stat_card::StatCard;
use crate::state::global::GlobalState;
use crate::util::{format_date, format_money};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (stats, set_stats) = create_signal(None::<DashboardStats>);

    // Fetch today's figures on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match client::fetch_dashboard_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
        });
    });

    let today = chrono::Local::now().format("%A, %b %d, %Y").to_string();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">{today}</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || stats.get().map(|s| format!("{} invoices today", s.invoices_today)).unwrap_or_default()}
                </div>
            </div>

            // Stat cards
            {move || match stats.get() {
                None => view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <CardSkeleton />
                        <CardSkeleton />
                        <CardSkeleton />
                    </div>
                }.into_view(),
                Some(s) => {
                    let symbol = state.company.with(|c| c.currency_symbol.clone());
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <StatCard
                                title="Total Sales Today"
                                value=format!("{} {}", symbol, format_money(s.total_sales_today))
                                icon="💰"
                            />
                            <StatCard
                                title="Items Sold Today"
                                value=s.items_sold_today.to_string()
                                icon="📦"
                            />
                            <StatCard
                                title="Low Stock Alerts"
                                value=s.low_stock_count.to_string()
                                icon="⚠️"
                                urgent={s.low_stock_count > 0}
                            />
                        </div>
                    }.into_view()
                }
            }}

            // Quick actions
            <section>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <QuickAction href="/sales/new" icon="🧾" label="New Sale" />
                    <QuickAction href="/inventory/add" icon="➕" label="Add Product" />
                    <QuickAction href="/invoices" icon="📄" label="View Invoices" />
                </div>
            </section>

            // Low stock and recent invoices
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section>
                    <h2 class="text-lg font-semibold mb-4">"Low Stock"</h2>
                    {move || match stats.get() {
                        None => view! { <ListSkeleton count=3 /> }.into_view(),
                        Some(s) => low_stock_list(&s).into_view(),
                    }}
                </section>

                <section>
                    <h2 class="text-lg font-semibold mb-4">"Recent Invoices"</h2>
                    {move || match stats.get() {
                        None => view! { <ListSkeleton count=3 /> }.into_view(),
                        Some(s) => {
                            let symbol = state.company.with(|c| c.currency_symbol.clone());
                            recent_invoices(&s, &symbol).into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

fn low_stock_list(stats: &DashboardStats) -> View {
    if stats.low_stock_products.is_empty() {
        return view! {
            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 text-sm text-gray-400">
                "All products are above their low-stock thresholds."
            </div>
        }
        .into_view();
    }

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg divide-y divide-gray-700">
            {stats.low_stock_products.iter().map(|p| {
                let edit_href = format!("/inventory/edit/{}", p.id);
                view! {
                    <div class="flex items-center justify-between px-4 py-3">
                        <div>
                            <span class="block text-sm text-white">{p.name.clone()}</span>
                            <span class="block text-xs text-gray-400 font-mono">{p.sku.clone()}</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-sm text-red-400 font-semibold">
                                {p.stock} " left"
                            </span>
                            <a href=edit_href class="text-sm text-blue-400 hover:text-blue-300">
                                "Restock"
                            </a>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}

fn recent_invoices(stats: &DashboardStats, symbol: &str) -> View {
    if stats.recent_invoices.is_empty() {
        return view! {
            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 text-sm text-gray-400">
                "No invoices yet. Make your first sale!"
            </div>
        }
        .into_view();
    }

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg divide-y divide-gray-700">
            {stats.recent_invoices.iter().map(|inv| {
                let href = format!("/invoices/{}", inv.id);
                let amount = format!("{} {}", symbol, format_money(inv.grand_total));
                view! {
                    <a href=href class="flex items-center justify-between px-4 py-3 hover:bg-gray-750">
                        <div>
                            <span class="block text-sm text-white font-mono">{inv.invoice_number.clone()}</span>
                            <span class="block text-xs text-gray-400">
                                {inv.customer_name.clone()} " | " {format_date(&inv.created_at)}
                            </span>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-sm text-white">{amount}</span>
                            <PaymentBadge status=inv.payment_status />
                        </div>
                    </a>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}

/// Big dashboard shortcut button
#[component]
fn QuickAction(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex items-center justify-center gap-3 bg-gray-800 border border-gray-700 rounded-lg \
                   px-4 py-5 hover:bg-gray-700 transition-colors"
        >
            <span class="text-2xl">{icon}</span>
            <span class="text-white font-medium">{label}</span>
        </a>
    }
}
