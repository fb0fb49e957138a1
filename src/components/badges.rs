//! Status Badges
//!
//! Colored pills for stock levels and invoice payment state.

use leptos::*;

use crate::api::models::{PaymentStatus, StockStatus};

/// Stock-level pill
#[component]
pub fn StockBadge(status: StockStatus) -> impl IntoView {
    let (label, class) = match status {
        StockStatus::Critical => ("Critical", "bg-red-900/60 text-red-300 border-red-700"),
        StockStatus::Low => ("Low Stock", "bg-yellow-900/60 text-yellow-300 border-yellow-700"),
        StockStatus::Sufficient => ("In Stock", "bg-green-900/60 text-green-300 border-green-700"),
    };

    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium border {}",
            class
        )>
            {label}
        </span>
    }
}

/// Payment-state pill for invoice rows
#[component]
pub fn PaymentBadge(status: PaymentStatus) -> impl IntoView {
    let class = match status {
        PaymentStatus::Paid => "bg-green-900/60 text-green-300 border-green-700",
        PaymentStatus::Pending => "bg-yellow-900/60 text-yellow-300 border-yellow-700",
    };

    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium border {}",
            class
        )>
            {status.label()}
        </span>
    }
}
