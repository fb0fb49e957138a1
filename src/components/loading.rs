//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader matching the stat card layout
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg p-5 animate-pulse">
            <div class="flex items-center justify-between">
                <div class="space-y-2">
                    <div class="h-4 bg-gray-700 rounded w-24" />
                    <div class="h-7 bg-gray-700 rounded w-32" />
                </div>
                <div class="h-9 w-9 bg-gray-700 rounded" />
            </div>
        </div>
    }
}

/// Skeleton loader for table rows
#[component]
pub fn TableSkeleton(
    #[prop(default = 5)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 space-y-3 animate-pulse">
            <div class="h-6 bg-gray-700 rounded w-1/4" />
            {(0..rows).map(|_| view! {
                <div class="bg-gray-700 rounded h-10" />
            }).collect_view()}
        </div>
    }
}

/// Skeleton loader matching the dashboard list rows
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg divide-y divide-gray-700 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="flex items-center justify-between px-4 py-3">
                    <div class="space-y-2">
                        <div class="h-4 bg-gray-700 rounded w-32" />
                        <div class="h-3 bg-gray-700 rounded w-20" />
                    </div>
                    <div class="h-4 bg-gray-700 rounded w-16" />
                </div>
            }).collect_view()}
        </div>
    }
}
