//! Stat Card Component
//!
//! Dashboard summary figures.

use leptos::*;

/// One dashboard figure with an icon and label
#[component]
pub fn StatCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    value: String,
    icon: &'static str,
    /// Red accent for figures that need attention (low stock alerts)
    #[prop(default = false)]
    urgent: bool,
) -> impl IntoView {
    let border = if urgent { "border-red-700" } else { "border-gray-700" };
    let value_color = if urgent { "text-red-400" } else { "text-white" };

    view! {
        <div class=format!("bg-gray-800 border {} rounded-lg p-5", border)>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-400">{title}</p>
                    <p class=format!("mt-1 text-2xl font-bold {}", value_color)>{value}</p>
                </div>
                <span class="text-3xl">{icon}</span>
            </div>
        </div>
    }
}
