//! Navigation Component
//!
//! Header bar with brand, links, global search, and the session controls.

use leptos::*;
use leptos_router::*;

use crate::components::global_search::GlobalSearch;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let user_name = move || {
        state
            .user
            .with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };
    let user_role = move || if state.is_admin() { "Administrator" } else { "Staff" };

    let logout = move |_| {
        state.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700 print-hidden">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16 gap-4">
                    // Brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"💡"</span>
                        <span class="text-xl font-bold text-white">"LightCraft"</span>
                    </A>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/inventory" label="Inventory" />
                        <NavLink href="/sales/new" label="New Sale" />
                        <NavLink href="/invoices" label="Invoices" />
                        <NavLink href="/settings" label="Settings" />
                    </div>

                    <div class="flex items-center gap-4">
                        <GlobalSearch />

                        <div class="text-right hidden lg:block">
                            <p class="text-sm text-white leading-tight">{user_name}</p>
                            <p class="text-xs text-gray-400 leading-tight">{user_role}</p>
                        </div>

                        <button
                            class="px-3 py-1.5 text-sm rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 \
                                   transition-colors"
                            on:click=logout
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
