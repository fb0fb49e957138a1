//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::client;
use crate::components::{Nav, Toast};
use crate::pages::{
    AddProduct, Dashboard, EditProduct, Inventory, InvoiceView, Invoices, Login, Pos, Settings,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Load the company profile as soon as a session exists
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    create_effect(move |_| {
        if !state.is_logged_in() {
            return;
        }
        spawn_local(async move {
            match client::fetch_settings().await {
                Ok(settings) => state.company.set(settings),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Routes>
                    <Route path="/login" view=Login />
                    <Route path="/" view=Shell>
                        <Route path="" view=Dashboard />
                        <Route path="inventory" view=Inventory />
                        <Route path="inventory/add" view=AddProduct />
                        <Route path="inventory/edit/:id" view=EditProduct />
                        <Route path="sales/new" view=Pos />
                        <Route path="invoices" view=Invoices />
                        <Route path="invoices/:id" view=InvoiceView />
                        <Route path="settings" view=Settings />
                        <Route path="*any" view=NotFound />
                    </Route>
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Signed-in chrome around every page except the login screen
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Show
            when=move || state.is_logged_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Outlet />
            </main>

            <Footer />
        </Show>
    }
}

/// Footer with the company name and a global busy indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        let name = state.company.with(|c| c.name.clone());
                        if name.is_empty() {
                            "LightCraft".to_string()
                        } else {
                            name
                        }
                    }}
                </div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-blue-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
