//! Login Page
//!
//! Email/password sign-in. Stores the bearer token and session user on
//! success; the app shell reacts and loads company branding.

use leptos::*;
use leptos_router::{use_navigate, Redirect};

use crate::api::client;
use crate::components::loading::InlineLoading;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email_v = email.get_untracked().trim().to_string();
        let password_v = password.get_untracked();
        if email_v.is_empty() || password_v.is_empty() {
            state.show_error("Email and password are required");
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::login(&email_v, &password_v).await {
                Ok(response) => {
                    let (user, token) = response.into_session();
                    state.sign_in(user, &token);
                    navigate("/", Default::default());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let input_class = "w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    view! {
        <Show
            when=move || !state.is_logged_in()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="min-h-screen flex items-center justify-center px-4">
                <div class="w-full max-w-sm">
                    <div class="text-center mb-8">
                        <span class="text-5xl">"💡"</span>
                        <h1 class="mt-3 text-2xl font-bold text-white">"LightCraft"</h1>
                        <p class="text-sm text-gray-400">"Sign in to manage your shop"</p>
                    </div>

                    <form
                        class="bg-gray-800 border border-gray-700 rounded-lg p-6 space-y-4"
                        on:submit=handle_submit.clone()
                    >
                        <div>
                            <label class="block text-sm text-gray-400 mb-1">"Email"</label>
                            <input
                                type="email"
                                class=input_class
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-1">"Password"</label>
                            <input
                                type="password"
                                class=input_class
                                placeholder="••••••••"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white \
                                   font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=submitting
                        >
                            <Show when=move || submitting.get() fallback=|| "Sign In">
                                <InlineLoading /> " Signing in..."
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
