//! Settings Page
//!
//! Company profile (printed on invoices) plus user management. The user tab
//! is admin-only; staff accounts see it disabled.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::api::client;
use crate::api::models::{Role, User};
use crate::components::loading::{InlineLoading, TableSkeleton};
use crate::state::cart;
use crate::state::global::GlobalState;
use crate::util::format_date;

const MAX_LOGO_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Company,
    Users,
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (tab, set_tab) = create_signal(Tab::Company);
    let admin = state.is_admin();

    let tab_button = move |target: Tab, label: &'static str, enabled: bool| {
        let class = move || {
            if tab.get() == target {
                "flex-1 px-4 py-2 rounded-lg bg-blue-600 text-white font-medium"
            } else if enabled {
                "flex-1 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
            } else {
                "flex-1 px-4 py-2 rounded-lg text-gray-600 cursor-not-allowed"
            }
        };
        view! {
            <button class=class disabled=!enabled on:click=move |_| set_tab.set(target)>
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Company profile and application access"</p>
            </div>

            <div class="flex gap-2 bg-gray-800 border border-gray-700 rounded-lg p-1">
                {tab_button(Tab::Company, "Company Info", true)}
                {tab_button(Tab::Users, "User Management", admin)}
            </div>

            <Show when=move || tab.get() == Tab::Company>
                <CompanyTab />
            </Show>
            <Show when=move || tab.get() == Tab::Users>
                <UsersTab />
            </Show>
        </div>
    }
}

#[component]
fn CompanyTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (address, set_address) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (tax_rate, set_tax_rate) = create_signal(String::new());
    let (currency, set_currency) = create_signal(String::new());
    let (logo_file, set_logo_file) = create_signal(None::<web_sys::File>);
    let (logo_preview, set_logo_preview) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);
    let (api_url, set_api_url) = create_signal(client::get_api_base());

    // Start the form from the backend copy rather than the cached one
    create_effect(move |_| {
        spawn_local(async move {
            match client::fetch_settings().await {
                Ok(settings) => {
                    set_name.set(settings.name.clone());
                    set_address.set(settings.address.clone());
                    set_phone.set(settings.phone.clone());
                    set_email.set(settings.email.clone());
                    set_tax_rate.set(settings.tax_rate.to_string());
                    set_currency.set(settings.currency_symbol.clone());
                    set_logo_preview.set(settings.logo.as_ref().map(|l| l.url.clone()));
                    state.company.set(settings);
                }
                Err(e) => state.show_error(&e),
            }
        });
    });

    let on_logo_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|list| list.get(0));
        let Some(picked) = selected else {
            return;
        };
        if picked.size() > MAX_LOGO_BYTES {
            state.show_error("Logo must be 2 MB or smaller");
            input.set_value("");
            return;
        }

        let reader = web_sys::FileReader::new().unwrap();
        let reader_for_load = reader.clone();
        let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = reader_for_load.result() {
                if let Some(url) = result.as_string() {
                    set_logo_preview.set(Some(url));
                }
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(&picked);

        set_logo_file.set(Some(picked));
    };

    let handle_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = FormData::new().unwrap();
        let _ = form.append_with_str("name", &name.get_untracked());
        let _ = form.append_with_str("address", &address.get_untracked());
        let _ = form.append_with_str("phone", &phone.get_untracked());
        let _ = form.append_with_str("email", &email.get_untracked());
        let rate = cart::clamp_tax_rate(tax_rate.get_untracked().parse().unwrap_or(0.0));
        let _ = form.append_with_str("taxRate", &rate.to_string());
        let _ = form.append_with_str("currencySymbol", &currency.get_untracked());
        if let Some(picked) = logo_file.get_untracked() {
            let _ = form.append_with_blob_and_filename("logo", &picked, &picked.name());
        }

        set_saving.set(true);
        spawn_local(async move {
            match client::update_settings(form).await {
                Ok(updated) => {
                    state.company.set(updated);
                    state.show_success("Company settings saved");
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    let save_api_url = move |_| {
        client::set_api_base(&api_url.get_untracked());
        set_api_url.set(client::get_api_base());
        state.show_success("API server updated");
    };

    let input_class = "w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    view! {
        <div class="space-y-6">
            <form
                class="bg-gray-800 border border-gray-700 rounded-lg p-6 space-y-4"
                on:submit=handle_save
            >
                <div>
                    <h2 class="text-lg font-semibold text-white">"Company Information"</h2>
                    <p class="text-sm text-gray-400">
                        "Shown on every printed invoice"
                    </p>
                </div>

                <div class="flex items-center gap-4">
                    <div class="w-24 h-24 rounded-lg border-2 border-dashed border-gray-600 \
                                flex items-center justify-center overflow-hidden bg-gray-900">
                        {move || match logo_preview.get() {
                            Some(url) => view! {
                                <img src=url alt="Company logo" class="w-full h-full object-contain" />
                            }
                            .into_view(),
                            None => view! { <span class="text-3xl">"🏢"</span> }.into_view(),
                        }}
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Company Logo"</label>
                        <input
                            type="file"
                            accept="image/*"
                            class="text-sm text-gray-400 file:mr-3 file:px-3 file:py-1.5 file:rounded-lg \
                                   file:border-0 file:bg-gray-700 file:text-white file:cursor-pointer"
                            on:change=on_logo_change
                        />
                        <p class="text-xs text-gray-500 mt-1">"PNG or JPG up to 2 MB"</p>
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Company Name"</label>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Enter company name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Address"</label>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Enter company address"
                        prop:value=address
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Phone Number"</label>
                        <input
                            type="text"
                            class=input_class
                            placeholder="Enter phone number"
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Email Address"</label>
                        <input
                            type="email"
                            class=input_class
                            placeholder="Enter email address"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Default Tax Rate (%)"</label>
                        <input
                            type="number"
                            min="0"
                            max="100"
                            step="0.1"
                            class=input_class
                            prop:value=tax_rate
                            on:input=move |ev| set_tax_rate.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Currency Symbol"</label>
                        <input
                            type="text"
                            class=input_class
                            placeholder="Rs."
                            prop:value=currency
                            on:input=move |ev| set_currency.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <button
                    type="submit"
                    class="px-6 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium \
                           disabled:opacity-50"
                    disabled=saving
                >
                    <Show when=move || saving.get() fallback=|| "Save Changes">
                        <InlineLoading />
                        " Saving..."
                    </Show>
                </button>
            </form>

            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 space-y-3">
                <div>
                    <h2 class="text-lg font-semibold text-white">"API Server"</h2>
                    <p class="text-sm text-gray-400">
                        "Where this app sends its requests. Stored in this browser only."
                    </p>
                </div>
                <div class="flex gap-3">
                    <input
                        type="text"
                        class=input_class
                        placeholder="http://localhost:5000/api"
                        prop:value=api_url
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    />
                    <button
                        class="px-6 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-white font-medium"
                        on:click=save_api_url
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (users, set_users) = create_signal(Vec::<User>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (show_add, set_show_add) = create_signal(false);
    let (new_name, set_new_name) = create_signal(String::new());
    let (new_email, set_new_email) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (new_role, set_new_role) = create_signal(Role::User);
    let (creating, set_creating) = create_signal(false);
    let (confirm_delete, set_confirm_delete) = create_signal(None::<User>);

    let load = move || {
        spawn_local(async move {
            match client::fetch_users().await {
                Ok(list) => set_users.set(list),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    };

    create_effect(move |_| load());

    let handle_create = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name_v = new_name.get_untracked().trim().to_string();
        let email_v = new_email.get_untracked().trim().to_string();
        let password_v = new_password.get_untracked();
        if name_v.is_empty() || email_v.is_empty() || password_v.is_empty() {
            state.show_error("Name, email and password are all required");
            return;
        }

        let role_v = new_role.get_untracked();
        set_creating.set(true);
        spawn_local(async move {
            match client::create_user(&name_v, &email_v, &password_v, role_v).await {
                Ok(user) => {
                    state.show_success(&format!("Added {}", user.name));
                    set_show_add.set(false);
                    set_new_name.set(String::new());
                    set_new_email.set(String::new());
                    set_new_password.set(String::new());
                    set_new_role.set(Role::User);
                    load();
                }
                Err(e) => state.show_error(&e),
            }
            set_creating.set(false);
        });
    };

    let handle_delete = move |user: User| {
        let me = state
            .user
            .with_untracked(|u| u.as_ref().map(|me| me.id.clone()).unwrap_or_default());
        if user.id == me {
            state.show_error("You cannot delete your own account");
            return;
        }
        spawn_local(async move {
            match client::delete_user(&user.id).await {
                Ok(()) => {
                    state.show_success(&format!("Removed {}", user.name));
                    load();
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let input_class = "w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg">
            <div class="flex items-center justify-between p-6 border-b border-gray-700">
                <div>
                    <h2 class="text-lg font-semibold text-white">"User Management"</h2>
                    <p class="text-sm text-gray-400">"Accounts that can sign in to this application"</p>
                </div>
                <button
                    class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium"
                    on:click=move |_| set_show_add.set(true)
                >
                    "+ Add User"
                </button>
            </div>

            <Show when=move || loaded.get() fallback=|| view! { <div class="p-6"><TableSkeleton rows=3 /></div> }>
                <table class="w-full">
                    <thead class="bg-gray-900/50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                "Name"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                "Email"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                "Role"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                "Created"
                            </th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let me = state
                                .user
                                .with(|u| u.as_ref().map(|me| me.id.clone()).unwrap_or_default());
                            users.get().into_iter().map(|u| {
                                let is_me = u.id == me;
                                let role_class = if u.is_admin() {
                                    "px-2 py-1 rounded-full text-xs font-medium bg-blue-500/10 text-blue-400"
                                } else {
                                    "px-2 py-1 rounded-full text-xs font-medium bg-gray-600/30 text-gray-300"
                                };
                                let for_delete = u.clone();
                                view! {
                                    <tr class="border-t border-gray-700">
                                        <td class="px-6 py-3 text-sm text-white font-medium">
                                            {u.name.clone()}
                                            {is_me.then(|| view! {
                                                <span class="text-gray-500 text-xs ml-2">"(you)"</span>
                                            })}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-300">{u.email.clone()}</td>
                                        <td class="px-6 py-3">
                                            <span class=role_class>{u.role.label()}</span>
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-300">
                                            {format_date(&u.created_at)}
                                        </td>
                                        <td class="px-6 py-3 text-right">
                                            <button
                                                class="text-sm text-red-400 hover:text-red-300 \
                                                       disabled:text-gray-600 disabled:cursor-not-allowed"
                                                disabled=is_me
                                                on:click=move |_| set_confirm_delete.set(Some(for_delete.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>

        // Add-user modal
        {move || show_add.get().then(|| view! {
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                <form
                    class="bg-gray-800 border border-gray-700 rounded-lg p-6 w-full max-w-md mx-4 space-y-4"
                    on:submit=handle_create
                >
                    <div>
                        <h3 class="text-lg font-semibold text-white">"Add New User"</h3>
                        <p class="text-sm text-gray-400">"Create an account that can sign in"</p>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Full Name"</label>
                        <input
                            type="text"
                            class=input_class
                            placeholder="John Doe"
                            prop:value=new_name
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Email"</label>
                        <input
                            type="email"
                            class=input_class
                            placeholder="user@example.com"
                            prop:value=new_email
                            on:input=move |ev| set_new_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Password"</label>
                        <input
                            type="password"
                            class=input_class
                            placeholder="••••••••"
                            prop:value=new_password
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Role"</label>
                        <select
                            class=input_class
                            prop:value=move || new_role.get().label()
                            on:change=move |ev| set_new_role.set(Role::from_label(&event_target_value(&ev)))
                        >
                            <option value="User">"User"</option>
                            <option value="Admin">"Admin"</option>
                        </select>
                    </div>
                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                            on:click=move |_| set_show_add.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white \
                                   disabled:opacity-50"
                            disabled=creating
                        >
                            <Show when=move || creating.get() fallback=|| "Add User">
                                <InlineLoading />
                                " Adding..."
                            </Show>
                        </button>
                    </div>
                </form>
            </div>
        })}

        // Delete confirmation modal
        {move || {
            confirm_delete.get().map(|user| {
                let name = user.name.clone();
                let do_delete = move |_| {
                    set_confirm_delete.set(None);
                    handle_delete(user.clone());
                };
                view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 w-full max-w-md mx-4">
                            <h3 class="text-lg font-semibold text-white mb-2">"Remove user?"</h3>
                            <p class="text-sm text-gray-400 mb-6">
                                {format!("{} will no longer be able to sign in.", name)}
                            </p>
                            <div class="flex justify-end space-x-3">
                                <button
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                                    on:click=move |_| set_confirm_delete.set(None)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="px-4 py-2 rounded-lg bg-red-600 hover:bg-red-700 text-white"
                                    on:click=do_delete
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
