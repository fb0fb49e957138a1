//! Product Form Component
//!
//! Shared add/edit form with inline validation and image upload. Validation
//! runs on submit; a field's message clears as soon as that field changes.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::models::Product;
use crate::components::loading::InlineLoading;
use crate::state::global::GlobalState;

const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Some("Name must be 100 characters or fewer".to_string());
    }
    None
}

pub fn validate_sku(sku: &str) -> Option<String> {
    let trimmed = sku.trim();
    if trimmed.is_empty() {
        return Some("SKU is required".to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Some("SKU may only contain letters, numbers, and hyphens".to_string());
    }
    None
}

pub fn validate_price(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Price is required".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => None,
        Ok(v) if v < 0.0 => Some("Price cannot be negative".to_string()),
        _ => Some("Price must be a valid number".to_string()),
    }
}

pub fn validate_quantity(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Quantity is required".to_string());
    }
    match trimmed.parse::<i64>() {
        Ok(v) if v >= 0 => None,
        Ok(_) => Some("Quantity cannot be negative".to_string()),
        Err(_) => Some("Quantity must be a whole number".to_string()),
    }
}

/// Product add/edit form. Builds multipart form data (camelCase field names
/// plus an optional `image` file) and hands it to `on_submit`.
#[component]
pub fn ProductForm<F>(
    /// Present when editing; pre-fills every field
    #[prop(optional)]
    initial: Option<Product>,
    submit_label: &'static str,
    #[prop(into)]
    submitting: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(web_sys::FormData) + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_edit = initial.is_some();
    let initial_preview = initial
        .as_ref()
        .and_then(|p| p.image.as_ref())
        .map(|i| i.url.clone())
        .filter(|u| !u.is_empty());

    let (name, set_name) = create_signal(
        initial.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (sku, set_sku) = create_signal(
        initial.as_ref().map(|p| p.sku.clone()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        initial.as_ref().map(|p| p.description.clone()).unwrap_or_default(),
    );
    let (cost, set_cost) = create_signal(
        initial.as_ref().map(|p| p.cost_price.to_string()).unwrap_or_default(),
    );
    let (selling, set_selling) = create_signal(
        initial.as_ref().map(|p| p.selling_price.to_string()).unwrap_or_default(),
    );
    let (quantity, set_quantity) = create_signal(
        initial.as_ref().map(|p| p.stock.to_string()).unwrap_or_default(),
    );
    let (threshold, set_threshold) = create_signal(
        initial
            .as_ref()
            .map(|p| p.low_stock_threshold.to_string())
            .unwrap_or_else(|| "20".to_string()),
    );

    let (name_error, set_name_error) = create_signal(None::<String>);
    let (sku_error, set_sku_error) = create_signal(None::<String>);
    let (cost_error, set_cost_error) = create_signal(None::<String>);
    let (selling_error, set_selling_error) = create_signal(None::<String>);
    let (quantity_error, set_quantity_error) = create_signal(None::<String>);

    let (file, set_file) = create_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(initial_preview);
    let file_input_ref = create_node_ref::<html::Input>();

    let quantity_label = if is_edit { "Stock Quantity" } else { "Starting Quantity" };

    let on_file_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|list| list.get(0));
        let Some(picked) = selected else {
            return;
        };
        if picked.size() > MAX_IMAGE_BYTES {
            state.show_error("Image must be 5 MB or smaller");
            input.set_value("");
            return;
        }

        // Data-URL preview of the chosen image
        let reader = web_sys::FileReader::new().unwrap();
        let reader_for_load = reader.clone();
        let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = reader_for_load.result() {
                if let Some(url) = result.as_string() {
                    set_preview.set(Some(url));
                }
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(&picked);

        set_file.set(Some(picked));
    };

    let remove_image = move |_| {
        set_file.set(None);
        set_preview.set(None);
        if let Some(input) = file_input_ref.get() {
            input.set_value("");
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name_v = name.get_untracked();
        let sku_v = sku.get_untracked();
        let cost_v = cost.get_untracked();
        let selling_v = selling.get_untracked();
        let quantity_v = quantity.get_untracked();

        let mut valid = true;
        let e = validate_name(&name_v);
        valid &= e.is_none();
        set_name_error.set(e);
        let e = validate_sku(&sku_v);
        valid &= e.is_none();
        set_sku_error.set(e);
        let e = validate_price(&cost_v);
        valid &= e.is_none();
        set_cost_error.set(e);
        let e = validate_price(&selling_v);
        valid &= e.is_none();
        set_selling_error.set(e);
        let e = validate_quantity(&quantity_v);
        valid &= e.is_none();
        set_quantity_error.set(e);
        if !valid {
            return;
        }

        let form = web_sys::FormData::new().unwrap();
        let _ = form.append_with_str("name", name_v.trim());
        let _ = form.append_with_str("sku", sku_v.trim());
        let _ = form.append_with_str("description", description.get_untracked().trim());
        let _ = form.append_with_str("costPrice", cost_v.trim());
        let _ = form.append_with_str("sellingPrice", selling_v.trim());
        let _ = form.append_with_str("stock", quantity_v.trim());
        // Threshold is forgiving: anything unparseable becomes the default
        let threshold_v = threshold.get_untracked().trim().parse::<i32>().unwrap_or(20);
        let _ = form.append_with_str("lowStockThreshold", &threshold_v.to_string());
        if let Some(picked) = file.get_untracked() {
            let _ = form.append_with_blob_and_filename("image", &picked, &picked.name());
        }

        on_submit(form);
    };

    let input_class = "w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2 text-white \
                       placeholder-gray-500 focus:outline-none focus:border-blue-500";

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label="Name" error=name_error>
                    <input
                        type="text"
                        class=input_class
                        placeholder="e.g. LED Bulb 9W Cool White"
                        prop:value=name
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                            set_name_error.set(None);
                        }
                    />
                </FormField>

                <FormField label="SKU" error=sku_error>
                    <input
                        type="text"
                        class=format!("{} font-mono", input_class)
                        placeholder="e.g. LED-9W-CW"
                        prop:value=sku
                        on:input=move |ev| {
                            set_sku.set(event_target_value(&ev).to_uppercase());
                            set_sku_error.set(None);
                        }
                    />
                </FormField>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Description"</label>
                <textarea
                    class=input_class
                    rows="3"
                    placeholder="Optional notes shown on the product"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label="Cost Price" error=cost_error>
                    <input
                        type="number"
                        step="0.01"
                        class=input_class
                        placeholder="0.00"
                        prop:value=cost
                        on:input=move |ev| {
                            set_cost.set(event_target_value(&ev));
                            set_cost_error.set(None);
                        }
                    />
                </FormField>

                <FormField label="Selling Price" error=selling_error>
                    <input
                        type="number"
                        step="0.01"
                        class=input_class
                        placeholder="0.00"
                        prop:value=selling
                        on:input=move |ev| {
                            set_selling.set(event_target_value(&ev));
                            set_selling_error.set(None);
                        }
                    />
                </FormField>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <FormField label=quantity_label error=quantity_error>
                    <input
                        type="number"
                        class=input_class
                        placeholder="0"
                        prop:value=quantity
                        on:input=move |ev| {
                            set_quantity.set(event_target_value(&ev));
                            set_quantity_error.set(None);
                        }
                    />
                </FormField>

                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Low Stock Threshold"</label>
                    <input
                        type="number"
                        class=input_class
                        prop:value=threshold
                        on:input=move |ev| set_threshold.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-1">"Product Image"</label>
                <input
                    type="file"
                    accept="image/*"
                    node_ref=file_input_ref
                    class="block text-sm text-gray-400 file:mr-3 file:px-3 file:py-1.5 file:rounded-lg \
                           file:border-0 file:bg-gray-700 file:text-gray-200 hover:file:bg-gray-600"
                    on:change=on_file_change
                />
                {move || preview.get().map(|url| view! {
                    <div class="mt-3 flex items-center space-x-3">
                        <img src=url class="w-24 h-24 rounded-lg object-cover border border-gray-700" />
                        <button
                            type="button"
                            class="text-sm text-red-400 hover:text-red-300"
                            on:click=remove_image
                        >
                            "Remove"
                        </button>
                    </div>
                })}
            </div>

            <div class="flex items-center justify-end space-x-3 pt-2">
                <a
                    href="/inventory"
                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                >
                    "Cancel"
                </a>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=submitting
                >
                    <Show when=move || submitting.get() fallback=move || submit_label>
                        <InlineLoading /> " Saving..."
                    </Show>
                </button>
            </div>
        </form>
    }
}

#[component]
fn FormField(
    label: &'static str,
    #[prop(into)]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-1">{label}</label>
            {children()}
            {move || error.get().map(|msg| view! {
                <p class="mt-1 text-xs text-red-400">{msg}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_and_capped() {
        assert!(validate_name("").is_some());
        assert!(validate_name("   ").is_some());
        assert!(validate_name("LED Bulb 9W").is_none());
        assert!(validate_name(&"x".repeat(100)).is_none());
        assert!(validate_name(&"x".repeat(101)).is_some());
    }

    #[test]
    fn test_sku_charset() {
        assert!(validate_sku("").is_some());
        assert!(validate_sku("LED-9W").is_none());
        assert!(validate_sku("ABC123").is_none());
        assert!(validate_sku("LED 9W").is_some()); // embedded space
        assert!(validate_sku("LED_9W").is_some());
        assert!(validate_sku("LED#9").is_some());
    }

    #[test]
    fn test_price_validation() {
        assert!(validate_price("").is_some());
        assert!(validate_price("0").is_none());
        assert!(validate_price("120.50").is_none());
        assert_eq!(
            validate_price("-1").as_deref(),
            Some("Price cannot be negative")
        );
        assert_eq!(
            validate_price("abc").as_deref(),
            Some("Price must be a valid number")
        );
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity("").is_some());
        assert!(validate_quantity("0").is_none());
        assert!(validate_quantity("250").is_none());
        assert_eq!(
            validate_quantity("-2").as_deref(),
            Some("Quantity cannot be negative")
        );
        assert!(validate_quantity("1.5").is_some()); // fractions rejected
        assert!(validate_quantity("ten").is_some());
    }
}
