//! Product Table Component
//!
//! Sortable inventory listing with stock badges and row actions. Sorting is
//! client-side over the currently loaded page.

use leptos::*;
use std::cmp::Ordering;

use crate::api::models::Product;
use crate::components::badges::StockBadge;
use crate::state::global::GlobalState;
use crate::util::format_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Sku,
    CostPrice,
    SellingPrice,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort products in place. String fields compare case-insensitively.
pub fn sort_products(products: &mut [Product], field: SortField, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ord = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Sku => a.sku.to_lowercase().cmp(&b.sku.to_lowercase()),
            SortField::CostPrice => {
                a.cost_price.partial_cmp(&b.cost_price).unwrap_or(Ordering::Equal)
            }
            SortField::SellingPrice => {
                a.selling_price.partial_cmp(&b.selling_price).unwrap_or(Ordering::Equal)
            }
            SortField::Stock => a.stock.cmp(&b.stock),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Inventory table with sortable headers and a delete confirmation modal
#[component]
pub fn ProductTable<F>(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    on_delete: F,
) -> impl IntoView
where
    F: Fn(Product) + Clone + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (sort_field, set_sort_field) = create_signal(SortField::Name);
    let (sort_dir, set_sort_dir) = create_signal(SortDirection::Asc);
    let (confirm, set_confirm) = create_signal(None::<Product>);

    let toggle_sort = move |field: SortField| {
        if sort_field.get_untracked() == field {
            set_sort_dir.update(|d| *d = d.toggle());
        } else {
            set_sort_field.set(field);
            set_sort_dir.set(SortDirection::Asc);
        }
    };

    let sorted = create_memo(move |_| {
        let mut list = products.get();
        sort_products(&mut list, sort_field.get(), sort_dir.get());
        list
    });

    let header = move |label: &'static str, field: SortField| {
        view! {
            <th
                class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider \
                       cursor-pointer select-none hover:text-white"
                on:click=move |_| toggle_sort(field)
            >
                {label}
                {move || {
                    if sort_field.get() == field {
                        match sort_dir.get() {
                            SortDirection::Asc => " ▲",
                            SortDirection::Desc => " ▼",
                        }
                    } else {
                        ""
                    }
                }}
            </th>
        }
    };

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg overflow-x-auto">
            <table class="w-full">
                <thead class="bg-gray-900/50">
                    <tr>
                        <th class="px-4 py-3 w-14"></th>
                        {header("Name", SortField::Name)}
                        {header("SKU", SortField::Sku)}
                        {header("Cost", SortField::CostPrice)}
                        {header("Price", SortField::SellingPrice)}
                        {header("Stock", SortField::Stock)}
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let list = sorted.get();
                        if list.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="7" class="px-4 py-8 text-center text-gray-500">
                                        "No products found"
                                    </td>
                                </tr>
                            }.into_view();
                        }

                        list.into_iter().map(|product| {
                            let status = product.stock_status();
                            let symbol = state.company.with(|c| c.currency_symbol.clone());
                            let edit_href = format!("/inventory/edit/{}", product.id);
                            let thumb = match &product.image {
                                Some(img) if !img.url.is_empty() => view! {
                                    <img
                                        src=img.url.clone()
                                        alt=product.name.clone()
                                        class="w-10 h-10 rounded object-cover"
                                    />
                                }.into_view(),
                                _ => view! {
                                    <div class="w-10 h-10 rounded bg-gray-700 flex items-center justify-center">
                                        "💡"
                                    </div>
                                }.into_view(),
                            };
                            let confirm_target = product.clone();

                            view! {
                                <tr class="border-t border-gray-700 hover:bg-gray-750">
                                    <td class="px-4 py-3">{thumb}</td>
                                    <td class="px-4 py-3 text-sm text-white">{product.name.clone()}</td>
                                    <td class="px-4 py-3 text-sm text-gray-300 font-mono">{product.sku.clone()}</td>
                                    <td class="px-4 py-3 text-sm text-gray-300">
                                        {symbol.clone()} " " {format_money(product.cost_price)}
                                    </td>
                                    <td class="px-4 py-3 text-sm text-gray-300">
                                        {symbol} " " {format_money(product.selling_price)}
                                    </td>
                                    <td class="px-4 py-3">
                                        <span class="text-sm text-white mr-2">{product.stock}</span>
                                        <StockBadge status=status />
                                    </td>
                                    <td class="px-4 py-3 text-right whitespace-nowrap space-x-3">
                                        <a href=edit_href class="text-sm text-blue-400 hover:text-blue-300">
                                            "Edit"
                                        </a>
                                        <button
                                            class="text-sm text-red-400 hover:text-red-300"
                                            on:click=move |_| set_confirm.set(Some(confirm_target.clone()))
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
        </div>

        // Delete confirmation modal
        {move || {
            let on_delete = on_delete.clone();
            confirm.get().map(|product| {
                let name = product.name.clone();
                let do_delete = move |_| {
                    set_confirm.set(None);
                    on_delete(product.clone());
                };
                view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 w-full max-w-md mx-4">
                            <h3 class="text-lg font-semibold text-white mb-2">"Delete product?"</h3>
                            <p class="text-sm text-gray-400 mb-6">
                                {format!("\"{}\" will be removed from inventory. This cannot be undone.", name)}
                            </p>
                            <div class="flex justify-end space-x-3">
                                <button
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                                    on:click=move |_| set_confirm.set(None)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, sku: &str, cost: f64, price: f64, stock: i32) -> Product {
        Product {
            id: sku.to_lowercase(),
            name: name.into(),
            sku: sku.into(),
            description: String::new(),
            cost_price: cost,
            selling_price: price,
            stock,
            low_stock_threshold: 20,
            image: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("ceiling fan", "FAN-56", 3000.0, 4500.0, 8),
            product("LED Bulb 9W", "LED-9W", 80.0, 120.0, 200),
            product("Anchor Switch", "SW-01", 25.0, 45.0, 50),
        ]
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut list = fixture();
        sort_products(&mut list, SortField::Name, SortDirection::Asc);
        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anchor Switch", "ceiling fan", "LED Bulb 9W"]);
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut list = fixture();
        sort_products(&mut list, SortField::SellingPrice, SortDirection::Desc);
        let prices: Vec<f64> = list.iter().map(|p| p.selling_price).collect();
        assert_eq!(prices, vec![4500.0, 120.0, 45.0]);
    }

    #[test]
    fn test_sort_by_stock() {
        let mut list = fixture();
        sort_products(&mut list, SortField::Stock, SortDirection::Asc);
        let stocks: Vec<i32> = list.iter().map(|p| p.stock).collect();
        assert_eq!(stocks, vec![8, 50, 200]);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
    }
}
