//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod badges;
pub mod cart_table;
pub mod global_search;
pub mod invoice_summary;
pub mod loading;
pub mod nav;
pub mod product_form;
pub mod product_search;
pub mod product_table;
pub mod stat_card;
pub mod toast;

pub use badges::{PaymentBadge, StockBadge};
pub use cart_table::CartTable;
pub use global_search::GlobalSearch;
pub use invoice_summary::InvoiceSummary;
pub use loading::Loading;
pub use nav::Nav;
pub use product_form::ProductForm;
pub use product_search::ProductSearch;
pub use product_table::ProductTable;
pub use stat_card::StatCard;
pub use toast::Toast;
