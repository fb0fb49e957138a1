//! Pages
//!
//! Top-level page components for each route.

pub mod add_product;
pub mod dashboard;
pub mod edit_product;
pub mod inventory;
pub mod invoice_view;
pub mod invoices;
pub mod login;
pub mod pos;
pub mod settings;

pub use add_product::AddProduct;
pub use dashboard::Dashboard;
pub use edit_product::EditProduct;
pub use inventory::Inventory;
pub use invoice_view::InvoiceView;
pub use invoices::Invoices;
pub use login::Login;
pub use pos::Pos;
pub use settings::Settings;
