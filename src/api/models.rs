//! Backend Data Mirrors
//!
//! Serde mirrors of the documents the REST API serves. The backend speaks
//! Mongo-flavoured camelCase (`_id`, `costPrice`, `invoiceNumber`), so every
//! struct carries a `rename_all` and ids get an explicit rename. Unknown or
//! missing optional fields fall back to defaults rather than failing a whole
//! list decode.

use serde::{Deserialize, Serialize};

/// Uploaded file reference shared by product images and the company logo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageRef {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    // Signed: the backend decrements on sale and can go below zero.
    #[serde(default)]
    pub stock: i32,
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Stock level relative to a product's low-stock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Critical,
    Low,
    Sufficient,
}

impl Product {
    /// Critical at or below half the threshold, low at or below the
    /// threshold, sufficient above it. A zero threshold means the product
    /// was saved before thresholds existed; fall back to the default.
    pub fn stock_status(&self) -> StockStatus {
        let threshold = if self.low_stock_threshold > 0 {
            self.low_stock_threshold
        } else {
            default_threshold()
        };
        if self.stock * 2 <= threshold {
            StockStatus::Critical
        } else if self.stock <= threshold {
            StockStatus::Low
        } else {
            StockStatus::Sufficient
        }
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn from_label(label: &str) -> PaymentMethod {
        match label {
            "Card" => PaymentMethod::Card,
            "Bank Transfer" => PaymentMethod::BankTransfer,
            _ => PaymentMethod::Cash,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }
}

/// One sold line. `product` holds the source product's id so repeated adds
/// of the same product can be merged in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    #[serde(rename = "product", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub price: f64,
    pub quantity: u32,
}

impl InvoiceItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub sub_total: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub grand_total: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for `POST /invoices`; the backend assigns `_id` and `createdAt`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<InvoiceItem>,
    pub sub_total: f64,
    pub discount_amount: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    pub fn from_label(label: &str) -> Role {
        match label {
            "Admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// An account, both as the signed-in session and as a row on the user
/// management screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// `POST /auth/login` response: the user document with a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl LoginResponse {
    pub fn into_session(self) -> (User, String) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: String::new(),
        };
        (user, self.token)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            logo: None,
            tax_rate: 0.0,
            currency_symbol: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sales_today: f64,
    #[serde(default)]
    pub invoices_today: u32,
    #[serde(default)]
    pub items_sold_today: u32,
    #[serde(default)]
    pub low_stock_count: u32,
    #[serde(default)]
    pub low_stock_products: Vec<Product>,
    #[serde(default)]
    pub recent_invoices: Vec<Invoice>,
}

fn default_threshold() -> i32 {
    20
}

fn default_page() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32, threshold: i32) -> Product {
        Product {
            id: "p1".into(),
            name: "LED Bulb 9W".into(),
            sku: "LED-9W".into(),
            description: String::new(),
            cost_price: 80.0,
            selling_price: 120.0,
            stock,
            low_stock_threshold: threshold,
            image: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(product(10, 20).stock_status(), StockStatus::Critical);
        assert_eq!(product(11, 20).stock_status(), StockStatus::Low);
        assert_eq!(product(20, 20).stock_status(), StockStatus::Low);
        assert_eq!(product(21, 20).stock_status(), StockStatus::Sufficient);
    }

    #[test]
    fn test_stock_status_odd_threshold() {
        // Half of 7 rounds down in integer terms: 3*2=6 <= 7, 4*2=8 > 7
        assert_eq!(product(3, 7).stock_status(), StockStatus::Critical);
        assert_eq!(product(4, 7).stock_status(), StockStatus::Low);
        assert_eq!(product(8, 7).stock_status(), StockStatus::Sufficient);
    }

    #[test]
    fn test_stock_status_zero_threshold_falls_back() {
        assert_eq!(product(10, 0).stock_status(), StockStatus::Critical);
        assert_eq!(product(15, 0).stock_status(), StockStatus::Low);
        assert_eq!(product(21, 0).stock_status(), StockStatus::Sufficient);
    }

    #[test]
    fn test_stock_status_negative_stock_is_critical() {
        assert_eq!(product(-3, 20).stock_status(), StockStatus::Critical);
    }

    #[test]
    fn test_payment_method_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"Bank Transfer\"");
        let back: PaymentMethod = serde_json::from_str("\"Bank Transfer\"").unwrap();
        assert_eq!(back, PaymentMethod::BankTransfer);
        assert_eq!(PaymentMethod::from_label("Bank Transfer"), PaymentMethod::BankTransfer);
        assert_eq!(PaymentMethod::from_label("anything else"), PaymentMethod::Cash);
    }

    #[test]
    fn test_line_total() {
        let item = InvoiceItem {
            product_id: Some("p1".into()),
            name: "Ceiling Fan".into(),
            sku: "FAN-56".into(),
            price: 4500.0,
            quantity: 3,
        };
        assert_eq!(item.line_total(), 13500.0);
    }

    #[test]
    fn test_product_decodes_backend_document() {
        let doc = r#"{
            "_id": "64fa12",
            "name": "Tube Light 18W",
            "sku": "TUBE-18",
            "costPrice": 150,
            "sellingPrice": 220.5,
            "stock": 40,
            "lowStockThreshold": 10,
            "image": {"url": "https://cdn.example/tube.jpg", "public_id": "tube"},
            "createdAt": "2026-08-01T09:00:00.000Z"
        }"#;
        let p: Product = serde_json::from_str(doc).unwrap();
        assert_eq!(p.id, "64fa12");
        assert_eq!(p.selling_price, 220.5);
        assert_eq!(p.low_stock_threshold, 10);
        assert_eq!(p.image.as_ref().map(|i| i.url.as_str()), Some("https://cdn.example/tube.jpg"));
        // Description was absent from the document
        assert_eq!(p.description, "");
    }

    #[test]
    fn test_invoice_decodes_backend_document() {
        let doc = r#"{
            "_id": "inv1",
            "invoiceNumber": "INV-20260822-041",
            "customerName": "Walk-in Customer",
            "items": [{"product": "p1", "name": "LED Bulb 9W", "sku": "LED-9W", "price": 120, "quantity": 2}],
            "subTotal": 240,
            "discountAmount": 40,
            "taxRate": 5,
            "taxAmount": 12,
            "grandTotal": 212,
            "paymentMethod": "Cash",
            "paymentStatus": "Pending",
            "createdAt": "2026-08-22T10:30:00.000Z"
        }"#;
        let inv: Invoice = serde_json::from_str(doc).unwrap();
        assert_eq!(inv.invoice_number, "INV-20260822-041");
        assert_eq!(inv.items[0].product_id.as_deref(), Some("p1"));
        assert_eq!(inv.items[0].line_total(), 240.0);
        assert_eq!(inv.grand_total, 212.0);
        assert_eq!(inv.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_settings_default_currency() {
        let s: CompanySettings = serde_json::from_str(r#"{"name": "LightCraft"}"#).unwrap();
        assert_eq!(s.currency_symbol, "Rs.");
        assert_eq!(s.tax_rate, 0.0);
    }
}
