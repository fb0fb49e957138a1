//! HTTP API Client
//!
//! Functions for communicating with the LightCraft REST API. Authenticated
//! requests carry the bearer token stored at login.

use gloo_net::http::{Request, RequestBuilder};
use web_sys::FormData;

use crate::api::models::{
    CompanySettings, DashboardStats, Invoice, LoginResponse, NewInvoice, Product, ProductsPage,
    Role, User,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_URL_KEY: &str = "lightcraft_api_url";
const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, url);
    }
}

// ============ Session Persistence ============

/// Restore the signed-in user and token saved by a previous login.
pub fn load_session() -> Option<(User, String)> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let user_json = storage.get_item(USER_KEY).ok().flatten()?;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((user, token))
}

pub fn store_session(user: &User, token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

fn auth_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

fn with_auth(req: RequestBuilder) -> RequestBuilder {
    match auth_token() {
        Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
        None => req,
    }
}

fn encode(param: &str) -> String {
    String::from(js_sys::encode_uri_component(param))
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn fallback(message: &str) -> Self {
        ApiError {
            message: message.to_string(),
        }
    }
}

// ============ Auth ============

/// Sign in with email and password.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Invalid email or password"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all user accounts (admin only)
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/auth/users", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to load users"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a user account (admin only)
pub async fn create_user(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<User, String> {
    #[derive(serde::Serialize)]
    struct CreateUserRequest {
        name: String,
        email: String,
        password: String,
        role: Role,
    }

    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!("{}/auth/create-user", api_base)))
        .json(&CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to create user"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a user account (admin only)
pub async fn delete_user(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = with_auth(Request::delete(&format!("{}/auth/users/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to delete user"));
        return Err(error.message);
    }

    Ok(())
}

// ============ Products ============

/// Fetch one page of products, optionally filtered by a name/SKU keyword.
pub async fn fetch_products(keyword: &str, page: u32) -> Result<ProductsPage, String> {
    let api_base = get_api_base();

    let mut url = format!("{}/products?pageNumber={}", api_base, page);
    if !keyword.is_empty() {
        url.push_str(&format!("&keyword={}", encode(keyword)));
    }

    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to load products"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single product by id
pub async fn fetch_product(id: &str) -> Result<Product, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/products/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Product not found"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a product from multipart form data (fields + optional `image` file).
/// No explicit Content-Type: the browser supplies the multipart boundary.
pub async fn create_product(form: FormData) -> Result<Product, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!("{}/products", api_base)))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to create product"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a product from multipart form data
pub async fn update_product(id: &str, form: FormData) -> Result<Product, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::put(&format!("{}/products/{}", api_base, id)))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to update product"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a product
pub async fn delete_product(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = with_auth(Request::delete(&format!("{}/products/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to delete product"));
        return Err(error.message);
    }

    Ok(())
}

// ============ Invoices ============

/// Save a finished sale
pub async fn create_invoice(invoice: &NewInvoice) -> Result<Invoice, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!("{}/invoices", api_base)))
        .json(invoice)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to save invoice"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch invoices filtered by an RFC3339 date window and/or customer name.
pub async fn fetch_invoices(
    start_date: Option<&str>,
    end_date: Option<&str>,
    customer: &str,
) -> Result<Vec<Invoice>, String> {
    let api_base = get_api_base();

    let mut params: Vec<String> = Vec::new();
    if let Some(start) = start_date {
        params.push(format!("startDate={}", encode(start)));
    }
    if let Some(end) = end_date {
        params.push(format!("endDate={}", encode(end)));
    }
    if !customer.is_empty() {
        params.push(format!("customerName={}", encode(customer)));
    }

    let mut url = format!("{}/invoices", api_base);
    if !params.is_empty() {
        url.push_str(&format!("?{}", params.join("&")));
    }

    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to load invoices"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single invoice by id
pub async fn fetch_invoice(id: &str) -> Result<Invoice, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/invoices/{}", api_base, id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Invoice not found"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Dashboard & Settings ============

/// Fetch today's sales figures, low-stock products, and recent invoices.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/dashboard/stats", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to load dashboard"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch company settings
pub async fn fetch_settings() -> Result<CompanySettings, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/settings", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to load settings"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update company settings from multipart form data (fields + optional `logo` file)
pub async fn update_settings(form: FormData) -> Result<CompanySettings, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::put(&format!("{}/settings", api_base)))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError::fallback("Failed to save settings"));
        return Err(error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
