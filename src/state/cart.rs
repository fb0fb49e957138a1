//! Point-of-Sale Cart
//!
//! Cart arithmetic for the sales screen, kept free of signals so the
//! invariants can be tested directly. The page holds `Vec<InvoiceItem>` in a
//! signal and routes every mutation through these functions.

use crate::api::models::{InvoiceItem, Product};

/// Add `quantity` of a product, merging with an existing line for the same
/// product id instead of creating a duplicate.
pub fn add_product(lines: &mut Vec<InvoiceItem>, product: &Product, quantity: u32) {
    let quantity = quantity.max(1);
    let existing = lines
        .iter_mut()
        .find(|l| l.product_id.as_deref() == Some(product.id.as_str()));

    match existing {
        Some(line) => line.quantity += quantity,
        None => lines.push(InvoiceItem {
            product_id: Some(product.id.clone()),
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.selling_price,
            quantity,
        }),
    }
}

/// Set a line's quantity, clamped to at least 1.
pub fn set_quantity(lines: &mut [InvoiceItem], index: usize, quantity: u32) {
    if let Some(line) = lines.get_mut(index) {
        line.quantity = quantity.max(1);
    }
}

/// Set a line's unit price, clamped to at least 0.
pub fn set_price(lines: &mut [InvoiceItem], index: usize, price: f64) {
    if let Some(line) = lines.get_mut(index) {
        line.price = if price.is_finite() { price.max(0.0) } else { 0.0 };
    }
}

pub fn remove_line(lines: &mut Vec<InvoiceItem>, index: usize) {
    if index < lines.len() {
        lines.remove(index);
    }
}

/// Sum of all line totals.
pub fn subtotal(lines: &[InvoiceItem]) -> f64 {
    lines.iter().map(|l| l.line_total()).sum()
}

/// Total number of units across all lines.
pub fn item_count(lines: &[InvoiceItem]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}

/// Clamp a discount entry into `[0, subtotal]`.
pub fn clamp_discount(value: f64, subtotal: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, subtotal.max(0.0))
}

/// Clamp a tax-rate entry into `[0, 100]` percent.
pub fn clamp_tax_rate(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Derived money figures for the summary panel and the saved invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub sub_total: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Tax applies to the undiscounted subtotal; the discount then comes off the
/// combined amount.
pub fn totals(lines: &[InvoiceItem], discount: f64, tax_rate: f64) -> Totals {
    let sub_total = subtotal(lines);
    let tax_amount = sub_total * clamp_tax_rate(tax_rate) / 100.0;
    let grand_total = sub_total - discount + tax_amount;
    Totals {
        sub_total,
        tax_amount,
        grand_total,
    }
}

/// A sale can be saved once the cart has lines and the discount still fits
/// under the current subtotal. An in-flight save blocks a second submit.
pub fn can_save(lines: &[InvoiceItem], discount: f64, processing: bool) -> bool {
    !lines.is_empty() && !processing && discount <= subtotal(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            description: String::new(),
            cost_price: price * 0.6,
            selling_price: price,
            stock: 100,
            low_stock_threshold: 20,
            image: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_add_product_merges_by_id() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 2);
        add_product(&mut lines, &product("b", 50.0), 1);
        add_product(&mut lines, &product("a", 100.0), 3);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 5);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_add_product_zero_quantity_becomes_one() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 0);
        assert_eq!(lines[0].quantity, 1);
    }

    #[test]
    fn test_quantity_clamps_to_one() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 5);
        set_quantity(&mut lines, 0, 0);
        assert_eq!(lines[0].quantity, 1);
        set_quantity(&mut lines, 0, 12);
        assert_eq!(lines[0].quantity, 12);
        // Out-of-range index is a no-op
        set_quantity(&mut lines, 9, 3);
    }

    #[test]
    fn test_price_clamps_to_zero() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 1);
        set_price(&mut lines, 0, -25.0);
        assert_eq!(lines[0].price, 0.0);
        set_price(&mut lines, 0, 80.5);
        assert_eq!(lines[0].price, 80.5);
        set_price(&mut lines, 0, f64::NAN);
        assert_eq!(lines[0].price, 0.0);
    }

    #[test]
    fn test_remove_line() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 1);
        add_product(&mut lines, &product("b", 50.0), 1);
        remove_line(&mut lines, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id.as_deref(), Some("b"));
        // Out-of-range index is a no-op
        remove_line(&mut lines, 5);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 100.0), 2);
        add_product(&mut lines, &product("b", 49.5), 3);
        assert_eq!(subtotal(&lines), 2.0 * 100.0 + 3.0 * 49.5);
        assert_eq!(item_count(&lines), 5);
    }

    #[test]
    fn test_totals_composition() {
        let mut lines = Vec::new();
        add_product(&mut lines, &product("a", 500.0), 2);

        let t = totals(&lines, 100.0, 5.0);
        assert_eq!(t.sub_total, 1000.0);
        assert_eq!(t.tax_amount, 50.0);
        assert_eq!(t.grand_total, 1000.0 - 100.0 + 50.0);

        let no_tax = totals(&lines, 0.0, 0.0);
        assert_eq!(no_tax.grand_total, 1000.0);
    }

    #[test]
    fn test_discount_clamp() {
        assert_eq!(clamp_discount(-10.0, 500.0), 0.0);
        assert_eq!(clamp_discount(200.0, 500.0), 200.0);
        assert_eq!(clamp_discount(700.0, 500.0), 500.0);
        assert_eq!(clamp_discount(f64::NAN, 500.0), 0.0);
    }

    #[test]
    fn test_tax_rate_clamp() {
        assert_eq!(clamp_tax_rate(-5.0), 0.0);
        assert_eq!(clamp_tax_rate(18.0), 18.0);
        assert_eq!(clamp_tax_rate(250.0), 100.0);
    }

    #[test]
    fn test_can_save_gating() {
        let mut lines = Vec::new();
        assert!(!can_save(&lines, 0.0, false)); // empty cart

        add_product(&mut lines, &product("a", 100.0), 2);
        assert!(can_save(&lines, 0.0, false));
        assert!(!can_save(&lines, 0.0, true)); // save in flight

        // Discount was valid for a bigger cart, then lines were removed
        let stale_discount = 150.0;
        remove_line(&mut lines, 0);
        add_product(&mut lines, &product("a", 100.0), 1);
        assert!(subtotal(&lines) < stale_discount);
        assert!(!can_save(&lines, stale_discount, false));

        assert!(can_save(&lines, 100.0, false)); // equal to subtotal is fine
    }
}
