//! Catalog search.
//!
//! The filter is recomputed from the authoritative list on every query change;
//! nothing is incremental.

use stockbook_catalog::Product;

/// Subset of `products` matching `query`, in catalog order.
pub fn filter(products: &[Product], query: &str) -> Vec<Product> {
    products.iter().filter(|p| matches(p, query)).cloned().collect()
}

/// Whether a single product matches `query`.
///
/// A product matches when its id rendered as decimal text contains the query,
/// or its name or category label contains it case-insensitively. The empty
/// query matches everything.
pub fn matches(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    product.id.to_string().contains(query)
        || product.name.to_lowercase().contains(&needle)
        || product.category.label().to_lowercase().contains(&needle)
}
