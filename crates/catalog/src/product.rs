use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

use crate::category::Category;

/// A committed catalog record.
///
/// `price` is free text and round-trips untouched; it is never parsed or
/// validated numerically. `stock` is the parsed numeric value of the draft's
/// stock text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub category: Category,
    pub stock: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_text_round_trips_untouched() {
        let product = Product {
            id: ProductId::new(1),
            name: "Pen".to_string(),
            price: "R$ 3,50".to_string(),
            category: Category::Stationery,
            stock: 120.0,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "R$ 3,50");
        assert_eq!(json["id"], 1);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
