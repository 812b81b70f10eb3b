use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockbook_core::DomainError;

/// Fixed product category set.
///
/// The order is significant: [`Category::ALL`] is the order a selection
/// control presents the categories in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Food,
    Beverages,
    HomeAndGarden,
    HealthAndBeauty,
    SportsAndFitness,
    Automotive,
    Toys,
    Tools,
    Furniture,
    Stationery,
    MusicalInstruments,
    GamesAndVideoGames,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 15] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Food,
        Category::Beverages,
        Category::HomeAndGarden,
        Category::HealthAndBeauty,
        Category::SportsAndFitness,
        Category::Automotive,
        Category::Toys,
        Category::Tools,
        Category::Furniture,
        Category::Stationery,
        Category::MusicalInstruments,
        Category::GamesAndVideoGames,
    ];

    /// Human label shown in the selection control and matched by search.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Food => "Food",
            Category::Beverages => "Beverages",
            Category::HomeAndGarden => "Home & Garden",
            Category::HealthAndBeauty => "Health & Beauty",
            Category::SportsAndFitness => "Sports & Fitness",
            Category::Automotive => "Automotive",
            Category::Toys => "Toys",
            Category::Tools => "Tools",
            Category::Furniture => "Furniture",
            Category::Stationery => "Stationery",
            Category::MusicalInstruments => "Musical Instruments",
            Category::GamesAndVideoGames => "Games & Video Games",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_parses_back_to_its_category() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("Groceries")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn presentation_order_is_stable() {
        assert_eq!(Category::ALL.len(), 15);
        assert_eq!(Category::ALL[0], Category::Electronics);
        assert_eq!(Category::ALL[5], Category::HomeAndGarden);
        assert_eq!(Category::ALL[14], Category::GamesAndVideoGames);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Category::HomeAndGarden.to_string(), "Home & Garden");
        assert_eq!(Category::GamesAndVideoGames.to_string(), "Games & Video Games");
    }
}
