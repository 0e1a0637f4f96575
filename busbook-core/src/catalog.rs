//! Static bus catalog and route search.
use serde::{Deserialize, Serialize};

use crate::constants::CURRENCY_SYMBOL;

/// A scheduled bus between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: u32,
    pub name: String,
    pub source: String,
    pub destination: String,
    /// Display-only; searches never filter on it.
    pub departure_time: String,
    /// Fare in whole rupees.
    pub price: u32,
}

impl BusRoute {
    /// `true` when both endpoints match ignoring case.
    #[must_use]
    pub fn serves(&self, source: &str, destination: &str) -> bool {
        self.source.to_lowercase() == source.to_lowercase()
            && self.destination.to_lowercase() == destination.to_lowercase()
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

/// Format a fare with the single supported currency symbol.
#[must_use]
pub fn format_price(amount: u32) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Read-only set of bookable routes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusCatalog {
    routes: Vec<BusRoute>,
}

impl BusCatalog {
    #[must_use]
    pub const fn new(routes: Vec<BusRoute>) -> Self {
        Self { routes }
    }

    /// The three kolkata → puri services the demo ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let route = |id, name: &str, departure: &str, price| BusRoute {
            id,
            name: name.to_string(),
            source: "kolkata".to_string(),
            destination: "puri".to_string(),
            departure_time: departure.to_string(),
            price,
        };
        Self::new(vec![
            route(1, "Express Line", "10:00 AM", 500),
            route(2, "Super Bus", "02:00 PM", 450),
            route(3, "Night Rider", "09:00 PM", 550),
        ])
    }

    #[must_use]
    pub fn routes(&self) -> &[BusRoute] {
        &self.routes
    }

    #[must_use]
    pub fn find(&self, bus_id: u32) -> Option<&BusRoute> {
        self.routes.iter().find(|route| route.id == bus_id)
    }

    /// Every route whose source and destination match exactly, ignoring case.
    /// An empty result is a normal outcome.
    #[must_use]
    pub fn search(&self, source: &str, destination: &str) -> Vec<&BusRoute> {
        self.routes
            .iter()
            .filter(|route| route.serves(source, destination))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_case_insensitively() {
        let catalog = BusCatalog::builtin();
        let hits = catalog.search("Kolkata", "PURI");
        let ids: Vec<u32> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn search_is_exact_not_partial() {
        let catalog = BusCatalog::builtin();
        assert!(catalog.search("kol", "puri").is_empty());
        assert!(catalog.search("kolkata", "puri ").is_empty());
        assert!(catalog.search("puri", "kolkata").is_empty());
    }

    #[test]
    fn find_by_id() {
        let catalog = BusCatalog::builtin();
        assert_eq!(catalog.find(2).map(|r| r.name.as_str()), Some("Super Bus"));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn price_label_uses_rupee_symbol() {
        let catalog = BusCatalog::builtin();
        assert_eq!(catalog.routes()[1].price_label(), "₹450");
    }
}
