use serde::{Deserialize, Serialize};

use crate::catalog::{BusCatalog, BusRoute};
use crate::seats::SeatPlan;

/// Static booking data shipped with the site: the route list and the seat plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub routes: Vec<BusRoute>,
    #[serde(default)]
    pub seat_plan: SeatPlan,
}

impl Default for BookingData {
    fn default() -> Self {
        Self {
            routes: BusCatalog::builtin().routes().to_vec(),
            seat_plan: SeatPlan::default_config(),
        }
    }
}

impl BookingData {
    /// Load booking data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid booking data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the bundled data asset, falling back to the built-in routes if the
    /// asset fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!(
            "../../busbook-web/static/assets/data/routes.json"
        ))
        .unwrap_or_else(|err| {
            log::warn!("bundled route data is invalid, using built-in routes: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn catalog(&self) -> BusCatalog {
        BusCatalog::new(self.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_asset_matches_builtin_catalog() {
        let data = BookingData::load_from_static();
        assert_eq!(data.catalog(), BusCatalog::builtin());
        assert_eq!(data.seat_plan, SeatPlan::default_config());
    }

    #[test]
    fn from_json_defaults_missing_seat_plan() {
        let json = r#"{
            "routes": [
                {
                    "id": 7,
                    "name": "Coastal",
                    "source": "puri",
                    "destination": "kolkata",
                    "departureTime": "06:30 AM",
                    "price": 420
                }
            ]
        }"#;
        let data = BookingData::from_json(json).unwrap();
        assert_eq!(data.routes.len(), 1);
        assert_eq!(data.routes[0].departure_time, "06:30 AM");
        assert_eq!(data.seat_plan.total_seats, 40);
    }

    #[test]
    fn from_json_rejects_malformed_routes() {
        assert!(BookingData::from_json(r#"{"routes": [{"id": "x"}]}"#).is_err());
    }
}
