//! Named booking scenarios.
//!
//! Every scenario runs against a fresh [`ScenarioCtx`]: its own in-memory
//! store and a flow over the bundled route data. Scenarios move between
//! stages the way a browser does, through the encoded `href` of each
//! navigation, so the query codec is exercised on every hop.
use anyhow::{Context, Result, anyhow};
use busbook_core::{
    BookingData, BookingFlow, BookingLog, BookingLogEntry, MemoryStore, QueryParams, Stage,
};

pub mod booking;
pub mod failures;

pub type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

pub struct ScenarioCtx {
    pub store: MemoryStore,
    pub flow: BookingFlow<MemoryStore>,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn new(data: &BookingData, verbose: bool) -> Self {
        let store = MemoryStore::new();
        let flow = BookingFlow::from_data(data, store.clone());
        Self {
            store,
            flow,
            verbose,
        }
    }

    /// Load the page an `href` points at.
    pub fn arrive(&self, href: &str) -> Result<(Stage, QueryParams)> {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let stage =
            Stage::from_path(path).ok_or_else(|| anyhow!("navigation to unknown page {href}"))?;
        if self.verbose {
            println!("     ↳ {href}");
        }
        Ok((stage, QueryParams::decode(query)))
    }

    pub fn log_entries(&self) -> Result<Vec<BookingLogEntry>> {
        BookingLog::new(&self.store)
            .entries()
            .context("reading booking log")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub run: ScenarioFn,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        name: "Smoke Test",
        run: booking::smoke,
    },
    Scenario {
        key: "upi-booking",
        name: "UPI Booking",
        run: booking::upi_booking,
    },
    Scenario {
        key: "card-booking",
        name: "Card Booking",
        run: booking::card_booking,
    },
    Scenario {
        key: "cod-booking",
        name: "Cash on Delivery Booking",
        run: booking::cod_booking,
    },
    Scenario {
        key: "legacy-seat-param",
        name: "Legacy seatNumber Confirmation Link",
        run: booking::legacy_seat_param,
    },
    Scenario {
        key: "missing-search-params",
        name: "Search Without Parameters",
        run: failures::missing_search_params,
    },
    Scenario {
        key: "no-route-match",
        name: "Search With No Matching Route",
        run: failures::no_route_match,
    },
    Scenario {
        key: "booked-seat-toggle",
        name: "Booked Seat Toggle",
        run: failures::booked_seat_toggle,
    },
    Scenario {
        key: "missing-card-field",
        name: "Card Payment Missing CVV",
        run: failures::missing_card_field,
    },
    Scenario {
        key: "missing-payment-method",
        name: "Payment Without Method",
        run: failures::missing_payment_method,
    },
    Scenario {
        key: "unknown-bus",
        name: "Unknown Bus Id",
        run: failures::unknown_bus,
    },
    Scenario {
        key: "corrupt-booking-log",
        name: "Corrupt Booking Log Recovery",
        run: failures::corrupt_booking_log,
    },
];

pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    let key = name.to_lowercase();
    SCENARIOS.iter().find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS
        .iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}
