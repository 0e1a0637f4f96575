//! The four-stage booking flow: search, seat selection, payment, confirmation.
//!
//! Each stage reads the parameters the previous stage carried and, on a
//! successful user action, returns the [`Navigation`] to the next stage. All
//! failures are recoverable and leave the current stage in place.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{BusCatalog, BusRoute};
use crate::constants::{
    PARAM_BUS_NAME, PARAM_DESTINATION, PARAM_PASSENGER_NAME, PARAM_SEAT_NUMBERS,
    PARAM_SEAT_NUMBER_LEGACY, PARAM_SOURCE,
};
use crate::data::BookingData;
use crate::draft::{BookingDraft, SeatNumbers};
use crate::payment::{PaymentError, PaymentField, PaymentForm, validate};
use crate::query::QueryParams;
use crate::seats::{SeatLayout, SeatPlan};
use crate::storage::{BookingLog, KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Search,
    SeatSelection,
    Payment,
    Confirmation,
}

impl Stage {
    pub const ALL: [Self; 4] = [
        Self::Search,
        Self::SeatSelection,
        Self::Payment,
        Self::Confirmation,
    ];

    /// Path segment identifying the stage's page.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::SeatSelection => "seat-selection",
            Self::Payment => "payment",
            Self::Confirmation => "confirmation",
        }
    }

    /// Identify a stage from a page path by its last segment, with or without
    /// an `.html` suffix: `/app/seat-selection`, `seat-selection.html`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let last = path.trim_end_matches('/').rsplit('/').next()?;
        let slug = last.strip_suffix(".html").unwrap_or(last);
        Self::ALL.into_iter().find(|stage| stage.slug() == slug)
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Search => Some(Self::SeatSelection),
            Self::SeatSelection => Some(Self::Payment),
            Self::Payment => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }
}

/// A transition to another stage with the parameters it should receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub stage: Stage,
    pub params: QueryParams,
}

impl Navigation {
    /// Relative link, e.g. `payment?busName=Super%20Bus&seatNumbers=2,7`.
    #[must_use]
    pub fn href(&self) -> String {
        if self.params.is_empty() {
            self.stage.slug().to_string()
        } else {
            format!("{}?{}", self.stage.slug(), self.params.encode())
        }
    }
}

/// Failures surfaced to the user. `Display` is the message shown.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Please use the search form on the Book Now page to find buses.")]
    MissingSearchParams,
    #[error("No buses found for the selected route.")]
    NoRouteMatch,
    #[error("Bus {0} is not in the catalog.")]
    UnknownBusId(u32),
    #[error("{}", .0.alert_message())]
    MissingFormField(SeatFormField),
    #[error("Please select a payment method.")]
    MissingPaymentMethod,
    #[error("{}", missing_field_message(.0))]
    MissingPaymentField(PaymentField),
    #[error("Your booking could not be saved: {0}")]
    Storage(#[from] StorageError),
}

/// Required fields of the seat selection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFormField {
    BusName,
    SeatNumbers,
}

impl SeatFormField {
    /// Query parameter the field is carried under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BusName => PARAM_BUS_NAME,
            Self::SeatNumbers => PARAM_SEAT_NUMBERS,
        }
    }

    #[must_use]
    pub const fn alert_message(self) -> &'static str {
        match self {
            Self::BusName => "Please enter the bus name.",
            Self::SeatNumbers => "Please select at least one seat.",
        }
    }
}

fn missing_field_message(field: &PaymentField) -> &'static str {
    PaymentError::MissingField(*field).alert_message()
}

impl From<PaymentError> for FlowError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::MissingMethod => Self::MissingPaymentMethod,
            PaymentError::MissingField(field) => Self::MissingPaymentField(field),
        }
    }
}

/// Source and destination of a search, both present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub source: String,
    pub destination: String,
}

impl SearchRequest {
    #[must_use]
    pub fn from_query(params: &QueryParams) -> Option<Self> {
        Some(Self {
            source: params.non_empty(PARAM_SOURCE)?.to_string(),
            destination: params.non_empty(PARAM_DESTINATION)?.to_string(),
        })
    }

    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with(PARAM_SOURCE, self.source.as_str())
            .with(PARAM_DESTINATION, self.destination.as_str())
    }
}

/// Values submitted from the seat selection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSelectionForm {
    pub bus_name: String,
    pub seat_numbers: String,
}

/// What the seat selection page renders: form pre-fill plus a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSelectionView {
    pub form: SeatSelectionForm,
    pub layout: SeatLayout,
    pub seats_per_row: u16,
}

/// The confirmation page's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub bus_name: String,
    pub seat_numbers: SeatNumbers,
    pub passenger_name: String,
}

impl Confirmation {
    /// Reads `seatNumbers`, falling back to the single-seat `seatNumber`.
    #[must_use]
    pub fn from_query(params: &QueryParams) -> Self {
        let seats = params
            .non_empty(PARAM_SEAT_NUMBERS)
            .or_else(|| params.get(PARAM_SEAT_NUMBER_LEGACY))
            .unwrap_or_default();
        Self {
            bus_name: params.get(PARAM_BUS_NAME).unwrap_or_default().to_string(),
            seat_numbers: SeatNumbers::new(seats),
            passenger_name: params
                .get(PARAM_PASSENGER_NAME)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// "seat numbers" when more than one seat was carried, else "seat number".
    #[must_use]
    pub fn seat_phrase(&self) -> &'static str {
        if self.seat_numbers.is_plural() {
            "seat numbers"
        } else {
            "seat number"
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Thank you, {}, for booking {} {} on {}.",
            self.passenger_name,
            self.seat_phrase(),
            self.seat_numbers,
            self.bus_name
        )
    }
}

/// Drives the booking stages over a catalog, a seat plan and an injected
/// store that receives the booking log.
#[derive(Debug, Clone)]
pub struct BookingFlow<S> {
    catalog: BusCatalog,
    seat_plan: SeatPlan,
    store: S,
}

impl<S: KeyValueStore> BookingFlow<S> {
    pub const fn new(catalog: BusCatalog, seat_plan: SeatPlan, store: S) -> Self {
        Self {
            catalog,
            seat_plan,
            store,
        }
    }

    #[must_use]
    pub fn from_data(data: &BookingData, store: S) -> Self {
        Self::new(data.catalog(), data.seat_plan.clone(), store)
    }

    pub const fn catalog(&self) -> &BusCatalog {
        &self.catalog
    }

    pub const fn seat_plan(&self) -> &SeatPlan {
        &self.seat_plan
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Routes for the searched pair.
    ///
    /// # Errors
    ///
    /// [`FlowError::MissingSearchParams`] if either endpoint is absent or
    /// empty; [`FlowError::NoRouteMatch`] if nothing serves the pair.
    pub fn search(&self, params: &QueryParams) -> Result<Vec<&BusRoute>, FlowError> {
        let request = SearchRequest::from_query(params).ok_or(FlowError::MissingSearchParams)?;
        let routes = self.catalog.search(&request.source, &request.destination);
        log::debug!(
            "search {} -> {}: {} route(s)",
            request.source,
            request.destination,
            routes.len()
        );
        if routes.is_empty() {
            return Err(FlowError::NoRouteMatch);
        }
        Ok(routes)
    }

    /// Pick a bus from the results and move to seat selection.
    ///
    /// # Errors
    ///
    /// [`FlowError::UnknownBusId`] if the id is not in the catalog.
    pub fn select_bus(&self, bus_id: u32) -> Result<Navigation, FlowError> {
        let route = self
            .catalog
            .find(bus_id)
            .ok_or(FlowError::UnknownBusId(bus_id))?;
        log::debug!("bus {} ({}) selected", route.id, route.name);
        Ok(Navigation {
            stage: Stage::SeatSelection,
            params: BookingDraft::for_route(route).seat_selection_query(),
        })
    }

    /// Pre-fill from carried `busName`/`seatNumbers`. The grid always starts
    /// from the plan's booked seats, never from carried seat numbers.
    #[must_use]
    pub fn seat_selection(&self, params: &QueryParams) -> SeatSelectionView {
        SeatSelectionView {
            form: SeatSelectionForm {
                bus_name: params.get(PARAM_BUS_NAME).unwrap_or_default().to_string(),
                seat_numbers: params
                    .get(PARAM_SEAT_NUMBERS)
                    .unwrap_or_default()
                    .to_string(),
            },
            layout: self.seat_plan.layout(),
            seats_per_row: self.seat_plan.seats_per_row,
        }
    }

    /// Log the selection and move to payment.
    ///
    /// # Errors
    ///
    /// [`FlowError::MissingFormField`] if the bus name or seat numbers are
    /// blank; [`FlowError::Storage`] if the booking log cannot be written.
    pub fn submit_seat_selection(&self, form: &SeatSelectionForm) -> Result<Navigation, FlowError> {
        if form.bus_name.is_empty() {
            return Err(FlowError::MissingFormField(SeatFormField::BusName));
        }
        if form.seat_numbers.is_empty() {
            return Err(FlowError::MissingFormField(SeatFormField::SeatNumbers));
        }
        let draft = BookingDraft {
            bus_name: form.bus_name.clone(),
            seat_numbers: SeatNumbers::new(form.seat_numbers.as_str()),
            ..BookingDraft::default()
        };
        let logged = BookingLog::new(&self.store).append(draft.log_entry())?;
        log::debug!(
            "seats {} on {} logged (entry {logged})",
            draft.seat_numbers,
            draft.bus_name
        );
        Ok(Navigation {
            stage: Stage::Payment,
            params: draft.payment_query(),
        })
    }

    /// The read-only summary shown on the payment page.
    #[must_use]
    pub fn payment_summary(&self, params: &QueryParams) -> BookingDraft {
        BookingDraft::from_query(params)
    }

    /// Validate payment and move to confirmation.
    ///
    /// # Errors
    ///
    /// [`FlowError::MissingPaymentMethod`] or
    /// [`FlowError::MissingPaymentField`] when the form is incomplete.
    pub fn submit_payment(
        &self,
        draft: &BookingDraft,
        form: &PaymentForm,
    ) -> Result<Navigation, FlowError> {
        let method = validate(form)?;
        log::debug!("payment accepted via {:?}", method.kind());
        let draft = draft.clone().with_passenger(method.passenger_name());
        Ok(Navigation {
            stage: Stage::Confirmation,
            params: draft.confirmation_query(),
        })
    }

    #[must_use]
    pub fn confirmation(&self, params: &QueryParams) -> Confirmation {
        Confirmation::from_query(params)
    }
}
