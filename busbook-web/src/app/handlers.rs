//! User actions mapped onto the booking flow.
//!
//! Each handler returns an [`Effect`] instead of touching the page so the
//! decisions can be tested without a browser; [`Effect::apply`] performs it.
use busbook_core::{
    BookingData, BookingDraft, BookingFlow, KeyValueStore, Navigation, PaymentForm,
    SearchRequest, SeatSelectionForm, Stage, session,
};
use once_cell::sync::Lazy;
use yew::Callback;

use crate::i18n::t;
use crate::paths;
use crate::storage::WebStorage;

static BOOKING_DATA: Lazy<BookingData> = Lazy::new(BookingData::load_from_static);

/// Routes and seat plan shipped with the app.
#[must_use]
pub fn booking_data() -> &'static BookingData {
    &BOOKING_DATA
}

/// A flow over the shipped data and `store`.
#[must_use]
pub fn booking_flow<S: KeyValueStore>(store: S) -> BookingFlow<S> {
    BookingFlow::from_data(booking_data(), store)
}

/// What the page should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible.
    Stay,
    /// Blocking alert; the page stays put.
    Alert(String),
    /// Load another page.
    Navigate(String),
    /// Alert, then load another page once it is dismissed.
    AlertThenNavigate { message: String, url: String },
}

impl Effect {
    fn to(navigation: &Navigation) -> Self {
        Self::Navigate(paths::page_url(&navigation.href()))
    }

    pub fn apply(self) {
        match self {
            Self::Stay => {}
            Self::Alert(message) => crate::dom::alert(&message),
            Self::Navigate(url) => crate::dom::navigate(&url),
            Self::AlertThenNavigate { message, url } => {
                crate::dom::alert(&message);
                crate::dom::navigate(&url);
            }
        }
    }
}

fn home_url() -> String {
    paths::page_url("")
}

pub fn search(request: &SearchRequest) -> Effect {
    Effect::to(&Navigation {
        stage: Stage::Search,
        params: request.to_query(),
    })
}

/// Unknown ids are ignored; the results list only offers known buses.
pub fn book_bus<S: KeyValueStore>(flow: &BookingFlow<S>, bus_id: u32) -> Effect {
    match flow.select_bus(bus_id) {
        Ok(navigation) => Effect::to(&navigation),
        Err(err) => {
            log::warn!("{err}");
            Effect::Stay
        }
    }
}

pub fn submit_seats<S: KeyValueStore>(flow: &BookingFlow<S>, form: &SeatSelectionForm) -> Effect {
    match flow.submit_seat_selection(form) {
        Ok(navigation) => Effect::to(&navigation),
        Err(err) => {
            log::warn!("seat selection rejected: {err}");
            Effect::Alert(err.to_string())
        }
    }
}

pub fn submit_payment<S: KeyValueStore>(
    flow: &BookingFlow<S>,
    draft: &BookingDraft,
    form: &PaymentForm,
) -> Effect {
    match flow.submit_payment(draft, form) {
        Ok(navigation) => Effect::AlertThenNavigate {
            message: t("payment.success"),
            url: paths::page_url(&navigation.href()),
        },
        Err(err) => Effect::Alert(err.to_string()),
    }
}

/// A blank name is ignored.
pub fn log_in<S: KeyValueStore>(store: &S, username: &str) -> Effect {
    match session::log_in(store, username) {
        Ok(Some(user)) => {
            log::info!("signed in as {}", user.username);
            Effect::Navigate(home_url())
        }
        Ok(None) => Effect::Stay,
        Err(err) => Effect::Alert(err.to_string()),
    }
}

pub fn log_out<S: KeyValueStore>(store: &S) -> Effect {
    if let Err(err) = session::log_out(store) {
        log::warn!("logout failed: {err}");
    }
    Effect::Navigate(home_url())
}

pub fn build_search() -> Callback<SearchRequest> {
    Callback::from(|request: SearchRequest| search(&request).apply())
}

pub fn build_book_bus() -> Callback<u32> {
    Callback::from(|bus_id| book_bus(&booking_flow(WebStorage), bus_id).apply())
}

pub fn build_submit_seats() -> Callback<SeatSelectionForm> {
    Callback::from(|form: SeatSelectionForm| {
        submit_seats(&booking_flow(WebStorage), &form).apply();
    })
}

pub fn build_submit_payment(draft: BookingDraft) -> Callback<PaymentForm> {
    Callback::from(move |form: PaymentForm| {
        submit_payment(&booking_flow(WebStorage), &draft, &form).apply();
    })
}

pub fn build_log_in() -> Callback<String> {
    Callback::from(|username: String| log_in(&WebStorage, &username).apply())
}

pub fn build_log_out() -> Callback<()> {
    Callback::from(|()| log_out(&WebStorage).apply())
}

pub fn build_go_home() -> Callback<()> {
    Callback::from(|()| Effect::Navigate(home_url()).apply())
}
