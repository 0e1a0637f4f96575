use busbook_core::{BookingDraft, Confirmation, LoggedInUser, QueryParams};
use std::rc::Rc;
use yew::prelude::*;

use crate::app::handlers;
use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    confirmation::{ConfirmationPage, ConfirmationPageProps},
    home::{BookNowPage, BookNowPageProps},
    login::{LoginPage, LoginPageProps},
    not_found::{NotFound, Props as NotFoundProps},
    payment::{PaymentPage, PaymentPageProps},
    search::{SearchPage, SearchPageProps},
    seat_selection::{SeatSelectionPage, SeatSelectionPageProps},
};
use crate::router::Route;

/// The page for `route` at `path`, built from the carried query.
pub fn render_page<S: busbook_core::KeyValueStore>(
    route: &Route,
    path: &str,
    query: &QueryParams,
    store: S,
) -> Html {
    let flow = handlers::booking_flow(store);
    match route {
        Route::Home => {
            let props = BookNowPageProps {
                on_search: handlers::build_search(),
            };
            html! { <BookNowPage ..props /> }
        }
        Route::Search => {
            let (routes, message) = match flow.search(query) {
                Ok(routes) => (routes.into_iter().cloned().collect(), None),
                Err(err) => (Vec::new(), Some(AttrValue::from(err.to_string()))),
            };
            let props = SearchPageProps {
                routes: Rc::new(routes),
                message,
                on_book: handlers::build_book_bus(),
            };
            html! { <SearchPage ..props /> }
        }
        Route::SeatSelection => {
            let view = flow.seat_selection(query);
            let props = SeatSelectionPageProps {
                bus_name: view.form.bus_name.into(),
                seat_numbers: view.form.seat_numbers.into(),
                layout: view.layout,
                seats_per_row: view.seats_per_row,
                on_submit: handlers::build_submit_seats(),
            };
            html! { <SeatSelectionPage ..props /> }
        }
        Route::Payment => {
            let draft: BookingDraft = flow.payment_summary(query);
            let props = PaymentPageProps {
                bus_name: draft.bus_name.clone().into(),
                seat_numbers: draft.seat_numbers.to_string().into(),
                on_pay: handlers::build_submit_payment(draft),
            };
            html! { <PaymentPage ..props /> }
        }
        Route::Confirmation => {
            let confirmation: Confirmation = flow.confirmation(query);
            let props = ConfirmationPageProps {
                confirmation,
                home_href: crate::paths::page_url("").into(),
            };
            html! { <ConfirmationPage ..props /> }
        }
        Route::Login => {
            let props = LoginPageProps {
                on_login: handlers::build_log_in(),
            };
            html! { <LoginPage ..props /> }
        }
        Route::NotFound => {
            let props = NotFoundProps {
                path: Some(AttrValue::from(path.to_string())),
                on_go_home: handlers::build_go_home(),
            };
            html! { <NotFound ..props /> }
        }
    }
}

/// Header, page and footer.
pub fn render_shell(user: Option<LoggedInUser>, page: Html) -> Html {
    html! {
        <>
            <Header {user} on_logout={handlers::build_log_out()} />
            <main id="main" role="main">
                { page }
            </main>
            <Footer />
        </>
    }
}
