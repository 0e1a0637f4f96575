use crate::i18n::{fmt_price, t, tr};
use busbook_core::BusRoute;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SearchPageProps {
    #[prop_or_default]
    pub routes: Rc<Vec<BusRoute>>,
    /// Shown instead of results when the search could not run or found nothing.
    #[prop_or_default]
    pub message: Option<AttrValue>,
    pub on_book: Callback<u32>,
}

fn render_route(route: &BusRoute, on_book: &Callback<u32>) -> Html {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("source", route.source.as_str());
    endpoints.insert("destination", route.destination.as_str());
    let mut departure = BTreeMap::new();
    departure.insert("time", route.departure_time.as_str());
    let price_label = fmt_price(route.price);
    let mut price = BTreeMap::new();
    price.insert("price", price_label.as_str());

    let book = {
        let cb = on_book.clone();
        let id = route.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    html! {
        <div class="bus-item" data-bus-id={route.id.to_string()}>
            <h3>{ route.name.clone() }</h3>
            <p>{ tr("search.from_to", Some(&endpoints)) }</p>
            <p>{ tr("search.departure", Some(&departure)) }</p>
            <p>{ tr("search.price", Some(&price)) }</p>
            <button type="button" onclick={book}>{ t("search.book_now") }</button>
        </div>
    }
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let body = props.message.as_ref().map_or_else(
        || {
            html! {
                <>{ for props.routes.iter().map(|route| render_route(route, &props.on_book)) }</>
            }
        },
        |message| html! { <p>{ message.clone() }</p> },
    );

    html! {
        <section class="panel search-results">
            <h1>{ t("search.title") }</h1>
            <div id="resultsContainer" aria-live="polite">{ body }</div>
        </section>
    }
}
