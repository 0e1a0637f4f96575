use crate::i18n::t;
use busbook_core::SearchRequest;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BookNowPageProps {
    pub on_search: Callback<SearchRequest>,
}

/// Route search form.
#[function_component(BookNowPage)]
pub fn book_now_page(props: &BookNowPageProps) -> Html {
    let source = use_state(String::new);
    let destination = use_state(String::new);

    let on_source = {
        let source = source.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                source.set(value);
            }
        })
    };
    let on_destination = {
        let destination = destination.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                destination.set(value);
            }
        })
    };
    let on_submit = {
        let cb = props.on_search.clone();
        let source = source.clone();
        let destination = destination.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(SearchRequest {
                source: source.trim().to_string(),
                destination: destination.trim().to_string(),
            });
        })
    };

    html! {
        <section class="panel book-now">
            <h1>{ t("home.title") }</h1>
            <form id="searchForm" onsubmit={on_submit}>
                <label for="source">{ t("home.source") }</label>
                <input id="source" name="source" type="text" required=true
                    placeholder={t("home.source_placeholder")}
                    value={(*source).clone()} oninput={on_source} />
                <label for="destination">{ t("home.destination") }</label>
                <input id="destination" name="destination" type="text" required=true
                    placeholder={t("home.destination_placeholder")}
                    value={(*destination).clone()} oninput={on_destination} />
                <button type="submit">{ t("home.search") }</button>
            </form>
        </section>
    }
}
