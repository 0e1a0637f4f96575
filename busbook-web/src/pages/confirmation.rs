use crate::i18n::t;
use busbook_core::Confirmation;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmationPageProps {
    pub confirmation: Confirmation,
    #[prop_or_else(|| AttrValue::from("/"))]
    pub home_href: AttrValue,
}

#[function_component(ConfirmationPage)]
pub fn confirmation_page(props: &ConfirmationPageProps) -> Html {
    let c = &props.confirmation;
    html! {
        <section class="panel confirmation" aria-live="polite">
            <h1>{ t("confirmation.title") }</h1>
            <div id="confirmationMessage">
                <p>
                    { "Thank you, " }<strong>{ c.passenger_name.clone() }</strong>
                    { format!(", for booking {} ", c.seat_phrase()) }
                    <strong>{ c.seat_numbers.to_string() }</strong>
                    { " on " }<strong>{ c.bus_name.clone() }</strong>{ "." }
                </p>
                <p>{ t("confirmation.arrival") }</p>
                <p>{ t("confirmation.farewell") }</p>
            </div>
            <a href={props.home_href.clone()}>{ t("confirmation.again") }</a>
        </section>
    }
}
