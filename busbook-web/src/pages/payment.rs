use crate::i18n::t;
use busbook_core::{PaymentField, PaymentForm, PaymentMethodKind};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaymentPageProps {
    #[prop_or_default]
    pub bus_name: AttrValue,
    #[prop_or_default]
    pub seat_numbers: AttrValue,
    pub on_pay: Callback<PaymentForm>,
}

const fn method_label_key(kind: PaymentMethodKind) -> &'static str {
    match kind {
        PaymentMethodKind::Card => "payment.card",
        PaymentMethodKind::Upi => "payment.upi",
        PaymentMethodKind::CashOnDelivery => "payment.cod",
    }
}

const fn field_label_key(field: PaymentField) -> &'static str {
    match field {
        PaymentField::CardName => "payment.card_name",
        PaymentField::CardNumber => "payment.card_number",
        PaymentField::ExpiryDate => "payment.expiry_date",
        PaymentField::Cvv => "payment.cvv",
        PaymentField::UpiId => "payment.upi_id",
    }
}

fn field_input(form: &UseStateHandle<PaymentForm>, field: PaymentField) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                let mut next = (*form).clone();
                next.set_field(field, value);
                form.set(next);
            }
        })
    };
    let input_type = if field == PaymentField::Cvv {
        "password"
    } else {
        "text"
    };
    html! {
        <div class="form-field">
            <label for={field.name()}>{ t(field_label_key(field)) }</label>
            <input id={field.name()} name={field.name()} type={input_type}
                value={form.field(field).to_string()} {oninput} />
        </div>
    }
}

/// Booking summary plus a payment form whose fields follow the chosen method.
#[function_component(PaymentPage)]
pub fn payment_page(props: &PaymentPageProps) -> Html {
    let form = use_state(PaymentForm::default);
    let method = form.method();
    let show_card = method.is_some_and(PaymentMethodKind::shows_card_details);
    let show_upi = method.is_some_and(PaymentMethodKind::shows_upi_details);

    let on_method = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = crate::dom::event_value(&e) {
                let mut next = (*form).clone();
                next.payment_method = value;
                form.set(next);
            }
        })
    };
    let on_submit = {
        let cb = props.on_pay.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*form).clone());
        })
    };

    html! {
        <section class="panel payment">
            <h1>{ t("payment.title") }</h1>
            <div id="bookingSummary" class="booking-summary">
                <h2>{ t("payment.summary") }</h2>
                <p><strong>{ t("payment.bus_name") }</strong>{ " " }{ props.bus_name.clone() }</p>
                <p>
                    <strong>{ t("payment.seat_numbers") }</strong>
                    { " " }
                    { props.seat_numbers.clone() }
                </p>
            </div>
            <form id="paymentForm" onsubmit={on_submit}>
                <label for="paymentMethod">{ t("payment.method") }</label>
                <select id="paymentMethod" name="paymentMethod" onchange={on_method}>
                    <option value="" selected={method.is_none()}>{ t("payment.choose") }</option>
                    { for PaymentMethodKind::ALL.into_iter().map(|kind| html! {
                        <option value={kind.form_value()} selected={method == Some(kind)}>
                            { t(method_label_key(kind)) }
                        </option>
                    }) }
                </select>
                <div id="cardDetails" hidden={!show_card}>
                    { for PaymentMethodKind::Card
                        .required_fields()
                        .iter()
                        .map(|field| field_input(&form, *field)) }
                </div>
                <div id="upiDetails" hidden={!show_upi}>
                    { field_input(&form, PaymentField::UpiId) }
                </div>
                <button type="submit">{ t("payment.pay") }</button>
            </form>
        </section>
    }
}
