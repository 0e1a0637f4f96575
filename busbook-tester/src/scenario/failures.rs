//! Recoverable failures: each must leave the user on the same stage with
//! nothing extra written to storage.
use anyhow::{Result, bail, ensure};
use busbook_core::constants::BOOKINGS_KEY;
use busbook_core::{
    FlowError, KeyValueStore, PaymentField, PaymentForm, PaymentMethodKind, QueryParams, SeatError,
    SeatFormField, SeatSelectionForm,
};

use super::ScenarioCtx;

fn expect_flow_error<T: std::fmt::Debug>(
    outcome: Result<T, FlowError>,
    matches: impl Fn(&FlowError) -> bool,
    expected_message: &str,
) -> Result<()> {
    match outcome {
        Ok(value) => bail!("expected {expected_message:?}, got {value:?}"),
        Err(err) if matches(&err) => {
            let message = err.to_string();
            ensure!(message == expected_message, "message read {message:?}");
            Ok(())
        }
        Err(err) => bail!("wrong error: {err}"),
    }
}

fn ensure_log_untouched(ctx: &ScenarioCtx) -> Result<()> {
    ensure!(
        ctx.store.get(BOOKINGS_KEY)?.is_none(),
        "booking log was written"
    );
    Ok(())
}

pub fn missing_search_params(ctx: &ScenarioCtx) -> Result<()> {
    let message = "Please use the search form on the Book Now page to find buses.";
    for query in ["", "source=kolkata", "destination=puri", "source=&destination=puri"] {
        expect_flow_error(
            ctx.flow.search(&QueryParams::decode(query)),
            |err| matches!(err, FlowError::MissingSearchParams),
            message,
        )?;
    }
    Ok(())
}

pub fn no_route_match(ctx: &ScenarioCtx) -> Result<()> {
    for query in [
        "source=delhi&destination=puri",
        "source=puri&destination=kolkata",
        "source=kol&destination=puri",
    ] {
        expect_flow_error(
            ctx.flow.search(&QueryParams::decode(query)),
            |err| matches!(err, FlowError::NoRouteMatch),
            "No buses found for the selected route.",
        )?;
    }
    Ok(())
}

pub fn booked_seat_toggle(ctx: &ScenarioCtx) -> Result<()> {
    let mut view = ctx.flow.seat_selection(&QueryParams::decode("busName=Super%20Bus"));
    for seat in ctx.flow.seat_plan().booked_seats.iter().copied() {
        ensure!(
            view.layout.toggle(seat) == Err(SeatError::Booked(seat)),
            "booked seat {seat} was selectable"
        );
    }
    view.layout.toggle(4)?;
    view.layout.toggle(4)?;
    ensure!(
        view.layout.selection_label().is_empty(),
        "toggling twice left {:?} selected",
        view.layout.selection_label()
    );

    let blank = SeatSelectionForm {
        bus_name: view.form.bus_name,
        seat_numbers: String::new(),
    };
    expect_flow_error(
        ctx.flow.submit_seat_selection(&blank),
        |err| matches!(err, FlowError::MissingFormField(SeatFormField::SeatNumbers)),
        "Please select at least one seat.",
    )?;
    ensure_log_untouched(ctx)
}

pub fn missing_card_field(ctx: &ScenarioCtx) -> Result<()> {
    let draft = ctx
        .flow
        .payment_summary(&QueryParams::decode("busName=Super%20Bus&seatNumbers=2,7"));
    let card = PaymentForm {
        card_name: "Asha Rao".into(),
        card_number: "4111111111111111".into(),
        expiry_date: "01/30".into(),
        ..PaymentForm::with_method(PaymentMethodKind::Card)
    };
    expect_flow_error(
        ctx.flow.submit_payment(&draft, &card),
        |err| matches!(err, FlowError::MissingPaymentField(PaymentField::Cvv)),
        "Please fill in all card payment details.",
    )?;
    expect_flow_error(
        ctx.flow
            .submit_payment(&draft, &PaymentForm::with_method(PaymentMethodKind::Upi)),
        |err| matches!(err, FlowError::MissingPaymentField(PaymentField::UpiId)),
        "Please enter your UPI ID.",
    )?;
    ensure_log_untouched(ctx)
}

pub fn missing_payment_method(ctx: &ScenarioCtx) -> Result<()> {
    let draft = ctx
        .flow
        .payment_summary(&QueryParams::decode("busName=Super%20Bus&seatNumbers=2"));
    let unknown = PaymentForm {
        payment_method: "cheque".into(),
        ..PaymentForm::default()
    };
    for form in [PaymentForm::default(), unknown] {
        expect_flow_error(
            ctx.flow.submit_payment(&draft, &form),
            |err| matches!(err, FlowError::MissingPaymentMethod),
            "Please select a payment method.",
        )?;
    }
    ensure_log_untouched(ctx)
}

pub fn unknown_bus(ctx: &ScenarioCtx) -> Result<()> {
    for bus_id in [0, 99] {
        expect_flow_error(
            ctx.flow.select_bus(bus_id),
            |err| matches!(err, FlowError::UnknownBusId(id) if *id == bus_id),
            &format!("Bus {bus_id} is not in the catalog."),
        )?;
    }
    Ok(())
}

pub fn corrupt_booking_log(ctx: &ScenarioCtx) -> Result<()> {
    ctx.store.set(BOOKINGS_KEY, "{not json")?;
    let form = SeatSelectionForm {
        bus_name: "Night Rider".into(),
        seat_numbers: "12".into(),
    };
    ctx.flow.submit_seat_selection(&form)?;
    let log = ctx.log_entries()?;
    ensure!(
        log.len() == 1 && log[0].seat_numbers == "12",
        "log after recovery: {log:?}"
    );
    Ok(())
}
