use anyhow::{Result, ensure};
use busbook_core::constants::PARAM_BUS_NAME;
use busbook_core::{
    Confirmation, PaymentForm, PaymentMethodKind, QueryParams, SeatSelectionForm, Stage,
};

use super::ScenarioCtx;

/// Search, pick the `pick`-th result, select `seats` on the grid and pay.
fn book(
    ctx: &ScenarioCtx,
    pick: usize,
    seats: &[u16],
    payment: &PaymentForm,
) -> Result<Confirmation> {
    let search = QueryParams::decode("source=Kolkata&destination=Puri");
    let results = ctx.flow.search(&search)?;
    ensure!(results.len() == 3, "expected 3 routes, found {}", results.len());
    let bus = results
        .get(pick)
        .ok_or_else(|| anyhow::anyhow!("no result at position {pick}"))?;
    let bus_name = bus.name.clone();

    let (stage, params) = ctx.arrive(&ctx.flow.select_bus(bus.id)?.href())?;
    ensure!(stage == Stage::SeatSelection, "landed on {stage:?}");
    ensure!(
        params.get(PARAM_BUS_NAME) == Some(bus_name.as_str()),
        "bus name not carried: {:?}",
        params.get(PARAM_BUS_NAME)
    );

    let mut view = ctx.flow.seat_selection(&params);
    for seat in seats {
        view.layout.toggle(*seat)?;
    }
    let form = SeatSelectionForm {
        bus_name: view.form.bus_name,
        seat_numbers: view.layout.selection_label(),
    };
    let (stage, params) = ctx.arrive(&ctx.flow.submit_seat_selection(&form)?.href())?;
    ensure!(stage == Stage::Payment, "landed on {stage:?}");

    let draft = ctx.flow.payment_summary(&params);
    ensure!(draft.bus_name == bus_name, "summary shows {}", draft.bus_name);
    let (stage, params) = ctx.arrive(&ctx.flow.submit_payment(&draft, payment)?.href())?;
    ensure!(stage == Stage::Confirmation, "landed on {stage:?}");
    Ok(ctx.flow.confirmation(&params))
}

fn expect_message(confirmation: &Confirmation, expected: &str) -> Result<()> {
    let message = confirmation.message();
    ensure!(message == expected, "confirmation read {message:?}");
    Ok(())
}

pub fn smoke(ctx: &ScenarioCtx) -> Result<()> {
    let confirmation = book(
        ctx,
        0,
        &[1],
        &PaymentForm::with_method(PaymentMethodKind::CashOnDelivery),
    )?;
    ensure!(!confirmation.bus_name.is_empty(), "confirmation lost the bus");
    ensure!(ctx.log_entries()?.len() == 1, "seat selection was not logged");
    Ok(())
}

pub fn upi_booking(ctx: &ScenarioCtx) -> Result<()> {
    let payment = PaymentForm {
        upi_id: "x@bank".into(),
        ..PaymentForm::with_method(PaymentMethodKind::Upi)
    };
    let confirmation = book(ctx, 1, &[7, 2], &payment)?;
    expect_message(
        &confirmation,
        "Thank you, x@bank, for booking seat numbers 2,7 on Super Bus.",
    )?;
    let log = ctx.log_entries()?;
    ensure!(
        log.len() == 1 && log[0].bus_name == "Super Bus" && log[0].seat_numbers == "2,7",
        "unexpected log {log:?}"
    );
    Ok(())
}

pub fn card_booking(ctx: &ScenarioCtx) -> Result<()> {
    let payment = PaymentForm {
        card_name: "Asha Rao".into(),
        card_number: "4111111111111111".into(),
        expiry_date: "01/30".into(),
        cvv: "123".into(),
        ..PaymentForm::with_method(PaymentMethodKind::Card)
    };
    let confirmation = book(ctx, 0, &[10, 11, 12], &payment)?;
    expect_message(
        &confirmation,
        "Thank you, Asha Rao, for booking seat numbers 10,11,12 on Express Line.",
    )
}

pub fn cod_booking(ctx: &ScenarioCtx) -> Result<()> {
    let confirmation = book(
        ctx,
        2,
        &[12],
        &PaymentForm::with_method(PaymentMethodKind::CashOnDelivery),
    )?;
    expect_message(
        &confirmation,
        "Thank you, Cash on Delivery, for booking seat number 12 on Night Rider.",
    )
}

pub fn legacy_seat_param(ctx: &ScenarioCtx) -> Result<()> {
    let (stage, params) = ctx.arrive(
        "confirmation.html?busName=Night%20Rider&seatNumber=11&passengerName=Cash%20on%20Delivery",
    )?;
    ensure!(stage == Stage::Confirmation, "landed on {stage:?}");
    expect_message(
        &ctx.flow.confirmation(&params),
        "Thank you, Cash on Delivery, for booking seat number 11 on Night Rider.",
    )
}
