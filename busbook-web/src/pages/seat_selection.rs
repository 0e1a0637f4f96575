use crate::components::seat_grid::SeatGrid;
use crate::i18n::t;
use busbook_core::{SeatError, SeatLayout, SeatSelectionForm};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SeatSelectionPageProps {
    #[prop_or_default]
    pub bus_name: AttrValue,
    /// Pre-fill for the seat numbers field only; the grid starts from `layout`.
    #[prop_or_default]
    pub seat_numbers: AttrValue,
    pub layout: SeatLayout,
    #[prop_or(4)]
    pub seats_per_row: u16,
    pub on_submit: Callback<SeatSelectionForm>,
}

/// Toggle `number` on a copy of `layout` and return it with the text the
/// seat numbers field should show afterwards.
fn toggle_seat(layout: &SeatLayout, number: u16) -> Result<(SeatLayout, String), SeatError> {
    let mut next = layout.clone();
    next.toggle(number)?;
    let label = next.selection_label();
    Ok((next, label))
}

#[function_component(SeatSelectionPage)]
pub fn seat_selection_page(props: &SeatSelectionPageProps) -> Html {
    let layout = {
        let initial = props.layout.clone();
        use_state(move || initial)
    };
    let bus_name = {
        let initial = props.bus_name.to_string();
        use_state(move || initial)
    };
    let seat_numbers = {
        let initial = props.seat_numbers.to_string();
        use_state(move || initial)
    };

    let on_toggle = {
        let layout = layout.clone();
        let seat_numbers = seat_numbers.clone();
        Callback::from(move |number: u16| match toggle_seat(&layout, number) {
            Ok((next, label)) => {
                seat_numbers.set(label);
                layout.set(next);
            }
            Err(err) => log::debug!("{err}"),
        })
    };
    let on_bus_name = {
        let bus_name = bus_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                bus_name.set(value);
            }
        })
    };
    let on_seat_numbers = {
        let seat_numbers = seat_numbers.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::dom::event_value(&e) {
                seat_numbers.set(value);
            }
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let bus_name = bus_name.clone();
        let seat_numbers = seat_numbers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(SeatSelectionForm {
                bus_name: (*bus_name).clone(),
                seat_numbers: (*seat_numbers).clone(),
            });
        })
    };

    html! {
        <section class="panel seat-selection">
            <h1>{ t("seats.title") }</h1>
            <SeatGrid layout={(*layout).clone()} seats_per_row={props.seats_per_row} {on_toggle} />
            <ul class="seat-legend">
                <li class="available">{ t("seats.legend.available") }</li>
                <li class="booked">{ t("seats.legend.booked") }</li>
                <li class="selected">{ t("seats.legend.selected") }</li>
            </ul>
            <form id="seatSelectionForm" onsubmit={on_submit}>
                <label for="busName">{ t("seats.bus_name") }</label>
                <input id="busName" name="busName" type="text" required=true
                    value={(*bus_name).clone()} oninput={on_bus_name} />
                <label for="seatNumbers">{ t("seats.seat_numbers") }</label>
                <input id="seatNumbers" name="seatNumbers" type="text" required=true
                    value={(*seat_numbers).clone()} oninput={on_seat_numbers} />
                <button type="submit">{ t("seats.submit") }</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_clicks_rewrite_the_seat_numbers_field() {
        let layout = SeatLayout::standard();
        let (layout, label) = toggle_seat(&layout, 7).expect("seat 7 is free");
        assert_eq!(label, "7");
        let (layout, label) = toggle_seat(&layout, 2).expect("seat 2 is free");
        assert_eq!(label, "2,7");
        let (_, label) = toggle_seat(&layout, 7).expect("seat 7 is selected");
        assert_eq!(label, "2");
    }

    #[test]
    fn booked_seat_leaves_field_and_grid_alone() {
        let layout = SeatLayout::standard();
        assert_eq!(toggle_seat(&layout, 3), Err(SeatError::Booked(3)));
        assert!(layout.selection().is_empty());
    }

    #[test]
    fn deselecting_the_last_seat_clears_the_field() {
        let (layout, _) = toggle_seat(&SeatLayout::standard(), 4).expect("seat 4 is free");
        let (layout, label) = toggle_seat(&layout, 4).expect("seat 4 is selected");
        assert_eq!(label, "");
        assert!(layout.selection().is_empty());
    }
}
