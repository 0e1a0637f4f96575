use crate::i18n::tr;
use busbook_core::{Seat, SeatLayout, SeatStatus};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub layout: SeatLayout,
    #[prop_or(4)]
    pub seats_per_row: u16,
    pub on_toggle: Callback<u16>,
}

fn seat_label(number: u16) -> String {
    let number = number.to_string();
    let mut args = BTreeMap::new();
    args.insert("number", number.as_str());
    tr("seats.seat_label", Some(&args))
}

fn render_seat(seat: Seat, on_toggle: &Callback<u16>) -> Html {
    let class = classes!("seat", seat.status.css_class());
    let label = seat_label(seat.number);
    if seat.status == SeatStatus::Booked {
        return html! {
            <button type="button" {class} disabled=true aria-label={label}>
                { seat.number.to_string() }
            </button>
        };
    }
    let onclick = {
        let cb = on_toggle.clone();
        let number = seat.number;
        Callback::from(move |_: MouseEvent| cb.emit(number))
    };
    let pressed = if seat.status == SeatStatus::Selected {
        "true"
    } else {
        "false"
    };
    html! {
        <button type="button" {class} {onclick} aria-label={label} aria-pressed={pressed}>
            { seat.number.to_string() }
        </button>
    }
}

/// Seat map; booked seats are rendered but never emit a toggle.
#[function_component(SeatGrid)]
pub fn seat_grid(p: &Props) -> Html {
    html! {
        <div
            id="seatGrid"
            class="seat-grid"
            role="group"
            aria-label={crate::i18n::t("seats.grid_label")}
        >
            { for p.layout.rows(p.seats_per_row).map(|row| html! {
                <div class="seat-row">
                    { for row.iter().map(|seat| render_seat(*seat, &p.on_toggle)) }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(layout: SeatLayout) -> String {
        let props = Props {
            layout,
            seats_per_row: 4,
            on_toggle: Callback::noop(),
        };
        block_on(LocalServerRenderer::<SeatGrid>::with_props(props).render())
    }

    #[test]
    fn renders_every_seat_in_rows_of_four() {
        let html = render(SeatLayout::standard());
        assert_eq!(html.matches("class=\"seat-row\"").count(), 10);
        assert_eq!(html.matches("seat booked").count(), 4);
        assert_eq!(html.matches("seat available").count(), 36);
    }

    #[test]
    fn selected_seats_are_marked_pressed() {
        let mut layout = SeatLayout::standard();
        layout.toggle(7).unwrap();
        let html = render(layout);
        assert_eq!(html.matches("seat selected").count(), 1);
        assert!(html.contains("aria-pressed=\"true\""));
    }
}
