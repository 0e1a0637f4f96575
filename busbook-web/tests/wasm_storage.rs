#![cfg(target_arch = "wasm32")]

use busbook_core::constants::{BOOKINGS_KEY, LOGGED_IN_USER_KEY};
use busbook_core::{BookingLog, KeyValueStore, SeatSelectionForm, session};
use busbook_web::app::handlers::booking_flow;
use busbook_web::dom;
use busbook_web::storage::WebStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    let storage = dom::local_storage().expect("localStorage");
    storage.clear().expect("clear storage");
}

#[wasm_bindgen_test]
fn seat_submission_appends_to_local_storage() {
    reset();
    let flow = booking_flow(WebStorage);
    let form = SeatSelectionForm {
        bus_name: "Super Bus".into(),
        seat_numbers: "2,7".into(),
    };
    flow.submit_seat_selection(&form).expect("first submit");
    flow.submit_seat_selection(&form).expect("second submit");

    let raw = WebStorage.get(BOOKINGS_KEY).unwrap().expect("log written");
    assert_eq!(
        raw,
        concat!(
            r#"[{"busName":"Super Bus","seatNumbers":"2,7"},"#,
            r#"{"busName":"Super Bus","seatNumbers":"2,7"}]"#
        )
    );
    assert_eq!(BookingLog::new(WebStorage).entries().unwrap().len(), 2);
}

#[wasm_bindgen_test]
fn corrupt_log_is_replaced_on_append() {
    reset();
    WebStorage.set(BOOKINGS_KEY, "not json").unwrap();
    let form = SeatSelectionForm {
        bus_name: "Night Rider".into(),
        seat_numbers: "12".into(),
    };
    booking_flow(WebStorage)
        .submit_seat_selection(&form)
        .expect("submit succeeds");
    assert_eq!(BookingLog::new(WebStorage).entries().unwrap().len(), 1);
}

#[wasm_bindgen_test]
fn login_state_lives_in_local_storage() {
    reset();
    assert!(!session::is_logged_in(&WebStorage));
    session::log_in(&WebStorage, "priya").unwrap();
    let raw = dom::local_storage()
        .unwrap()
        .get_item(LOGGED_IN_USER_KEY)
        .unwrap()
        .expect("user stored");
    assert_eq!(raw, r#"{"username":"priya"}"#);
    session::log_out(&WebStorage).unwrap();
    assert!(!session::is_logged_in(&WebStorage));
}

#[wasm_bindgen_test]
fn document_language_is_set_on_the_root_element() {
    dom::set_document_lang("en");
    let lang = dom::window()
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute("lang"));
    assert_eq!(lang.as_deref(), Some("en"));
}
