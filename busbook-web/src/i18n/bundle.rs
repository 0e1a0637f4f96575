use once_cell::sync::Lazy;
use serde_json::Value;

/// Language of the embedded catalog, written to `<html lang>`.
pub const CATALOG_LANG: &str = "en";

const EN_JSON: &str = include_str!("../../i18n/en.json");

static CATALOG: Lazy<Value> = Lazy::new(|| match serde_json::from_str(EN_JSON) {
    Ok(value) => value,
    Err(err) => {
        log::error!("message catalog is not valid JSON: {err}");
        Value::Object(serde_json::Map::new())
    }
});

/// The parsed message catalog.
#[must_use]
pub fn catalog() -> &'static Value {
    &CATALOG
}
