use crate::i18n::bundle::catalog;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Look up a message by dotted key.
///
/// Unknown keys render as the key itself so gaps are visible on the page.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Look up a message and substitute `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    get_nested_value(catalog(), key)
        .and_then(|value| render_value(value, args))
        .unwrap_or_else(|| key.to_string())
}
