//! Query-string codec for carried booking state.
//!
//! Values are percent-encoded on write with one exception: `,` is left raw so
//! comma-joined seat lists (`2,7`) survive on the wire exactly as consumers
//! split them. Every value is percent-decoded on read, which leaves such lists
//! untouched.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in query keys and values.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',');

/// Percent-encode a single key or value.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT).to_string()
}

/// Decode a single key or value. `+` is read as a space; invalid UTF-8 is
/// replaced rather than rejected.
#[must_use]
pub fn decode_component(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Ordered key/value parameters carried between pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a query string, with or without its leading `?`.
    ///
    /// Pairs are split on `&` and then on the first `=`. A pair without `=`
    /// gets an empty value; a pair with an empty key is dropped. Repeated keys
    /// keep the last value.
    #[must_use]
    pub fn decode(query: &str) -> Self {
        let mut params = Self::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            if key.is_empty() {
                continue;
            }
            params.set(key, decode_component(value));
        }
        params
    }

    /// Serialize to `key=value&...` without a leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`QueryParams::get`], but an empty value counts as absent.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Insert or replace `key`, keeping the original position on replace.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_roundtrip() {
        let params = QueryParams::new().with("busName", "A & B");
        let encoded = params.encode();
        assert_eq!(encoded, "busName=A%20%26%20B");
        assert_eq!(QueryParams::decode(&encoded).get("busName"), Some("A & B"));
    }

    #[test]
    fn seat_lists_keep_raw_commas() {
        let params = QueryParams::new()
            .with("busName", "Super Bus")
            .with("seatNumbers", "2,7");
        assert_eq!(params.encode(), "busName=Super%20Bus&seatNumbers=2,7");
    }

    #[test]
    fn decode_tolerates_missing_values_and_drops_empty_keys() {
        let params = QueryParams::decode("?source=kolkata&destination&=orphan&&");
        assert_eq!(params.get("source"), Some("kolkata"));
        assert_eq!(params.get("destination"), Some(""));
        assert_eq!(params.non_empty("destination"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn decode_reads_plus_as_space_and_splits_on_first_equals() {
        let params = QueryParams::decode("busName=Super+Bus&upi=a%2Bb%3Dc&expr=x=y");
        assert_eq!(params.get("busName"), Some("Super Bus"));
        assert_eq!(params.get("upi"), Some("a+b=c"));
        assert_eq!(params.get("expr"), Some("x=y"));
    }

    #[test]
    fn set_replaces_in_place_and_later_duplicates_win() {
        let params = QueryParams::decode("a=1&b=2&a=3");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(params.get("a"), Some("3"));
    }

    #[test]
    fn empty_query_decodes_to_nothing() {
        assert!(QueryParams::decode("").is_empty());
        assert!(QueryParams::decode("?").is_empty());
        assert_eq!(QueryParams::new().encode(), "");
    }
}
