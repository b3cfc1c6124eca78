//! WiFi credential payload parser
//!
//! Recognizes the `WIFI:` micro-format written by most QR generators:
//!
//! ```text
//! WIFI:S:<ssid>;T:<type>;P:<password>;H:<hidden>;;
//! ```
//!
//! Keys are single letters. Inside a key or value a backslash makes the next
//! character literal, so `\;`, `\:` and `\\` can appear in an SSID or
//! password. Fields may come in any order, unknown keys are skipped, and the
//! closing `;;` is optional.
//!
//! The scan is a two-state automaton (key mode / value mode) with one pending
//! key and one accumulation buffer. A plain split on `;` and `:` cannot honor
//! the escapes, so no regular expressions here.

use crate::error::ParseError;
use crate::models::CredentialRecord;

/// Prefix every WiFi payload starts with
pub const WIFI_PREFIX: &str = "WIFI:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Accumulating a field name, up to `:`
    Key,
    /// Accumulating a field value, up to `;`
    Value,
}

/// Parse a decoded QR payload into credentials.
///
/// # Errors
/// * [`ParseError::MissingPrefix`] if `payload` does not start with `WIFI:`
/// * [`ParseError::EmptySsid`] if no non-empty `S` field was committed
///
/// # Example
/// ```
/// use wifi_qr::parser::parse_wifi_payload;
///
/// let record = parse_wifi_payload(r"WIFI:S:My\;Net;T:WPA;P:p\\ass;;").unwrap();
/// assert_eq!(record.ssid, "My;Net");
/// assert_eq!(record.password, r"p\ass");
/// assert_eq!(record.network_type, "WPA");
/// ```
pub fn parse_wifi_payload(payload: &str) -> Result<CredentialRecord, ParseError> {
    let body = payload
        .strip_prefix(WIFI_PREFIX)
        .ok_or(ParseError::MissingPrefix)?;

    let mut record = CredentialRecord::new(String::new());
    let mut mode = Mode::Key;
    let mut key = String::new();
    let mut buffer = String::new();
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            // A trailing backslash escapes nothing and ends the scan
            match chars.next() {
                Some(escaped) => {
                    buffer.push(escaped);
                    continue;
                }
                None => break,
            }
        }

        match (mode, c) {
            (Mode::Key, ':') => {
                key = std::mem::take(&mut buffer);
                mode = Mode::Value;
            }
            (Mode::Key, ';') => buffer.clear(),
            (Mode::Value, ';') => {
                let value = std::mem::take(&mut buffer);
                assign_field(&mut record, &key, value);
                key.clear();
                mode = Mode::Key;
            }
            (_, other) => buffer.push(other),
        }
    }

    if record.ssid.is_empty() {
        return Err(ParseError::EmptySsid);
    }
    Ok(record)
}

fn assign_field(record: &mut CredentialRecord, key: &str, value: String) {
    match key {
        "S" => record.ssid = value,
        "P" => record.password = value,
        "T" => record.network_type = value,
        "H" => record.hidden = value.eq_ignore_ascii_case("true"),
        _ => {}
    }
}

/// True if `payload` parses into a usable credential record
pub fn is_wifi_payload(payload: &str) -> bool {
    parse_wifi_payload(payload).is_ok()
}
