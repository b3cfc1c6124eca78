use serde::{Deserialize, Serialize};

/// Network type used when a payload carries no `T:` field
pub const DEFAULT_NETWORK_TYPE: &str = "nopass";

/// WiFi network parameters recovered from a QR payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Network name, never empty in a returned record
    pub ssid: String,
    /// Passphrase, empty for open networks
    pub password: String,
    /// Security type as written in the payload (`WPA`, `WEP`, `nopass`, ...)
    pub network_type: String,
    /// Whether the network hides its SSID
    pub hidden: bool,
}

impl CredentialRecord {
    /// Record with the given SSID and every other field at its default
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: String::new(),
            network_type: DEFAULT_NETWORK_TYPE.to_string(),
            hidden: false,
        }
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the network type
    pub fn with_network_type(mut self, network_type: impl Into<String>) -> Self {
        self.network_type = network_type.into();
        self
    }

    /// Set the hidden flag
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Render as a `WIFI:` payload.
    ///
    /// Special characters are backslash-escaped so that
    /// [`parse_wifi_payload`](crate::parser::parse_wifi_payload) recovers the record.
    pub fn to_payload(&self) -> String {
        let mut out = String::with_capacity(16 + self.ssid.len() + self.password.len());
        out.push_str("WIFI:");
        push_field(&mut out, 'S', &self.ssid);
        push_field(&mut out, 'T', &self.network_type);
        push_field(&mut out, 'P', &self.password);
        if self.hidden {
            push_field(&mut out, 'H', "true");
        }
        out.push(';');
        out
    }
}

fn push_field(out: &mut String, key: char, value: &str) {
    out.push(key);
    out.push(':');
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(';');
}
