use std::fmt;

/// Text recovered from a decoded matrix symbol, not yet validated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawPayload(String);

impl RawPayload {
    /// Wrap decoded text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for RawPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_views() {
        let payload = RawPayload::from(String::from("WIFI:S:Home;;"));
        assert_eq!(payload, RawPayload::new("WIFI:S:Home;;"));
        assert_eq!(payload.as_str(), "WIFI:S:Home;;");

        let borrowed: &str = payload.as_ref();
        assert_eq!(borrowed, "WIFI:S:Home;;");
        assert_eq!(payload.to_string(), "WIFI:S:Home;;");
        assert_eq!(payload.into_string(), "WIFI:S:Home;;");
    }
}
