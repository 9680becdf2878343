use serde::{Deserialize, Serialize};

/// Author stored for quotes submitted without one.
pub const DEFAULT_AUTHOR: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
}

/// Body of `POST /quotes` and `PUT /quotes/{id}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuotePayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuotePayload {
    /// The submitted text, unless it is missing or empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    /// The submitted author, unless it is missing or empty.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|author| !author.is_empty())
    }
}

/// One entry of the bundled seed set.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedQuote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl SeedQuote {
    pub fn author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|author| !author.is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_fields_count_as_missing() {
        let payload: QuotePayload = serde_json::from_str(r#"{"text": "", "author": ""}"#).unwrap();
        assert_eq!(payload.text(), None);
        assert_eq!(payload.author(), None);

        let payload: QuotePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.text(), None);
    }

    #[test]
    fn seed_quotes_default_their_author() {
        let seeds: Vec<SeedQuote> =
            serde_json::from_str(r#"[{"text": "a"}, {"text": "b", "author": "B"}]"#).unwrap();

        assert_eq!(seeds[0].author(), DEFAULT_AUTHOR);
        assert_eq!(seeds[1].author(), "B");
    }
}
