use serde::{Deserialize, Serialize};

/// Query string of the status endpoint. A repeated key keeps its first value.
#[derive(Debug, Clone, Default)]
pub struct StatusQuery {
    /// Present (with any value) when a PNG card is requested
    pub img: Option<String>,
    /// Card scale as a percentage
    pub size: Option<String>,
}

impl FromIterator<(String, String)> for StatusQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "img" => {
                    query.img.get_or_insert(value);
                }
                "size" => {
                    query.size.get_or_insert(value);
                }
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> StatusQuery {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let query = pairs(&[("img", ""), ("size", "50"), ("size", "200"), ("img", "0")]);

        assert_eq!(query.img.as_deref(), Some(""));
        assert_eq!(query.size.as_deref(), Some("50"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let query = pairs(&[("theme", "dark")]);

        assert!(query.img.is_none());
        assert!(query.size.is_none());
    }
}
