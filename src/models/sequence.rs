//! Sequence record and search response structures.

use serde::{Deserialize, Serialize};

/// One sequence entry as returned by the OEIS search API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sequence {
    /// Numeric identifier (the N in "A-number" AN)
    pub number: u64,

    /// Sequence description
    pub name: String,

    /// Leading terms as a comma-separated numeric string
    #[serde(default)]
    pub data: String,
}

impl Sequence {
    /// The conventional A-number label, e.g. `A363877`.
    pub fn a_number(&self) -> String {
        format!("A{}", self.number)
    }

    /// Full URL to the sequence's OEIS page.
    pub fn url(&self) -> String {
        format!("https://oeis.org/A{}", self.number)
    }
}

/// One page of the OEIS search response.
///
/// `results` is `null` (not an empty array) when the query has no hits,
/// so it deserializes as an `Option`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Total number of results across all pages
    pub count: usize,

    /// Records on this page
    #[serde(default)]
    pub results: Option<Vec<Sequence>>,
}

impl SearchResponse {
    /// Records on this page, empty when the API sent `null`.
    pub fn into_results(self) -> Vec<Sequence> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_number_and_url() {
        let seq = Sequence {
            number: 363877,
            name: "Test sequence".to_string(),
            data: "1,2,3".to_string(),
        };
        assert_eq!(seq.a_number(), "A363877");
        assert_eq!(seq.url(), "https://oeis.org/A363877");
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "count": 2,
            "results": [
                {"number": 360001, "name": "First", "data": "1,1,2,3,5"},
                {"number": 360002, "name": "Second", "data": "2,4,8"}
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.count, 2);
        let results = resp.into_results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].number, 360001);
        assert_eq!(results[1].data, "2,4,8");
    }

    #[test]
    fn test_parse_null_results() {
        let json = r#"{"count": 0, "results": null}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.count, 0);
        assert!(resp.into_results().is_empty());
    }

    #[test]
    fn test_parse_missing_data_field() {
        let json = r#"{"count": 1, "results": [{"number": 5, "name": "No data"}]}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_results()[0].data, "");
    }
}
