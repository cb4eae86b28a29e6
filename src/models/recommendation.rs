use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// A single scored book returned by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "Book_Title")]
    pub title: String,
    /// Non-negative; negative scores fail to decode
    #[serde(rename = "Recommendation_Score", deserialize_with = "non_negative_score")]
    pub score: f64,
    /// ISBN of the book, used for the cover image
    #[serde(rename = "Book_ID", default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
}

fn non_negative_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?;
    if score.is_finite() && score >= 0.0 {
        Ok(score)
    } else {
        Err(D::Error::custom(format!(
            "Recommendation_Score must be a non-negative number, got {}",
            score
        )))
    }
}

impl Recommendation {
    /// Score rounded to two decimals for display, as `toFixed(2)`
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }

    /// Medium-size cover image URL, when the service sent a book id
    pub fn cover_url(&self, cover_base_url: &str) -> Option<String> {
        self.book_id.as_deref().map(|id| {
            format!(
                "{}/b/isbn/{}-M.jpg",
                cover_base_url.trim_end_matches('/'),
                id
            )
        })
    }
}

/// Ordered recommendations from one successful response, in service order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ResultSet(Vec<Recommendation>);

impl ResultSet {
    pub fn new(items: Vec<Recommendation>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_deserialization() {
        let json = r#"{
            "Book_ID": "0441172717",
            "Book_Title": "Dune",
            "Recommendation_Score": 0.8734,
            "Book_Author": "Frank Herbert"
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.title, "Dune");
        assert_eq!(rec.score, 0.8734);
        assert_eq!(rec.book_id, Some("0441172717".to_string()));
    }

    #[test]
    fn test_book_id_is_optional() {
        let json = r#"{"Book_Title": "Dune", "Recommendation_Score": 0.87}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.book_id, None);
        assert_eq!(rec.cover_url("https://covers.openlibrary.org"), None);
    }

    #[test]
    fn test_missing_score_is_rejected() {
        let json = r#"{"Book_Title": "Dune"}"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }

    #[test]
    fn test_negative_score_is_rejected() {
        let json = r#"[{"Book_Title": "X", "Recommendation_Score": -0.5}]"#;
        let err = serde_json::from_str::<ResultSet>(json).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_zero_score_is_accepted() {
        let json = r#"{"Book_Title": "X", "Recommendation_Score": 0}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.score, 0.0);
        assert_eq!(rec.display_score(), "0.00");
    }

    #[test]
    fn test_display_score_keeps_full_precision_in_value() {
        let rec = Recommendation {
            title: "Dune".to_string(),
            score: 0.87654,
            book_id: None,
        };
        assert_eq!(rec.display_score(), "0.88");
        assert_eq!(rec.score, 0.87654);
    }

    #[test]
    fn test_cover_url() {
        let rec = Recommendation {
            title: "Dune".to_string(),
            score: 1.0,
            book_id: Some("0441172717".to_string()),
        };
        assert_eq!(
            rec.cover_url("https://covers.openlibrary.org/").as_deref(),
            Some("https://covers.openlibrary.org/b/isbn/0441172717-M.jpg")
        );
    }

    #[test]
    fn test_result_set_preserves_order() {
        let json = r#"[
            {"Book_Title": "B", "Recommendation_Score": 0.1},
            {"Book_Title": "A", "Recommendation_Score": 0.9}
        ]"#;
        let set: ResultSet = serde_json::from_str(json).unwrap();
        let titles: Vec<&str> = set.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
