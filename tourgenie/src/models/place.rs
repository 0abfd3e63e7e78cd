use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Structured data about a point of interest.
///
/// Created by the place-search client and immutable once stored. The
/// `description` is synthesized from a template, not sourced from the API;
/// `hours`, `highlights` and `nearby` are never populated by the lookup
/// (the upstream API does not provide them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub description: String,
    pub location: String,
    pub url: String,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub nearby: Vec<String>,
}

/// A [`PlaceRecord`] prepared for the search index: same fields plus the
/// deterministic document id and the name embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedPlace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub url: String,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub nearby: Vec<String>,
    #[serde(rename = "contentVector")]
    pub content_vector: Vec<f32>,
}

impl IndexedPlace {
    pub fn new(record: PlaceRecord, content_vector: Vec<f32>) -> Self {
        Self {
            id: document_id(&record.name),
            name: record.name,
            description: record.description,
            location: record.location,
            url: record.url,
            hours: record.hours,
            highlights: record.highlights,
            nearby: record.nearby,
            content_vector,
        }
    }
}

/// Deterministic, URL-safe document id for a place name.
///
/// Same name always yields the same id. Padding is omitted because the
/// index rejects `=` in document keys.
pub fn document_id(name: &str) -> String {
    URL_SAFE_NO_PAD.encode(name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_id_is_stable() {
        assert_eq!(document_id("경복궁"), document_id("경복궁"));
        assert_eq!(document_id("Seoul Tower"), document_id("Seoul Tower"));
    }

    #[test]
    fn document_id_has_no_padding() {
        for name in ["경복궁", "a", "ab", "abc", "부산 해운대"] {
            let id = document_id(name);
            assert!(!id.contains('='), "id for {name:?} contains padding: {id}");
        }
    }

    #[test]
    fn document_id_is_url_safe() {
        let id = document_id("제주도 한라산?!");
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn document_ids_differ_per_name() {
        assert_ne!(document_id("경복궁"), document_id("창덕궁"));
    }

    #[test]
    fn indexed_place_serializes_camel_case_vector() {
        let record = PlaceRecord {
            name: "경복궁".to_string(),
            description: "경복궁은 서울 종로구에 위치한 관광명소입니다.".to_string(),
            location: "서울 종로구".to_string(),
            url: "http://place.map.kakao.com/1".to_string(),
            hours: None,
            highlights: vec![],
            nearby: vec![],
        };
        let indexed = IndexedPlace::new(record, vec![0.5, 0.25]);

        let json = serde_json::to_value(&indexed).expect("serialize");
        assert_eq!(json["id"], document_id("경복궁"));
        assert_eq!(json["contentVector"], serde_json::json!([0.5, 0.25]));
        assert!(json.get("content_vector").is_none());
    }
}
