use serde::{Deserialize, Serialize};

/// A contiguous span of document text under one (possibly absent) heading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Segment {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub section_number: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_deserializes_with_missing_fields() {
        let segment: Segment =
            serde_json::from_str(r#"{"content": "body text"}"#).expect("segment should parse");

        assert_eq!(segment.heading, None);
        assert_eq!(segment.section_number, None);
        assert_eq!(segment.content, "body text");
    }

    #[test]
    fn test_segment_serializes_absent_heading_as_null() {
        let segment = Segment {
            heading: None,
            section_number: None,
            content: "text".to_string(),
        };

        let json = serde_json::to_value(&segment).expect("segment should serialize");
        assert!(json["heading"].is_null());
        assert_eq!(json["content"], "text");
    }
}
