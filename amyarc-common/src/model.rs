//! Persisted analysis record model
//!
//! Records are written by the capture/analysis pipeline as flat JSON files
//! with camelCase field names; this service only reads them. Every field is
//! required: a record missing or mistyping a field does not deserialize and
//! is rejected rather than defaulted.

use serde::{Deserialize, Serialize};

/// One utterance in a session transcript.
///
/// No identity beyond its position in the owning analysis's
/// `audio_segments` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSegment {
    /// Speaker label ("user", "assistant", ...). Open set, not an enum.
    pub role: String,
    /// Transcribed content; may be empty.
    pub text: String,
    /// Reference to the clip for this segment. Interpreted by the client,
    /// never dereferenced server-side.
    pub audio_url: String,
}

/// One persisted analysis session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    /// Unique within the archive; derives the record file name.
    pub id: String,
    /// Opaque timestamp string, not parsed or validated here.
    pub date: String,
    /// Full session transcript text.
    pub transcript: String,
    /// Utterances in conversational order.
    pub audio_segments: Vec<AudioSegment>,
    /// Free-text analysis output.
    pub analysis: String,
    pub ai_recommendation: String,
    /// Chat messages in chronological order.
    pub chat_messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record_json() -> serde_json::Value {
        serde_json::json!({
            "id": "20240601_1200",
            "date": "2024-06-01T12:00:00Z",
            "transcript": "user: hello\nassistant: hi",
            "audioSegments": [
                { "role": "user", "text": "hello", "audioUrl": "seg_0.mp3" },
                { "role": "assistant", "text": "hi", "audioUrl": "seg_1.mp3" }
            ],
            "analysis": "Short greeting exchange.",
            "aiRecommendation": "Ask an open question next time.",
            "chatMessages": ["hello", "hi"]
        })
    }

    #[test]
    fn deserializes_complete_record() {
        let record: SavedAnalysis = serde_json::from_value(valid_record_json()).unwrap();
        assert_eq!(record.id, "20240601_1200");
        assert_eq!(record.audio_segments.len(), 2);
        assert_eq!(record.audio_segments[0].audio_url, "seg_0.mp3");
        assert_eq!(record.chat_messages, vec!["hello", "hi"]);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut value = valid_record_json();
        value.as_object_mut().unwrap().remove("transcript");
        let result: Result<SavedAnalysis, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let mut value = valid_record_json();
        value["chatMessages"] = serde_json::json!("not-a-list");
        let result: Result<SavedAnalysis, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let mut value = valid_record_json();
        value["extra"] = serde_json::json!({"added_by": "newer pipeline"});
        let record: SavedAnalysis = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, "20240601_1200");
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let record: SavedAnalysis = serde_json::from_value(valid_record_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("audioSegments").is_some());
        assert!(value.get("aiRecommendation").is_some());
        assert!(value.get("chatMessages").is_some());
        assert!(value.get("audio_segments").is_none());
    }

    #[test]
    fn round_trips_field_values() {
        let original: SavedAnalysis = serde_json::from_value(valid_record_json()).unwrap();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: SavedAnalysis = serde_json::from_str(&encoded).unwrap();
        assert_eq!(original, decoded);
    }
}
