use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum StoryMediaType {
    Image,
    Video,
    Vod,
    /// Raw value the bridge does not know by name; passed through as-is.
    Other(i64),
}

impl StoryMediaType {
    pub fn raw_value(&self) -> i64 {
        match self {
            StoryMediaType::Image => 0,
            StoryMediaType::Video => 1,
            StoryMediaType::Vod => 2,
            StoryMediaType::Other(raw) => *raw,
        }
    }
}

impl From<i64> for StoryMediaType {
    fn from(raw: i64) -> Self {
        match raw {
            0 => StoryMediaType::Image,
            1 => StoryMediaType::Video,
            2 => StoryMediaType::Vod,
            other => StoryMediaType::Other(other),
        }
    }
}

impl From<StoryMediaType> for i64 {
    fn from(value: StoryMediaType) -> Self {
        value.raw_value()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMedia {
    #[serde(rename = "type")]
    pub media_type: StoryMediaType,
    pub url: String,
    pub action_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub index: i64,
    pub media: StoryMedia,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryGroup {
    pub id: String,
    pub title: String,
    pub index: i64,
    pub icon_url: Url,
    /// Order as reported by the widget.
    pub stories: Vec<Story>,
}

/// Interactive element a user answered inside a story.
///
/// Built at the widget adapter boundary. Kinds the adapter cannot name map to
/// [`StoryComponent::Undefined`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoryComponent {
    #[serde(rename_all = "camelCase")]
    Quiz {
        title: String,
        options: Vec<String>,
        right_answer_index: Option<i64>,
        selected_option_index: Option<i64>,
        custom_payload: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Poll {
        title: String,
        options: Vec<String>,
        selected_option_index: i64,
        custom_payload: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Emoji {
        emoji_codes: Vec<String>,
        selected_emoji_index: i64,
        custom_payload: Option<String>,
    },
    #[serde(rename = "ratings", rename_all = "camelCase")]
    Rating {
        emoji_code: String,
        rating: i64,
        custom_payload: Option<String>,
    },
    #[serde(other)]
    Undefined,
}

impl StoryComponent {
    pub fn kind(&self) -> &'static str {
        match self {
            StoryComponent::Quiz { .. } => "quiz",
            StoryComponent::Poll { .. } => "poll",
            StoryComponent::Emoji { .. } => "emoji",
            StoryComponent::Rating { .. } => "ratings",
            StoryComponent::Undefined => "undefined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_type_keeps_unknown_raw_values() {
        assert_eq!(StoryMediaType::from(1), StoryMediaType::Video);
        assert_eq!(StoryMediaType::from(42).raw_value(), 42);
    }

    #[test]
    fn unknown_component_kind_decodes_as_undefined() {
        let component: StoryComponent =
            serde_json::from_value(json!({"type": "countdown", "title": "soon"})).unwrap();
        assert_eq!(component, StoryComponent::Undefined);
        assert_eq!(component.kind(), "undefined");
    }

    #[test]
    fn rating_component_uses_ratings_tag() {
        let component: StoryComponent = serde_json::from_value(json!({
            "type": "ratings",
            "emojiCode": "1F600",
            "rating": 4,
            "customPayload": null
        }))
        .unwrap();
        assert_eq!(component.kind(), "ratings");
    }
}
