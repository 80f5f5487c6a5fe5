use crate::domain::{Story, StoryComponent, StoryGroup, WidgetEvent};
use crate::ports::ChannelMessage;
use serde_json::{json, Value};

/// The click is always reported as handled; hosts rely on the fixed `true`.
pub const ACTION_CLICK_HANDLED: bool = true;

/// Builds the outbound message for `event`. The method name is the event's.
pub fn serialize_event(event: &WidgetEvent) -> ChannelMessage {
    ChannelMessage::new(event.method(), event_payload(event))
}

fn event_payload(event: &WidgetEvent) -> Value {
    match event {
        WidgetEvent::Loaded { groups } => {
            Value::Array(groups.iter().map(story_group_map).collect())
        }
        WidgetEvent::LoadFailed { message } => Value::String(message.clone()),
        WidgetEvent::ActionClicked { story } => story_map(story),
        WidgetEvent::StoryPresented | WidgetEvent::StoryDismissed => Value::Null,
        WidgetEvent::UserInteracted {
            group,
            story,
            component,
        } => json!({
            "storyGroup": story_group_map(group),
            "story": story_map(story),
            "storyComponent": story_component_map(component),
        }),
    }
}

pub fn story_group_map(group: &StoryGroup) -> Value {
    json!({
        "id": group.id,
        "title": group.title,
        "index": group.index,
        "iconUrl": group.icon_url.as_str(),
        "stories": group.stories.iter().map(story_map).collect::<Vec<_>>(),
    })
}

pub fn story_map(story: &Story) -> Value {
    json!({
        "id": story.id,
        "title": story.title,
        "index": story.index,
        "media": {
            "type": story.media.media_type.raw_value(),
            "url": story.media.url,
            "actionUrl": story.media.action_url,
        },
    })
}

pub fn story_component_map(component: &StoryComponent) -> Value {
    match component {
        StoryComponent::Quiz {
            title,
            options,
            right_answer_index,
            selected_option_index,
            custom_payload,
        } => json!({
            "type": component.kind(),
            "title": title,
            "options": options,
            "rightAnswerIndex": right_answer_index,
            "selectedOptionIndex": selected_option_index,
            "customPayload": custom_payload,
        }),
        StoryComponent::Poll {
            title,
            options,
            selected_option_index,
            custom_payload,
        } => json!({
            "type": component.kind(),
            "title": title,
            "options": options,
            "selectedOptionIndex": selected_option_index,
            "customPayload": custom_payload,
        }),
        StoryComponent::Emoji {
            emoji_codes,
            selected_emoji_index,
            custom_payload,
        } => json!({
            "type": component.kind(),
            "emojiCodes": emoji_codes,
            "selectedEmojiIndex": selected_emoji_index,
            "customPayload": custom_payload,
        }),
        StoryComponent::Rating {
            emoji_code,
            rating,
            custom_payload,
        } => json!({
            "type": component.kind(),
            "emojiCode": emoji_code,
            "rating": rating,
            "customPayload": custom_payload,
        }),
        StoryComponent::Undefined => json!({ "type": component.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoryMedia, StoryMediaType};
    use url::Url;

    fn story(id: &str, index: i64) -> Story {
        Story {
            id: id.to_string(),
            title: format!("Story {id}"),
            index,
            media: StoryMedia {
                media_type: StoryMediaType::Video,
                url: format!("https://cdn.example.com/{id}.mp4"),
                action_url: None,
            },
        }
    }

    fn group() -> StoryGroup {
        StoryGroup {
            id: "g1".into(),
            title: "Group".into(),
            index: 0,
            icon_url: Url::parse("https://cdn.example.com/icon.png").unwrap(),
            stories: vec![story("s2", 1), story("s1", 0)],
        }
    }

    #[test]
    fn loaded_keeps_story_order() {
        let message = serialize_event(&WidgetEvent::Loaded {
            groups: vec![group()],
        });
        assert_eq!(message.method, "storylyLoaded");
        let groups = message.arguments.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["iconUrl"], "https://cdn.example.com/icon.png");
        let stories = groups[0]["stories"].as_array().unwrap();
        assert_eq!(stories[0]["id"], "s2");
        assert_eq!(stories[1]["id"], "s1");
    }

    #[test]
    fn story_map_keeps_null_action_url() {
        let value = story_map(&story("s1", 3));
        assert_eq!(
            value,
            json!({
                "id": "s1",
                "title": "Story s1",
                "index": 3,
                "media": {
                    "type": 1,
                    "url": "https://cdn.example.com/s1.mp4",
                    "actionUrl": null
                }
            })
        );
    }

    #[test]
    fn action_click_carries_story() {
        let message = serialize_event(&WidgetEvent::ActionClicked {
            story: story("s1", 0),
        });
        assert_eq!(message.method, "storylyActionClicked");
        assert_eq!(message.arguments["id"], "s1");
    }

    #[test]
    fn presentation_events_have_null_payload() {
        let presented = serialize_event(&WidgetEvent::StoryPresented);
        assert_eq!(presented.method, "storylyStoryPresented");
        assert_eq!(presented.arguments, Value::Null);
        let dismissed = serialize_event(&WidgetEvent::StoryDismissed);
        assert_eq!(dismissed.method, "storylyStoryDismissed");
        assert_eq!(dismissed.arguments, Value::Null);
        assert_eq!(
            serialize_event(&WidgetEvent::LoadFailed {
                message: "network error".into()
            }),
            ChannelMessage::new("storylyLoadFailed", json!("network error"))
        );
    }

    #[test]
    fn undefined_component_maps_to_type_only() {
        assert_eq!(
            story_component_map(&StoryComponent::Undefined),
            json!({"type": "undefined"})
        );
    }

    #[test]
    fn component_variants_carry_discriminator() {
        let quiz = StoryComponent::Quiz {
            title: "Capital?".into(),
            options: vec!["Paris".into(), "Rome".into()],
            right_answer_index: None,
            selected_option_index: Some(0),
            custom_payload: Some("p".into()),
        };
        assert_eq!(
            story_component_map(&quiz),
            json!({
                "type": "quiz",
                "title": "Capital?",
                "options": ["Paris", "Rome"],
                "rightAnswerIndex": null,
                "selectedOptionIndex": 0,
                "customPayload": "p"
            })
        );

        let rating = StoryComponent::Rating {
            emoji_code: "1F60D".into(),
            rating: 80,
            custom_payload: None,
        };
        assert_eq!(story_component_map(&rating)["type"], "ratings");

        let emoji = StoryComponent::Emoji {
            emoji_codes: vec!["1F600".into()],
            selected_emoji_index: 0,
            custom_payload: None,
        };
        assert_eq!(story_component_map(&emoji)["emojiCodes"], json!(["1F600"]));

        let poll = StoryComponent::Poll {
            title: "Yes?".into(),
            options: vec!["Yes".into(), "No".into()],
            selected_option_index: 1,
            custom_payload: None,
        };
        assert_eq!(story_component_map(&poll)["selectedOptionIndex"], 1);
    }

    #[test]
    fn user_interaction_bundles_all_three_maps() {
        let group = group();
        let story = group.stories[0].clone();
        let message = serialize_event(&WidgetEvent::UserInteracted {
            group,
            story,
            component: StoryComponent::Undefined,
        });
        assert_eq!(message.method, "storylyUserInteracted");
        assert_eq!(message.arguments["storyGroup"]["id"], "g1");
        assert_eq!(message.arguments["story"]["id"], "s2");
        assert_eq!(
            message.arguments["storyComponent"],
            json!({"type": "undefined"})
        );
    }
}
