use super::uri::StoryUri;
use serde_json::{Map, Value};
use thiserror::Error;

pub const METHOD_REFRESH: &str = "refresh";
pub const METHOD_SHOW: &str = "show";
pub const METHOD_DISMISS: &str = "dismiss";
pub const METHOD_OPEN_STORY: &str = "openStory";
pub const METHOD_OPEN_STORY_URI: &str = "openStoryUri";

const ARG_STORY_GROUP_ID: &str = "storyGroupId";
const ARG_STORY_ID: &str = "storyId";
const ARG_URI: &str = "uri";

/// Inbound host command, decoded from a method name and its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeCommand {
    Refresh,
    Show,
    Dismiss,
    OpenStory {
        story_group_id: i64,
        story_id: Option<i64>,
    },
    OpenStoryUri {
        payload: StoryUri,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {method}")]
    Unknown { method: String },
    #[error("openStoryUri requires a string uri argument")]
    MissingUri,
    #[error("invalid uri {uri:?}: {reason}")]
    InvalidUri { uri: String, reason: String },
}

impl BridgeCommand {
    /// Missing or mistyped `storyGroupId` becomes 0 and a non-integer
    /// `storyId` becomes `None`; both are indistinguishable from absence.
    pub fn decode(method: &str, args: Option<&Map<String, Value>>) -> Result<Self, CommandError> {
        match method {
            METHOD_REFRESH => Ok(BridgeCommand::Refresh),
            METHOD_SHOW => Ok(BridgeCommand::Show),
            METHOD_DISMISS => Ok(BridgeCommand::Dismiss),
            METHOD_OPEN_STORY => {
                let story_group_id = args
                    .and_then(|args| args.get(ARG_STORY_GROUP_ID))
                    .and_then(Value::as_i64)
                    .unwrap_or(0);
                let story_id = args
                    .and_then(|args| args.get(ARG_STORY_ID))
                    .and_then(Value::as_i64);
                Ok(BridgeCommand::OpenStory {
                    story_group_id,
                    story_id,
                })
            }
            METHOD_OPEN_STORY_URI => {
                let uri = args
                    .and_then(|args| args.get(ARG_URI))
                    .and_then(Value::as_str)
                    .ok_or(CommandError::MissingUri)?;
                let payload = StoryUri::parse(uri).map_err(|err| CommandError::InvalidUri {
                    uri: uri.to_string(),
                    reason: err.to_string(),
                })?;
                Ok(BridgeCommand::OpenStoryUri { payload })
            }
            other => Err(CommandError::Unknown {
                method: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn decodes_argumentless_commands() {
        assert_eq!(BridgeCommand::decode("refresh", None), Ok(BridgeCommand::Refresh));
        assert_eq!(BridgeCommand::decode("show", None), Ok(BridgeCommand::Show));
        assert_eq!(BridgeCommand::decode("dismiss", None), Ok(BridgeCommand::Dismiss));
    }

    #[test]
    fn open_story_defaults_group_id() {
        let args = args(json!({"storyGroupId": "not-an-int", "storyId": 7}));
        assert_eq!(
            BridgeCommand::decode("openStory", Some(&args)),
            Ok(BridgeCommand::OpenStory {
                story_group_id: 0,
                story_id: Some(7)
            })
        );
        assert_eq!(
            BridgeCommand::decode("openStory", None),
            Ok(BridgeCommand::OpenStory {
                story_group_id: 0,
                story_id: None
            })
        );
    }

    #[test]
    fn open_story_drops_mistyped_story_id() {
        let args = args(json!({"storyGroupId": 12, "storyId": 1.5}));
        assert_eq!(
            BridgeCommand::decode("openStory", Some(&args)),
            Ok(BridgeCommand::OpenStory {
                story_group_id: 12,
                story_id: None
            })
        );
    }

    #[test]
    fn open_story_uri_accepts_any_uri_reference() {
        let ok = args(json!({"uri": "https://open.storyly.io/share/abc"}));
        assert!(matches!(
            BridgeCommand::decode("openStoryUri", Some(&ok)),
            Ok(BridgeCommand::OpenStoryUri { .. })
        ));

        let relative = args(json!({"uri": "share/abc?g=1"}));
        assert_eq!(
            BridgeCommand::decode("openStoryUri", Some(&relative)),
            Ok(BridgeCommand::OpenStoryUri {
                payload: StoryUri::parse("share/abc?g=1").unwrap()
            })
        );

        let bad = args(json!({"uri": "not a uri"}));
        assert!(matches!(
            BridgeCommand::decode("openStoryUri", Some(&bad)),
            Err(CommandError::InvalidUri { .. })
        ));

        let missing = args(json!({"uri": 3}));
        assert_eq!(
            BridgeCommand::decode("openStoryUri", Some(&missing)),
            Err(CommandError::MissingUri)
        );
    }

    #[test]
    fn unknown_method_is_reported() {
        assert_eq!(
            BridgeCommand::decode("pause", None),
            Err(CommandError::Unknown {
                method: "pause".into()
            })
        );
    }
}
