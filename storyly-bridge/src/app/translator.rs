use crate::domain::{
    parse_hex_color, Rgba, StoryGroupIconStyling, StoryGroupSize, StoryGroupTextStyling,
    StoryHeaderStyling, StorylyId, ThemeConfiguration, WidgetConfiguration,
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

pub const ARGS_STORYLY_ID: &str = "storylyId";
pub const ARGS_STORYLY_SEGMENTS: &str = "storylySegments";
pub const ARGS_STORYLY_CUSTOM_PARAMETERS: &str = "storylyCustomParameters";

pub const ARGS_STORY_GROUP_SIZE: &str = "storyGroupSize";
pub const ARGS_STORY_GROUP_ICON_STYLING: &str = "storyGroupIconStyling";
pub const ARGS_STORY_GROUP_TEXT_STYLING: &str = "storyGroupTextStyling";
pub const ARGS_STORY_HEADER_STYLING: &str = "storyHeaderStyling";

pub const ARGS_STORY_GROUP_ICON_BORDER_COLOR_SEEN: &str = "storyGroupIconBorderColorSeen";
pub const ARGS_STORY_GROUP_ICON_BORDER_COLOR_NOT_SEEN: &str = "storyGroupIconBorderColorNotSeen";
pub const ARGS_STORY_GROUP_ICON_BACKGROUND_COLOR: &str = "storyGroupIconBackgroundColor";
pub const ARGS_STORY_GROUP_TEXT_COLOR: &str = "storyGroupTextColor";
pub const ARGS_STORY_GROUP_PIN_ICON_COLOR: &str = "storyGroupPinIconColor";
pub const ARGS_STORY_ITEM_ICON_BORDER_COLOR: &str = "storyItemIconBorderColor";
pub const ARGS_STORY_ITEM_TEXT_COLOR: &str = "storyItemTextColor";
pub const ARGS_STORY_ITEM_PROGRESS_BAR_COLOR: &str = "storyItemProgressBarColor";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("storylyId is missing or not a string")]
    MissingStorylyId,
    #[error("storylyId is empty")]
    EmptyStorylyId,
}

/// Result of decoding the raw mount arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslatedConfig {
    /// `None` means the widget must not be mounted.
    pub configuration: Option<WidgetConfiguration>,
    pub theme: ThemeConfiguration,
}

/// Decodes the raw mount arguments. Pure; never fails.
pub fn translate(raw: &Map<String, Value>) -> TranslatedConfig {
    let configuration = match decode_widget_configuration(raw) {
        Ok(configuration) => Some(configuration),
        Err(err) => {
            debug!(%err, "skipping widget configuration");
            None
        }
    };
    TranslatedConfig {
        configuration,
        theme: decode_theme(raw),
    }
}

pub fn decode_widget_configuration(
    raw: &Map<String, Value>,
) -> Result<WidgetConfiguration, ConfigError> {
    let id = raw
        .get(ARGS_STORYLY_ID)
        .and_then(Value::as_str)
        .ok_or(ConfigError::MissingStorylyId)?;
    let id = StorylyId::try_new(id).map_err(|_| ConfigError::EmptyStorylyId)?;

    let segments = raw
        .get(ARGS_STORYLY_SEGMENTS)
        .and_then(string_list)
        .map(|segments| segments.into_iter().collect::<BTreeSet<_>>());
    let custom_parameter = raw
        .get(ARGS_STORYLY_CUSTOM_PARAMETERS)
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(WidgetConfiguration::new(id, segments, custom_parameter))
}

pub fn decode_theme(raw: &Map<String, Value>) -> ThemeConfiguration {
    ThemeConfiguration {
        group_size: decode_group_size(raw.get(ARGS_STORY_GROUP_SIZE)),
        icon_styling: raw
            .get(ARGS_STORY_GROUP_ICON_STYLING)
            .and_then(Value::as_object)
            .and_then(decode_icon_styling),
        text_styling: raw
            .get(ARGS_STORY_GROUP_TEXT_STYLING)
            .and_then(Value::as_object)
            .and_then(|styling| {
                let is_visible = styling.get("isVisible")?.as_bool()?;
                Some(StoryGroupTextStyling { is_visible })
            }),
        header_styling: raw
            .get(ARGS_STORY_HEADER_STYLING)
            .and_then(Value::as_object)
            .and_then(|styling| {
                Some(StoryHeaderStyling {
                    is_text_visible: styling.get("isTextVisible")?.as_bool()?,
                    is_icon_visible: styling.get("isIconVisible")?.as_bool()?,
                })
            }),
        icon_border_color_seen: color_list(raw, ARGS_STORY_GROUP_ICON_BORDER_COLOR_SEEN),
        icon_border_color_not_seen: color_list(raw, ARGS_STORY_GROUP_ICON_BORDER_COLOR_NOT_SEEN),
        group_text_color: color(raw, ARGS_STORY_GROUP_TEXT_COLOR),
        group_icon_background_color: color(raw, ARGS_STORY_GROUP_ICON_BACKGROUND_COLOR),
        group_pin_icon_color: color(raw, ARGS_STORY_GROUP_PIN_ICON_COLOR),
        item_icon_border_color: color_list(raw, ARGS_STORY_ITEM_ICON_BORDER_COLOR),
        item_text_color: color(raw, ARGS_STORY_ITEM_TEXT_COLOR),
        item_progress_bar_color: color_list(raw, ARGS_STORY_ITEM_PROGRESS_BAR_COLOR),
    }
}

fn decode_group_size(value: Option<&Value>) -> StoryGroupSize {
    match value.and_then(Value::as_str) {
        Some(raw) => raw.parse().unwrap_or_else(|err: String| {
            debug!(%err, "falling back to default story group size");
            StoryGroupSize::default()
        }),
        None => StoryGroupSize::default(),
    }
}

/// All four fields must be integers; a partial struct is rejected whole.
fn decode_icon_styling(styling: &Map<String, Value>) -> Option<StoryGroupIconStyling> {
    let decoded = complete_icon_styling(styling);
    if decoded.is_none() {
        debug!(key = ARGS_STORY_GROUP_ICON_STYLING, "incomplete icon styling ignored");
    }
    decoded
}

fn complete_icon_styling(styling: &Map<String, Value>) -> Option<StoryGroupIconStyling> {
    let field = |name: &str| styling.get(name).and_then(Value::as_i64).map(|v| v as f64);
    Some(StoryGroupIconStyling {
        width: field("width")?,
        height: field("height")?,
        corner_radius: field("cornerRadius")?,
        padding_between_items: field("paddingBetweenItems")?,
    })
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn color(raw: &Map<String, Value>, key: &'static str) -> Option<Rgba> {
    let hex = raw.get(key)?.as_str()?;
    match parse_hex_color(hex) {
        Ok(color) => Some(color),
        Err(err) => {
            debug!(key, %err, "color left at widget default");
            None
        }
    }
}

/// Any unparseable entry discards the whole list.
fn color_list(raw: &Map<String, Value>, key: &'static str) -> Option<Vec<Rgba>> {
    let entries = string_list(raw.get(key)?)?;
    match entries
        .iter()
        .map(|hex| parse_hex_color(hex))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(colors) => Some(colors),
        Err(err) => {
            debug!(key, %err, "color list left at widget default");
            None
        }
    }
}
