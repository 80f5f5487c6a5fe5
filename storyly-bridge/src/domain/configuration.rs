use super::color::Rgba;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Identity of the story feed to load. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorylyId(String);

impl StorylyId {
    pub fn try_new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("storyly id cannot be empty".into());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorylyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StorylyId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_new(value)
    }
}

/// Typed initialization for one widget mount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfiguration {
    id: StorylyId,
    segments: Option<BTreeSet<String>>,
    custom_parameter: Option<String>,
}

impl WidgetConfiguration {
    pub fn new(
        id: StorylyId,
        segments: Option<BTreeSet<String>>,
        custom_parameter: Option<String>,
    ) -> Self {
        Self {
            id,
            segments,
            custom_parameter,
        }
    }

    pub fn id(&self) -> &StorylyId {
        &self.id
    }

    pub fn segments(&self) -> Option<&BTreeSet<String>> {
        self.segments.as_ref()
    }

    pub fn custom_parameter(&self) -> Option<&str> {
        self.custom_parameter.as_deref()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryGroupSize {
    Small,
    #[default]
    Large,
    Custom,
}

impl StoryGroupSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryGroupSize::Small => "small",
            StoryGroupSize::Large => "large",
            StoryGroupSize::Custom => "custom",
        }
    }
}

impl FromStr for StoryGroupSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "small" => Ok(StoryGroupSize::Small),
            "large" => Ok(StoryGroupSize::Large),
            "custom" => Ok(StoryGroupSize::Custom),
            other => Err(format!("unknown story group size {other:?}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryGroupIconStyling {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub padding_between_items: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryGroupTextStyling {
    pub is_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryHeaderStyling {
    pub is_text_visible: bool,
    pub is_icon_visible: bool,
}

/// Sparse theme overlay. `None` leaves the widget's built-in value alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfiguration {
    pub group_size: StoryGroupSize,
    pub icon_styling: Option<StoryGroupIconStyling>,
    pub text_styling: Option<StoryGroupTextStyling>,
    pub header_styling: Option<StoryHeaderStyling>,
    pub icon_border_color_seen: Option<Vec<Rgba>>,
    pub icon_border_color_not_seen: Option<Vec<Rgba>>,
    pub group_text_color: Option<Rgba>,
    pub group_icon_background_color: Option<Rgba>,
    pub group_pin_icon_color: Option<Rgba>,
    pub item_icon_border_color: Option<Vec<Rgba>>,
    pub item_text_color: Option<Rgba>,
    pub item_progress_bar_color: Option<Vec<Rgba>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storyly_id_validation() {
        assert!(StorylyId::try_new("token").is_ok());
        assert!(StorylyId::try_new("  ").is_ok());
        assert!(StorylyId::try_new("").is_err());
        assert!("".parse::<StorylyId>().is_err());
    }

    #[test]
    fn group_size_parses_known_values() {
        assert_eq!("small".parse(), Ok(StoryGroupSize::Small));
        assert_eq!("custom".parse(), Ok(StoryGroupSize::Custom));
        assert!("huge".parse::<StoryGroupSize>().is_err());
        assert_eq!(StoryGroupSize::default().as_str(), "large");
    }

    #[test]
    fn default_theme_is_empty_overlay() {
        let theme = ThemeConfiguration::default();
        assert_eq!(theme.group_size, StoryGroupSize::Large);
        assert!(theme.icon_styling.is_none());
        assert!(theme.item_progress_bar_color.is_none());
    }
}
