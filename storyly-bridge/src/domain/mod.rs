pub mod color;
pub mod command;
pub mod configuration;
pub mod events;
pub mod story;
pub mod uri;

pub use color::{parse_hex_color, ColorParseError, Rgba};
pub use command::{BridgeCommand, CommandError};
pub use configuration::{
    StoryGroupIconStyling, StoryGroupSize, StoryGroupTextStyling, StoryHeaderStyling, StorylyId,
    ThemeConfiguration, WidgetConfiguration,
};
pub use events::WidgetEvent;
pub use story::{Story, StoryComponent, StoryGroup, StoryMedia, StoryMediaType};
pub use uri::{StoryUri, StoryUriError};
