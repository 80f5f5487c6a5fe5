use crate::domain::{BridgeCommand, CommandError};
use crate::ports::StoryWidgetPort;
use serde_json::{Map, Value};
use tracing::debug;

/// Decodes a host command and applies it to the widget.
///
/// Unknown methods and malformed arguments are swallowed. Returns the command
/// that ran, if any.
pub fn dispatch<W>(
    method: &str,
    args: Option<&Map<String, Value>>,
    widget: &mut W,
) -> Option<BridgeCommand>
where
    W: StoryWidgetPort + ?Sized,
{
    match BridgeCommand::decode(method, args) {
        Ok(command) => {
            apply(&command, widget);
            Some(command)
        }
        Err(CommandError::Unknown { method }) => {
            debug!(%method, "ignoring unknown command");
            None
        }
        Err(err) => {
            debug!(%method, %err, "ignoring malformed command");
            None
        }
    }
}

pub fn apply<W>(command: &BridgeCommand, widget: &mut W)
where
    W: StoryWidgetPort + ?Sized,
{
    match command {
        BridgeCommand::Refresh => widget.refresh(),
        BridgeCommand::Show => widget.present(false),
        BridgeCommand::Dismiss => widget.dismiss(false),
        BridgeCommand::OpenStory {
            story_group_id,
            story_id,
        } => {
            let opened = widget.open_story(*story_group_id, *story_id);
            debug!(story_group_id, ?story_id, opened, "openStory");
        }
        BridgeCommand::OpenStoryUri { payload } => {
            let opened = widget.open_story_uri(payload);
            debug!(%payload, opened, "openStoryUri");
        }
    }
}
