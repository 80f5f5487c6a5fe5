use super::story::{Story, StoryComponent, StoryGroup};

/// Lifecycle and interaction callbacks reported by the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    Loaded {
        groups: Vec<StoryGroup>,
    },
    LoadFailed {
        message: String,
    },
    ActionClicked {
        story: Story,
    },
    StoryPresented,
    StoryDismissed,
    UserInteracted {
        group: StoryGroup,
        story: Story,
        component: StoryComponent,
    },
}

impl WidgetEvent {
    /// Method name the host listens on for this event.
    pub fn method(&self) -> &'static str {
        match self {
            WidgetEvent::Loaded { .. } => "storylyLoaded",
            WidgetEvent::LoadFailed { .. } => "storylyLoadFailed",
            WidgetEvent::ActionClicked { .. } => "storylyActionClicked",
            WidgetEvent::StoryPresented => "storylyStoryPresented",
            WidgetEvent::StoryDismissed => "storylyStoryDismissed",
            WidgetEvent::UserInteracted { .. } => "storylyUserInteracted",
        }
    }
}
