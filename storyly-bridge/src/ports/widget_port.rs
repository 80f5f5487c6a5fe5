use crate::domain::{
    Story, StoryComponent, StoryGroup, StoryUri, ThemeConfiguration, WidgetConfiguration,
};
use crate::ports::presentation_port::PresentationContext;
use std::sync::Arc;

/// Capability surface of the embedded story widget.
pub trait StoryWidgetPort: Send {
    fn refresh(&mut self);

    fn present(&mut self, animated: bool);

    fn dismiss(&mut self, animated: bool);

    /// Returns whether the widget found the requested story.
    fn open_story(&mut self, story_group_id: i64, story_id: Option<i64>) -> bool;

    /// Returns whether the widget accepted the payload.
    fn open_story_uri(&mut self, payload: &StoryUri) -> bool;
}

/// Callbacks the widget reports back. The bridge registers itself here.
pub trait WidgetEventSink: Send + Sync {
    fn loaded(&self, groups: Vec<StoryGroup>);

    fn load_failed(&self, message: String);

    /// Returns whether the click was handled.
    fn action_clicked(&self, story: Story) -> bool;

    fn story_presented(&self);

    fn story_dismissed(&self);

    fn user_interacted(&self, group: StoryGroup, story: Story, component: StoryComponent);
}

pub struct WidgetInit<'a> {
    pub configuration: &'a WidgetConfiguration,
    pub theme: &'a ThemeConfiguration,
    pub events: Arc<dyn WidgetEventSink>,
    pub presentation: &'a dyn PresentationContext,
}

/// Builds a fresh widget per mount.
pub trait WidgetFactory {
    type Widget: StoryWidgetPort + 'static;

    fn create(&self, init: WidgetInit<'_>) -> Self::Widget;
}
