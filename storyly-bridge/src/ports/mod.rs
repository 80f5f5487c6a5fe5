pub mod channel_port;
pub mod presentation_port;
pub mod widget_port;

pub use channel_port::{ChannelMessage, HostChannel, MethodCall, MethodCallHandler};
pub use presentation_port::{MountRequest, PresentationContext};
pub use widget_port::{StoryWidgetPort, WidgetEventSink, WidgetFactory, WidgetInit};
