pub mod channel_mem;
pub mod presentation_fixed;
pub mod widget_log;

pub use channel_mem::InMemoryHostChannel;
pub use presentation_fixed::FixedWidthPresentation;
pub use widget_log::{RecordingWidget, RecordingWidgetFactory, WidgetCall, WidgetCallLog};
