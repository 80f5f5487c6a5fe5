use crate::domain::{StoryUri, ThemeConfiguration, WidgetConfiguration};
use crate::ports::{StoryWidgetPort, WidgetEventSink, WidgetFactory, WidgetInit};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// One capability call made on a widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum WidgetCall {
    Initialize {
        configuration: WidgetConfiguration,
        theme: ThemeConfiguration,
    },
    Refresh,
    Present {
        animated: bool,
    },
    Dismiss {
        animated: bool,
    },
    OpenStory {
        story_group_id: i64,
        story_id: Option<i64>,
    },
    OpenStoryUri {
        payload: String,
    },
}

pub type WidgetCallLog = Arc<Mutex<Vec<WidgetCall>>>;

/// Widget that only records and logs what it is asked to do.
#[derive(Default)]
pub struct RecordingWidget {
    log: WidgetCallLog,
}

impl RecordingWidget {
    pub fn with_log(log: WidgetCallLog) -> Self {
        Self { log }
    }

    pub fn calls(&self) -> Vec<WidgetCall> {
        self.log.lock().clone()
    }

    fn record(&self, call: WidgetCall) {
        info!(?call, "widget call");
        self.log.lock().push(call);
    }
}

impl StoryWidgetPort for RecordingWidget {
    fn refresh(&mut self) {
        self.record(WidgetCall::Refresh);
    }

    fn present(&mut self, animated: bool) {
        self.record(WidgetCall::Present { animated });
    }

    fn dismiss(&mut self, animated: bool) {
        self.record(WidgetCall::Dismiss { animated });
    }

    fn open_story(&mut self, story_group_id: i64, story_id: Option<i64>) -> bool {
        self.record(WidgetCall::OpenStory {
            story_group_id,
            story_id,
        });
        true
    }

    fn open_story_uri(&mut self, payload: &StoryUri) -> bool {
        self.record(WidgetCall::OpenStoryUri {
            payload: payload.as_str().to_string(),
        });
        true
    }
}

/// Creates [`RecordingWidget`]s that share one call log and keeps the most
/// recently registered event sink so callers can emit widget events.
#[derive(Clone, Default)]
pub struct RecordingWidgetFactory {
    log: WidgetCallLog,
    sink: Arc<Mutex<Option<Arc<dyn WidgetEventSink>>>>,
    created: Arc<Mutex<usize>>,
}

impl RecordingWidgetFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<WidgetCall> {
        self.log.lock().clone()
    }

    pub fn created(&self) -> usize {
        *self.created.lock()
    }

    pub fn event_sink(&self) -> Option<Arc<dyn WidgetEventSink>> {
        self.sink.lock().clone()
    }
}

impl WidgetFactory for RecordingWidgetFactory {
    type Widget = RecordingWidget;

    fn create(&self, init: WidgetInit<'_>) -> Self::Widget {
        *self.created.lock() += 1;
        *self.sink.lock() = Some(init.events);
        let widget = RecordingWidget::with_log(Arc::clone(&self.log));
        widget.record(WidgetCall::Initialize {
            configuration: init.configuration.clone(),
            theme: init.theme.clone(),
        });
        widget
    }
}
