pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use adapters::{
    FixedWidthPresentation, InMemoryHostChannel, RecordingWidget, RecordingWidgetFactory,
    WidgetCall,
};
pub use app::{
    dispatch, translate, BridgeController, ConfigError, LifecycleHandle, LifecycleToken,
    MountOutcome, TranslatedConfig,
};
pub use domain::{
    parse_hex_color, BridgeCommand, ColorParseError, CommandError, Rgba, Story, StoryComponent,
    StoryGroup, StoryGroupSize, StoryMedia, StoryMediaType, StoryUri, StorylyId,
    ThemeConfiguration, WidgetConfiguration, WidgetEvent,
};
pub use ports::{
    ChannelMessage, HostChannel, MethodCall, MethodCallHandler, MountRequest,
    PresentationContext, StoryWidgetPort, WidgetEventSink, WidgetFactory,
};

use anyhow::{anyhow, Context, Result as AnyResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_DISPLAY_WIDTH: f64 = 375.0;

#[derive(Clone, Debug)]
pub struct BridgeSettings {
    pub display_width: f64,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub configuration: Option<WidgetConfiguration>,
    pub theme: ThemeConfiguration,
}

pub fn inspect(raw: &Map<String, Value>) -> InspectReport {
    let TranslatedConfig {
        configuration,
        theme,
    } = translate(raw);
    InspectReport {
        configuration,
        theme,
    }
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub mounted: bool,
    pub width: Option<f64>,
    pub widget_calls: Vec<WidgetCall>,
    pub outbound: Vec<ChannelMessage>,
}

/// Mounts a recording widget with `raw`, feeds `calls` through the inbound
/// channel and reports what reached the widget.
pub fn replay(
    settings: &BridgeSettings,
    raw: Map<String, Value>,
    calls: Vec<MethodCall>,
) -> ReplayReport {
    let factory = RecordingWidgetFactory::new();
    let channel = Arc::new(InMemoryHostChannel::new());
    let presentation = FixedWidthPresentation::new(settings.display_width);
    let mut controller = BridgeController::new(factory.clone(), channel.clone(), raw);

    let mounted = matches!(
        controller.mount(&presentation),
        MountOutcome::Mounted { .. }
    );
    if !mounted {
        warn!("storylyId missing; replaying against an unmounted bridge");
    }
    for call in calls {
        channel.deliver(call);
    }
    controller.teardown();

    ReplayReport {
        mounted,
        width: presentation.mounts().last().map(|mount| mount.width),
        widget_calls: factory.calls(),
        outbound: channel.sent(),
    }
}

pub fn load_raw_config(path: &Path) -> AnyResult<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!(
            "config {} must be a JSON object, found {}",
            path.display(),
            json_kind(&other)
        )),
    }
}

/// Reads one `{"method": .., "arguments": ..}` object per non-empty line.
pub fn load_method_calls(path: &Path) -> AnyResult<Vec<MethodCall>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading commands {}", path.display()))?;
    let calls = parse_method_calls(&text)
        .with_context(|| format!("parsing commands {}", path.display()))?;
    info!(count = calls.len(), "loaded method calls");
    Ok(calls)
}

pub fn parse_method_calls(text: &str) -> AnyResult<Vec<MethodCall>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<MethodCall>(line).with_context(|| format!("line {}", idx + 1))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_method_calls_skips_blank_lines() {
        let calls = parse_method_calls(
            "{\"method\":\"show\"}\n\n{\"method\":\"openStory\",\"arguments\":{\"storyGroupId\":3}}\n",
        )
        .unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].arguments, Value::Null);
        assert_eq!(calls[1].arguments["storyGroupId"], 3);
    }

    #[test]
    fn parse_method_calls_reports_line() {
        let err = parse_method_calls("{\"method\":\"show\"}\nnot json").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn replay_reports_widget_calls() {
        let raw = json!({"storylyId": "abc"}).as_object().cloned().unwrap();
        let report = replay(
            &BridgeSettings::default(),
            raw,
            vec![
                MethodCall::new("show", Value::Null),
                MethodCall::new("unknown", Value::Null),
            ],
        );
        assert!(report.mounted);
        assert_eq!(report.width, Some(DEFAULT_DISPLAY_WIDTH));
        assert_eq!(report.widget_calls.len(), 2);
        assert_eq!(
            report.widget_calls[1],
            WidgetCall::Present { animated: false }
        );
    }

    #[test]
    fn inspect_without_id_has_null_configuration() {
        let report = inspect(&Map::new());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["configuration"], Value::Null);
        assert_eq!(value["theme"]["groupSize"], "large");
    }
}
