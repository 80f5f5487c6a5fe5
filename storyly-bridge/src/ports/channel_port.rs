use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Inbound call from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Arguments as a mapping, if the host sent one.
    pub fn arguments_map(&self) -> Option<&Map<String, Value>> {
        self.arguments.as_object()
    }
}

/// Outbound message to the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelMessage {
    pub method: String,
    pub arguments: Value,
}

impl ChannelMessage {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: MethodCall);
}

/// Bidirectional host transport. Sends are fire-and-forget.
pub trait HostChannel: Send + Sync {
    /// Must not call back into the registered handler before returning. The
    /// widget slot stays locked while a host command runs, so a widget event
    /// answered synchronously with another command would deadlock.
    fn invoke_method(&self, message: ChannelMessage);

    /// Replaces any previously registered handler.
    fn set_method_call_handler(&self, handler: Arc<dyn MethodCallHandler>);
}
