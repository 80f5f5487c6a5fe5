use crate::ports::{ChannelMessage, HostChannel, MethodCall, MethodCallHandler};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

/// In-process channel that records outbound messages and lets the caller play
/// the host side by delivering inbound calls.
#[derive(Default)]
pub struct InMemoryHostChannel {
    sent: RwLock<Vec<ChannelMessage>>,
    handler: RwLock<Option<Arc<dyn MethodCallHandler>>>,
}

impl InMemoryHostChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<ChannelMessage> {
        self.sent.read().clone()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Delivers a call as the host would. Returns `false` if no handler is
    /// registered.
    pub fn deliver(&self, call: MethodCall) -> bool {
        let handler = self.handler.read().clone();
        match handler {
            Some(handler) => {
                handler.on_method_call(call);
                true
            }
            None => false,
        }
    }
}

impl HostChannel for InMemoryHostChannel {
    fn invoke_method(&self, message: ChannelMessage) {
        trace!(method = %message.method, "outbound message");
        self.sent.write().push(message);
    }

    fn set_method_call_handler(&self, handler: Arc<dyn MethodCallHandler>) {
        *self.handler.write() = Some(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct Collect(Mutex<Vec<String>>);

    impl MethodCallHandler for Collect {
        fn on_method_call(&self, call: MethodCall) {
            self.0.lock().push(call.method);
        }
    }

    #[test]
    fn deliver_without_handler_reports_false() {
        let channel = InMemoryHostChannel::new();
        assert!(!channel.deliver(MethodCall::new("refresh", json!(null))));
    }

    #[test]
    fn records_sent_messages_and_routes_calls() {
        let channel = InMemoryHostChannel::new();
        let handler = Arc::new(Collect::default());
        channel.set_method_call_handler(handler.clone());
        assert!(channel.deliver(MethodCall::new("show", json!({}))));
        channel.invoke_method(ChannelMessage::new("storylyStoryPresented", json!(null)));
        assert_eq!(handler.0.lock().as_slice(), ["show".to_string()]);
        assert_eq!(channel.sent().len(), 1);
    }
}
