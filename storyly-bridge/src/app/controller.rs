use super::dispatcher::dispatch;
use super::serializer;
use super::translator::translate;
use crate::domain::{Story, StoryComponent, StoryGroup, StorylyId, WidgetEvent};
use crate::ports::{
    HostChannel, MethodCall, MethodCallHandler, MountRequest, PresentationContext, StoryWidgetPort,
    WidgetEventSink, WidgetFactory, WidgetInit,
};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Owning side of a liveness flag. Invalidated on teardown or drop.
pub struct LifecycleToken {
    live: Arc<AtomicBool>,
}

impl LifecycleToken {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            live: Arc::clone(&self.live),
        }
    }

    pub fn invalidate(&self) {
        self.live.store(false, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

impl Default for LifecycleToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LifecycleToken {
    fn drop(&mut self) {
        self.invalidate();
    }
}

/// Observer side of a [`LifecycleToken`].
#[derive(Clone, Debug)]
pub struct LifecycleHandle {
    live: Arc<AtomicBool>,
}

impl LifecycleHandle {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted { storyly_id: StorylyId },
    /// No usable `storylyId`; nothing was created.
    Skipped,
    TornDown,
}

type WidgetSlot<W> = Arc<Mutex<Option<W>>>;

/// Owns one widget per mount and bridges it to the host channel.
pub struct BridgeController<F>
where
    F: WidgetFactory,
{
    factory: F,
    channel: Arc<dyn HostChannel>,
    args: Map<String, Value>,
    slot: WidgetSlot<F::Widget>,
    lifecycle: LifecycleToken,
    mount_lifecycle: Option<LifecycleToken>,
}

impl<F> BridgeController<F>
where
    F: WidgetFactory,
{
    /// Registers the inbound command handler immediately; commands that arrive
    /// before the first mount are dropped.
    pub fn new(factory: F, channel: Arc<dyn HostChannel>, args: Map<String, Value>) -> Self {
        let slot: WidgetSlot<F::Widget> = Arc::new(Mutex::new(None));
        let lifecycle = LifecycleToken::new();
        channel.set_method_call_handler(Arc::new(CommandRouter {
            slot: Arc::downgrade(&slot),
            lifecycle: lifecycle.handle(),
        }));
        Self {
            factory,
            channel,
            args,
            slot,
            lifecycle,
            mount_lifecycle: None,
        }
    }

    /// Builds a fresh widget and attaches it; any previous widget is dropped.
    pub fn mount(&mut self, presentation: &dyn PresentationContext) -> MountOutcome {
        if !self.lifecycle.is_live() {
            debug!("mount after teardown ignored");
            return MountOutcome::TornDown;
        }

        let translated = translate(&self.args);
        let Some(configuration) = translated.configuration else {
            return MountOutcome::Skipped;
        };

        if let Some(previous) = self.mount_lifecycle.take() {
            previous.invalidate();
        }
        let mount_lifecycle = LifecycleToken::new();
        let events: Arc<dyn WidgetEventSink> = Arc::new(BridgeEventSink {
            channel: Arc::clone(&self.channel),
            lifecycle: mount_lifecycle.handle(),
        });

        let widget = self.factory.create(WidgetInit {
            configuration: &configuration,
            theme: &translated.theme,
            events,
            presentation,
        });
        presentation.attach(MountRequest {
            storyly_id: configuration.id().clone(),
            width: presentation.display_width(),
        });

        let previous = self.slot.lock().replace(widget);
        drop(previous);
        self.mount_lifecycle = Some(mount_lifecycle);

        info!(storyly_id = %configuration.id(), "story widget mounted");
        MountOutcome::Mounted {
            storyly_id: configuration.id().clone(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.lock().is_some()
    }

    pub fn lifecycle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    /// Drops the widget. Later commands and widget events become no-ops.
    pub fn teardown(&mut self) {
        if !self.lifecycle.is_live() {
            return;
        }
        self.lifecycle.invalidate();
        if let Some(mount_lifecycle) = self.mount_lifecycle.take() {
            mount_lifecycle.invalidate();
        }
        let widget = self.slot.lock().take();
        drop(widget);
        info!("story widget torn down");
    }
}

impl<F> Drop for BridgeController<F>
where
    F: WidgetFactory,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Inbound handler registered with the channel. Holds the widget weakly.
struct CommandRouter<W> {
    slot: Weak<Mutex<Option<W>>>,
    lifecycle: LifecycleHandle,
}

impl<W> MethodCallHandler for CommandRouter<W>
where
    W: StoryWidgetPort + 'static,
{
    fn on_method_call(&self, call: MethodCall) {
        if !self.lifecycle.is_live() {
            debug!(method = %call.method, "command after teardown ignored");
            return;
        }
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        let mut guard = slot.lock();
        match guard.as_mut() {
            Some(widget) => {
                dispatch(&call.method, call.arguments_map(), widget);
            }
            None => debug!(method = %call.method, "command before mount ignored"),
        }
    }
}

struct BridgeEventSink {
    channel: Arc<dyn HostChannel>,
    lifecycle: LifecycleHandle,
}

impl BridgeEventSink {
    fn emit(&self, event: WidgetEvent) {
        if !self.lifecycle.is_live() {
            debug!(method = event.method(), "event from retired widget dropped");
            return;
        }
        self.channel.invoke_method(serializer::serialize_event(&event));
    }
}

impl WidgetEventSink for BridgeEventSink {
    fn loaded(&self, groups: Vec<StoryGroup>) {
        self.emit(WidgetEvent::Loaded { groups });
    }

    fn load_failed(&self, message: String) {
        self.emit(WidgetEvent::LoadFailed { message });
    }

    fn action_clicked(&self, story: Story) -> bool {
        self.emit(WidgetEvent::ActionClicked { story });
        serializer::ACTION_CLICK_HANDLED
    }

    fn story_presented(&self) {
        self.emit(WidgetEvent::StoryPresented);
    }

    fn story_dismissed(&self) {
        self.emit(WidgetEvent::StoryDismissed);
    }

    fn user_interacted(&self, group: StoryGroup, story: Story, component: StoryComponent) {
        self.emit(WidgetEvent::UserInteracted {
            group,
            story,
            component,
        });
    }
}
