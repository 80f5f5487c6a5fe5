pub mod controller;
pub mod dispatcher;
pub mod serializer;
pub mod translator;

pub use controller::{BridgeController, LifecycleHandle, LifecycleToken, MountOutcome};
pub use dispatcher::dispatch;
pub use translator::{translate, ConfigError, TranslatedConfig};
