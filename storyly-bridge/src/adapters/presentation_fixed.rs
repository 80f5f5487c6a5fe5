use crate::ports::{MountRequest, PresentationContext};
use parking_lot::Mutex;
use tracing::info;

/// Presentation context with a fixed display width that remembers every
/// mount it was asked to perform.
pub struct FixedWidthPresentation {
    display_width: f64,
    mounts: Mutex<Vec<MountRequest>>,
}

impl FixedWidthPresentation {
    pub fn new(display_width: f64) -> Self {
        Self {
            display_width,
            mounts: Mutex::new(Vec::new()),
        }
    }

    pub fn mounts(&self) -> Vec<MountRequest> {
        self.mounts.lock().clone()
    }
}

impl PresentationContext for FixedWidthPresentation {
    fn display_width(&self) -> f64 {
        self.display_width
    }

    fn attach(&self, request: MountRequest) {
        info!(storyly_id = %request.storyly_id, width = request.width, "widget attached");
        self.mounts.lock().push(request);
    }
}
