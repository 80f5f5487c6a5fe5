use crate::domain::StorylyId;

#[derive(Clone, Debug, PartialEq)]
pub struct MountRequest {
    pub storyly_id: StorylyId,
    pub width: f64,
}

/// Host view tree the widget attaches to.
pub trait PresentationContext {
    fn display_width(&self) -> f64;

    fn attach(&self, request: MountRequest);
}
