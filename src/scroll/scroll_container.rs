use super::observer::{ObserveError, ScrollObserver};
use super::scroll_geometry::{ScrollBehavior, ScrollGeometry};

/// Common interface for horizontally scrollable containers
///
/// The carousel view never moves the offset itself; it asks the container,
/// which owns clamping and animation, and reads geometry back.
pub trait ScrollContainer {
    /// Live geometry, or `None` while the container cannot be measured
    fn geometry(&self) -> Option<ScrollGeometry>;

    /// Scroll by `delta` units. The container clamps to its natural bounds.
    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior);

    /// Register for scroll notifications
    fn observe(&mut self) -> Result<ScrollObserver, ObserveError>;

    /// Number of observers still attached
    fn observer_count(&self) -> usize;
}
