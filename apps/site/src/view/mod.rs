// View-state controllers. Platform-free: events go in through reducer-style
// methods, the platform is reached only through `Viewport`.

pub mod navigation;
pub mod page;
pub mod scroll;
pub mod subscription;
pub mod visibility;

pub use navigation::{MenuState, NavState, NavigationController, NavigationOutcome, Viewport};
pub use page::{PageController, PageEvent, PageView};
pub use scroll::{ScrollState, ScrollTracker, SCROLL_THRESHOLD_PX};
pub use subscription::{Listeners, Subscription};
pub use visibility::{IntersectionEvent, ObserverOptions, RevealedSet, VisibilityTracker};
