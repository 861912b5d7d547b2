//! Platform seams for the scroll-spy — visibility observation and smooth scroll.
//!
//! The navigation controller depends only on these two traits. In the
//! browser the contract is fulfilled by IntersectionObserver and
//! `scrollIntoView` (see `client_script`); in tests by the deterministic
//! `SimulatedViewport`. Swapping the backend never touches the controller.

use serde::Serialize;
use uuid::Uuid;

use crate::models::section::{AnchorHandle, SectionId};

/// The fraction of an anchor's height that must be in the viewport for it
/// to count as intersecting.
pub const VISIBILITY_THRESHOLD: f32 = 0.3;

/// Registration parameters for one visibility observation.
///
/// The observation root is always the whole visible window; there is no
/// per-anchor override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f32,
    pub root_margin_px: i32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        ObserverConfig {
            threshold: VISIBILITY_THRESHOLD,
            root_margin_px: 0,
        }
    }
}

/// Opaque handle for one live observation. Never inspected, only released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        SubscriptionId(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in a visibility batch, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Fraction of the anchor's height inside the viewport at report time.
    pub visible_fraction: f32,
}

/// Visibility observation service — `observe` and `release` must pair 1:1
/// over an anchor's lifetime; no observation may outlive its anchor.
pub trait VisibilityService {
    fn observe(&mut self, anchor: &AnchorHandle, config: &ObserverConfig) -> SubscriptionId;
    fn release(&mut self, subscription: SubscriptionId);
}

/// Motion semantics for a requested scroll. The controller only ever asks
/// for a gradual animated scroll, never an instantaneous jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Viewport scroll service. Fire-and-forget: no completion signal, no
/// cancellation; a second request simply supersedes the first at the
/// platform level.
pub trait ScrollSurface {
    fn scroll_to(&mut self, anchor: &AnchorHandle, behavior: ScrollBehavior);
}
