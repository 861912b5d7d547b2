//! Simulated viewport — deterministic double for both platform seams.
//!
//! Implements `VisibilityService` and `ScrollSurface` with no I/O and no
//! timing: observations are counted, scroll requests recorded, and
//! `settle()` synthesizes the visibility batch a finished smooth scroll
//! would deliver. Overlapping scroll requests supersede each other exactly
//! as the platform contract says, so `settle()` reports only the last
//! target.

use std::collections::HashMap;

use crate::models::section::{AnchorHandle, SectionId};
use crate::scrollspy::observer::{
    ObserverConfig, ScrollBehavior, ScrollSurface, SubscriptionId, VisibilityChange,
    VisibilityService,
};

#[derive(Default)]
pub struct SimulatedViewport {
    observations: HashMap<SubscriptionId, SectionId>,
    registered_configs: Vec<ObserverConfig>,
    observe_calls: usize,
    release_calls: usize,
    scroll_requests: Vec<(AnchorHandle, ScrollBehavior)>,
    /// Section currently filling the viewport, set by the last `settle()`.
    settled: Option<SectionId>,
    /// Scroll targets issued since the last `settle()`.
    pending_targets: Vec<SectionId>,
}

impl SimulatedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers the batch a completed smooth scroll would produce: the
    /// previously settled section leaves, the last requested target
    /// intersects fully. Sections without a live observation are never
    /// reported. With no pending scroll the batch is empty.
    pub fn settle(&mut self) -> Vec<VisibilityChange> {
        let Some(target) = self.pending_targets.pop() else {
            return Vec::new();
        };
        self.pending_targets.clear();

        let mut batch = Vec::new();
        if let Some(previous) = self.settled {
            if previous != target && self.is_observed(previous) {
                batch.push(VisibilityChange {
                    section: previous,
                    is_intersecting: false,
                    visible_fraction: 0.0,
                });
            }
        }
        if self.is_observed(target) {
            batch.push(VisibilityChange {
                section: target,
                is_intersecting: true,
                visible_fraction: 1.0,
            });
        }
        self.settled = Some(target);
        batch
    }

    pub fn observe_calls(&self) -> usize {
        self.observe_calls
    }

    pub fn release_calls(&self) -> usize {
        self.release_calls
    }

    pub fn live_observations(&self) -> usize {
        self.observations.len()
    }

    pub fn registered_configs(&self) -> &[ObserverConfig] {
        &self.registered_configs
    }

    pub fn scroll_requests(&self) -> &[(AnchorHandle, ScrollBehavior)] {
        &self.scroll_requests
    }

    fn is_observed(&self, section: SectionId) -> bool {
        self.observations.values().any(|&s| s == section)
    }
}

impl VisibilityService for SimulatedViewport {
    fn observe(&mut self, anchor: &AnchorHandle, config: &ObserverConfig) -> SubscriptionId {
        self.observe_calls += 1;
        self.registered_configs.push(*config);
        let id = SubscriptionId::new();
        self.observations.insert(id, anchor.section);
        id
    }

    fn release(&mut self, subscription: SubscriptionId) {
        self.release_calls += 1;
        self.observations.remove(&subscription);
    }
}

impl ScrollSurface for SimulatedViewport {
    fn scroll_to(&mut self, anchor: &AnchorHandle, behavior: ScrollBehavior) {
        self.scroll_requests.push((anchor.clone(), behavior));
        self.pending_targets.push(anchor.section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_viewport() -> SimulatedViewport {
        let mut viewport = SimulatedViewport::new();
        let config = ObserverConfig::default();
        for section in SectionId::ALL {
            viewport.observe(&AnchorHandle::for_section(section), &config);
        }
        viewport
    }

    #[test]
    fn test_settle_without_scroll_is_empty() {
        let mut viewport = observed_viewport();
        assert!(viewport.settle().is_empty());
    }

    #[test]
    fn test_settle_reports_target_intersecting() {
        let mut viewport = observed_viewport();
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Skills),
            ScrollBehavior::Smooth,
        );
        let batch = viewport.settle();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].section, SectionId::Skills);
        assert!(batch[0].is_intersecting);
        assert_eq!(batch[0].visible_fraction, 1.0);
    }

    #[test]
    fn test_settle_reports_previous_section_leaving() {
        let mut viewport = observed_viewport();
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Projects),
            ScrollBehavior::Smooth,
        );
        viewport.settle();
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Education),
            ScrollBehavior::Smooth,
        );
        let batch = viewport.settle();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].section, SectionId::Projects);
        assert!(!batch[0].is_intersecting);
        assert_eq!(batch[1].section, SectionId::Education);
        assert!(batch[1].is_intersecting);
    }

    #[test]
    fn test_overlapping_scrolls_supersede() {
        let mut viewport = observed_viewport();
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Experience),
            ScrollBehavior::Smooth,
        );
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Certifications),
            ScrollBehavior::Smooth,
        );
        let batch = viewport.settle();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].section, SectionId::Certifications);
        // A later settle has nothing left to deliver.
        assert!(viewport.settle().is_empty());
    }

    #[test]
    fn test_unobserved_target_produces_no_report() {
        let mut viewport = SimulatedViewport::new();
        viewport.scroll_to(
            &AnchorHandle::for_section(SectionId::Skills),
            ScrollBehavior::Smooth,
        );
        assert!(viewport.settle().is_empty());
    }

    #[test]
    fn test_release_removes_observation() {
        let mut viewport = SimulatedViewport::new();
        let id = viewport.observe(
            &AnchorHandle::for_section(SectionId::About),
            &ObserverConfig::default(),
        );
        assert_eq!(viewport.live_observations(), 1);
        viewport.release(id);
        assert_eq!(viewport.live_observations(), 0);
        assert_eq!(viewport.observe_calls(), 1);
        assert_eq!(viewport.release_calls(), 1);
    }
}
