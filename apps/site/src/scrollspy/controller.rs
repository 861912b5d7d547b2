//! Navigation controller — the single source of truth for the active section.
//!
//! One writer (the visibility batch handler), many readers (anyone holding a
//! `watch::Receiver`). The active section is derived state: recomputed from
//! visibility reports, never set arbitrarily except the initial default.

use std::collections::HashMap;

use tokio::sync::watch;
use tracing::debug;

use crate::models::section::{AnchorHandle, SectionId};
use crate::scrollspy::observer::{
    ObserverConfig, ScrollBehavior, ScrollSurface, SubscriptionId, VisibilityChange,
    VisibilityService,
};

pub struct NavController {
    /// Reactive cell for the active section. `active.send` happens only in
    /// `apply_batch`; everything else reads.
    active: watch::Sender<SectionId>,
    anchors: HashMap<SectionId, AnchorHandle>,
    subscriptions: HashMap<SectionId, SubscriptionId>,
    config: ObserverConfig,
}

impl NavController {
    /// A fresh controller with no mounted anchors. Active starts at the
    /// first section before any visibility event has fired.
    pub fn new() -> Self {
        let (active, _) = watch::channel(SectionId::About);
        NavController {
            active,
            anchors: HashMap::new(),
            subscriptions: HashMap::new(),
            config: ObserverConfig::default(),
        }
    }

    /// Registers a section's anchor as it mounts. Idempotent per section;
    /// remounting replaces the handle but never duplicates it.
    pub fn mount_anchor(&mut self, anchor: AnchorHandle) {
        self.anchors.insert(anchor.section, anchor);
    }

    /// Currently active section.
    pub fn active_section(&self) -> SectionId {
        *self.active.borrow()
    }

    /// A receiver over the active section for readers (the sidebar render
    /// step). Readers never write.
    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.active.subscribe()
    }

    /// Registers a visibility observation for every mounted anchor.
    ///
    /// Exactly one live subscription exists per anchor: sections already
    /// observed are left alone, so repeated calls (re-renders) never
    /// double-register. Anchors not yet mounted are skipped for this pass;
    /// the startup sequencing runs this after all sections mount, so a miss
    /// here is a transient race that the next pass resolves.
    pub fn observe_visibility(&mut self, service: &mut dyn VisibilityService) {
        for section in SectionId::ALL {
            if self.subscriptions.contains_key(&section) {
                continue;
            }
            let Some(anchor) = self.anchors.get(&section) else {
                debug!(%section, "anchor not mounted yet, skipping observation pass");
                continue;
            };
            let subscription = service.observe(anchor, &self.config);
            self.subscriptions.insert(section, subscription);
        }
    }

    /// Applies one batch of visibility changes atomically.
    ///
    /// Every entry reported intersecting sets the active section, in report
    /// order — when several sections intersect in one batch the last one
    /// wins. This is deliberately not a most-visible heuristic.
    pub fn apply_batch(&mut self, batch: &[VisibilityChange]) {
        for change in batch {
            if change.is_intersecting {
                self.active.send_replace(change.section);
            }
        }
    }

    /// Smooth-scrolls the viewport to a section, addressed by its untyped
    /// identifier (the click payload).
    ///
    /// Unknown identifiers and unmounted anchors are silent no-ops. This
    /// never writes the active section — the scroll's visibility batch
    /// does, once the target crosses the threshold, so the clicked and
    /// highlighted items may briefly disagree.
    pub fn scroll_to_section(&self, raw_id: &str, surface: &mut dyn ScrollSurface) {
        let Some(section) = SectionId::parse(raw_id) else {
            debug!(raw_id, "scroll request for unknown section, ignoring");
            return;
        };
        if let Some(anchor) = self.anchors.get(&section) {
            surface.scroll_to(anchor, ScrollBehavior::Smooth);
        }
    }

    /// Releases every live observation. Must run before the anchors are
    /// dropped so no observation outlives its anchor. The controller stays
    /// usable afterwards; a later `observe_visibility` issues fresh
    /// subscriptions.
    pub fn teardown(&mut self, service: &mut dyn VisibilityService) {
        for (_, subscription) in self.subscriptions.drain() {
            service.release(subscription);
        }
    }

    /// Number of live subscriptions, for observability and tests.
    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrollspy::observer::VISIBILITY_THRESHOLD;
    use crate::scrollspy::simulator::SimulatedViewport;

    fn mounted_controller() -> NavController {
        let mut controller = NavController::new();
        for section in SectionId::ALL {
            controller.mount_anchor(AnchorHandle::for_section(section));
        }
        controller
    }

    fn intersecting(section: SectionId, fraction: f32) -> VisibilityChange {
        VisibilityChange {
            section,
            is_intersecting: true,
            visible_fraction: fraction,
        }
    }

    fn leaving(section: SectionId) -> VisibilityChange {
        VisibilityChange {
            section,
            is_intersecting: false,
            visible_fraction: 0.0,
        }
    }

    // ── initial state ───────────────────────────────────────────────────────

    #[test]
    fn test_initial_active_is_about_before_any_event() {
        let controller = NavController::new();
        assert_eq!(controller.active_section(), SectionId::About);
    }

    // ── observe_visibility ──────────────────────────────────────────────────

    #[test]
    fn test_observe_registers_one_subscription_per_anchor() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);
        assert_eq!(controller.live_subscriptions(), 6);
        assert_eq!(viewport.observe_calls(), 6);
    }

    #[test]
    fn test_reobserve_never_duplicates_subscriptions() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);
        controller.observe_visibility(&mut viewport); // re-render
        assert_eq!(controller.live_subscriptions(), 6);
        assert_eq!(viewport.observe_calls(), 6);
    }

    #[test]
    fn test_unmounted_anchor_is_skipped_then_picked_up() {
        let mut controller = NavController::new();
        controller.mount_anchor(AnchorHandle::for_section(SectionId::About));
        let mut viewport = SimulatedViewport::new();

        controller.observe_visibility(&mut viewport);
        assert_eq!(controller.live_subscriptions(), 1);

        // Remaining sections mount; the next pass registers only them.
        for section in SectionId::ALL {
            controller.mount_anchor(AnchorHandle::for_section(section));
        }
        controller.observe_visibility(&mut viewport);
        assert_eq!(controller.live_subscriptions(), 6);
        assert_eq!(viewport.observe_calls(), 6);
    }

    #[test]
    fn test_observation_uses_threshold_config() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);
        for config in viewport.registered_configs() {
            assert_eq!(config.threshold, VISIBILITY_THRESHOLD);
            assert_eq!(config.root_margin_px, 0);
        }
    }

    // ── apply_batch ─────────────────────────────────────────────────────────

    #[test]
    fn test_intersecting_entry_sets_active() {
        let mut controller = mounted_controller();
        controller.apply_batch(&[intersecting(SectionId::Projects, 0.5)]);
        assert_eq!(controller.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_last_intersecting_entry_wins_within_batch() {
        let mut controller = mounted_controller();
        controller.apply_batch(&[
            intersecting(SectionId::Experience, 0.9),
            intersecting(SectionId::Projects, 0.31),
        ]);
        // Report order decides, not visible fraction.
        assert_eq!(controller.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_non_intersecting_entries_never_clear_active() {
        let mut controller = mounted_controller();
        controller.apply_batch(&[intersecting(SectionId::Skills, 0.4)]);
        controller.apply_batch(&[leaving(SectionId::Skills)]);
        assert_eq!(controller.active_section(), SectionId::Skills);
    }

    #[test]
    fn test_active_is_always_a_known_section() {
        let mut controller = mounted_controller();
        let batches: Vec<Vec<VisibilityChange>> = vec![
            vec![],
            vec![leaving(SectionId::About)],
            vec![intersecting(SectionId::Education, 0.3), leaving(SectionId::About)],
            vec![intersecting(SectionId::Certifications, 1.0)],
        ];
        for batch in &batches {
            controller.apply_batch(batch);
            assert!(SectionId::ALL.contains(&controller.active_section()));
        }
    }

    #[test]
    fn test_watch_receiver_sees_updates() {
        let mut controller = mounted_controller();
        let receiver = controller.subscribe();
        controller.apply_batch(&[intersecting(SectionId::Education, 0.6)]);
        assert_eq!(*receiver.borrow(), SectionId::Education);
    }

    // ── scroll_to_section ───────────────────────────────────────────────────

    #[test]
    fn test_scroll_issues_smooth_request_for_known_id() {
        let controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.scroll_to_section("skills", &mut viewport);
        let scrolls = viewport.scroll_requests();
        assert_eq!(scrolls.len(), 1);
        assert_eq!(scrolls[0].0.section, SectionId::Skills);
        assert_eq!(scrolls[0].1, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_scroll_unknown_id_is_noop() {
        let mut controller = mounted_controller();
        controller.apply_batch(&[intersecting(SectionId::Projects, 0.5)]);
        let mut viewport = SimulatedViewport::new();
        controller.scroll_to_section("contact", &mut viewport);
        assert!(viewport.scroll_requests().is_empty());
        assert_eq!(controller.active_section(), SectionId::Projects);
    }

    #[test]
    fn test_scroll_unmounted_anchor_is_noop() {
        let controller = NavController::new(); // nothing mounted
        let mut viewport = SimulatedViewport::new();
        controller.scroll_to_section("skills", &mut viewport);
        assert!(viewport.scroll_requests().is_empty());
    }

    #[test]
    fn test_scroll_does_not_write_active() {
        let controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.scroll_to_section("certifications", &mut viewport);
        // Active only moves once the visibility batch lands.
        assert_eq!(controller.active_section(), SectionId::About);
    }

    // ── click → settle → active ─────────────────────────────────────────────

    #[test]
    fn test_click_settle_activates_target_for_every_section() {
        for section in SectionId::ALL {
            let mut controller = mounted_controller();
            let mut viewport = SimulatedViewport::new();
            controller.observe_visibility(&mut viewport);

            controller.scroll_to_section(section.as_str(), &mut viewport);
            let batch = viewport.settle();
            assert!(!batch.is_empty(), "settled scroll must produce a batch");
            controller.apply_batch(&batch);

            assert_eq!(controller.active_section(), section);
            let target = batch.iter().find(|c| c.section == section).unwrap();
            assert!(target.visible_fraction >= VISIBILITY_THRESHOLD);
        }
    }

    #[test]
    fn test_second_click_supersedes_first() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);

        controller.scroll_to_section("projects", &mut viewport);
        controller.scroll_to_section("education", &mut viewport);
        let batch = viewport.settle();
        controller.apply_batch(&batch);

        assert_eq!(controller.active_section(), SectionId::Education);
    }

    // ── teardown ────────────────────────────────────────────────────────────

    #[test]
    fn test_teardown_releases_every_subscription() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);
        controller.teardown(&mut viewport);

        assert_eq!(controller.live_subscriptions(), 0);
        assert_eq!(viewport.observe_calls(), viewport.release_calls());
        assert_eq!(viewport.live_observations(), 0);
    }

    #[test]
    fn test_observe_after_teardown_registers_fresh_subscriptions() {
        let mut controller = mounted_controller();
        let mut viewport = SimulatedViewport::new();
        controller.observe_visibility(&mut viewport);
        controller.teardown(&mut viewport);
        controller.observe_visibility(&mut viewport);

        assert_eq!(controller.live_subscriptions(), 6);
        assert_eq!(viewport.observe_calls(), 12);
        assert_eq!(viewport.release_calls(), 6);
        assert_eq!(viewport.live_observations(), 6);
    }
}
