// Detail modal state: which component is open, loading phase, active tab.
use crate::model::{ComponentKind, SelectedComponent};
use crate::state::camera::Camera;

/// Fixed delay before the detail content is revealed.
pub const LOADING_DELAY_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Code,
    Install,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub selected: Option<SelectedComponent>,
    pub phase: DetailPhase,
    pub tab: DetailTab,
    /// Bumped on every open; async results from an older open are dropped.
    pub generation: u64,
    /// Closed, but the camera has not been handed back yet.
    restore_pending: bool,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            selected: None,
            phase: DetailPhase::Loading,
            tab: DetailTab::default(),
            generation: 0,
            restore_pending: false,
        }
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects `kind` and locks the camera. A restore still pending from the
    /// previous close lands first, so the new snapshot is the restored view.
    /// Returns the generation of this open.
    pub fn open(&mut self, kind: ComponentKind, camera: &mut Camera) -> u64 {
        self.settle(camera);
        camera.enter_locked();
        self.generation += 1;
        self.selected = Some(SelectedComponent::from_kind(kind));
        self.phase = DetailPhase::Loading;
        self.tab = DetailTab::default();
        log::info!("opened {}", kind.id());
        self.generation
    }

    /// Clears the selection. The camera stays locked until [`ModalState::settle`]
    /// runs after the settle delay.
    pub fn close(&mut self) -> Option<SelectedComponent> {
        let prev = self.selected.take();
        if prev.is_some() {
            self.generation += 1;
            self.restore_pending = true;
        }
        prev
    }

    pub fn restore_pending(&self) -> bool {
        self.restore_pending
    }

    /// Hands the camera back after a close. Returns whether anything was restored.
    pub fn settle(&mut self, camera: &mut Camera) -> bool {
        if !self.restore_pending {
            return false;
        }
        self.restore_pending = false;
        camera.exit_locked();
        true
    }

    /// Whether a result tagged with `generation` still belongs to the open modal.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_open() && self.generation == generation
    }

    pub fn reveal(&mut self, generation: u64) {
        if self.is_current(generation) {
            self.phase = DetailPhase::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::camera::{Point, Viewport};

    fn camera() -> Camera {
        let mut cam = Camera::default();
        cam.set_viewport(Some(Viewport {
            width: 1024.0,
            height: 768.0,
        }));
        cam.focal_zoom(Point::new(3100.0, 2950.0), 0.9, 0);
        cam
    }

    #[test]
    fn open_then_close_round_trips_camera() {
        let mut cam = camera();
        let before = cam.transform;
        let mut modal = ModalState::default();
        modal.open(ComponentKind::PricingCards, &mut cam);
        assert!(cam.is_locked());
        assert_eq!(modal.selected.as_ref().unwrap().name, "Pricing Cards");
        assert!(modal.close().is_some());
        assert!(!modal.is_open());
        assert!(cam.is_locked());
        assert!(modal.settle(&mut cam));
        assert!(!cam.is_locked());
        assert_eq!(cam.transform, before);
        assert!(!modal.settle(&mut cam));
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut cam = camera();
        let mut modal = ModalState::default();
        let first = modal.open(ComponentKind::HeroGradient, &mut cam);
        modal.close();
        modal.settle(&mut cam);
        modal.reveal(first);
        assert!(!modal.is_current(first));

        let second = modal.open(ComponentKind::CtaSplit, &mut cam);
        modal.reveal(first);
        assert_eq!(modal.phase, DetailPhase::Loading);
        modal.reveal(second);
        assert_eq!(modal.phase, DetailPhase::Ready);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut modal = ModalState::default();
        assert!(modal.close().is_none());
        assert_eq!(modal.generation, 0);
        assert!(!modal.restore_pending());
    }

    #[test]
    fn reopen_before_settle_restores_first() {
        let mut cam = camera();
        let before = cam.transform;
        let mut modal = ModalState::default();
        modal.open(ComponentKind::HeroMinimalism, &mut cam);
        modal.close();
        assert!(modal.restore_pending());

        // the view moved while the first modal was up
        cam.transform.scale = 1.7;
        cam.transform.position_x = -900.0;

        modal.open(ComponentKind::BackgroundGrid, &mut cam);
        assert!(!modal.restore_pending());
        assert!(cam.is_locked());
        assert_eq!(cam.transform, before);
        assert_eq!(cam.snapshot(), Some(before));

        modal.close();
        assert!(modal.settle(&mut cam));
        assert_eq!(cam.transform, before);
        assert_eq!(cam.snapshot(), None);
    }
}
