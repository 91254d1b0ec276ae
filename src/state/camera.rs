// Camera state for the infinite canvas: pan/zoom transform, locked mode while a
// detail view is open, and the one-shot auto-centering on first load.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Size of the visible viewport in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Affine map from canvas coordinates to screen coordinates:
/// `screen = canvas * scale + position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position_x: f64,
    pub position_y: f64,
    pub scale: f64,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            scale: 1.0,
        }
    }
}

impl CameraTransform {
    #[cfg(test)]
    pub fn canvas_to_screen(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.position_x,
            p.y * self.scale + self.position_y,
        )
    }

    pub fn screen_to_canvas(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.position_x) / self.scale,
            (p.y - self.position_y) / self.scale,
        )
    }

    /// CSS `transform` value for the canvas layer.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.position_x, self.position_y, self.scale
        )
    }
}

/// Tuning for pan/zoom feel. The wheel numbers were picked by hand for trackpads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Upper bound for the auto-fit scale on first load.
    pub fit_max_scale: f64,
    pub wheel_sensitivity: f64,
    /// Per-axis cap on a single wheel pan, after sensitivity.
    pub max_wheel_delta: f64,
    /// Deltas at or below this magnitude are treated as noise.
    pub dead_zone: f64,
    pub line_height_px: f64,
    pub zoom_step: f64,
    pub key_pan_step: f64,
    pub focus_duration_ms: u32,
    pub settle_delay_ms: u32,
    pub polish_delay_ms: u32,
    pub polish_factor: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.25,
            max_scale: 2.0,
            fit_max_scale: 1.125,
            wheel_sensitivity: 1.0,
            max_wheel_delta: 150.0,
            dead_zone: 0.5,
            line_height_px: 16.0,
            zoom_step: 1.2,
            key_pan_step: 80.0,
            focus_duration_ms: 400,
            settle_delay_ms: 100,
            polish_delay_ms: 600,
            polish_factor: 1.05,
        }
    }
}

impl CameraConfig {
    pub fn clamp_scale(&self, s: f64) -> f64 {
        if s.is_nan() {
            return self.min_scale;
        }
        s.clamp(self.min_scale, self.max_scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Canvas visible; pan and zoom enabled.
    Free,
    /// Detail view open; canvas input ignored.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoCenter {
    Pending,
    /// Initial fit applied, polish step still to come.
    Fitted,
    Done,
    /// User input arrived first; never auto-center again this session.
    Disabled,
}

/// `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
}

/// Fit `content` inside `viewport`, never above `cap`.
pub fn fit_scale(viewport: Viewport, content: Rect, cap: f64) -> f64 {
    if content.width <= 0.0 || content.height <= 0.0 {
        return cap;
    }
    (viewport.width / content.width)
        .min(viewport.height / content.height)
        .min(cap)
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub config: CameraConfig,
    pub transform: CameraTransform,
    pub mode: CameraMode,
    pub auto_center: AutoCenter,
    /// CSS transition length for the next render; 0 = jump.
    pub transition_ms: u32,
    pub panning: bool,
    pub last_x: f64,
    pub last_y: f64,
    /// Pointer distance covered by the current/last drag.
    pub drag_travel: f64,
    snapshot: Option<CameraTransform>,
    viewport: Option<Viewport>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            transform: CameraTransform::default(),
            mode: CameraMode::Free,
            auto_center: AutoCenter::Pending,
            transition_ms: 0,
            panning: false,
            last_x: 0.0,
            last_y: 0.0,
            drag_travel: 0.0,
            snapshot: None,
            viewport: None,
        }
    }

    /// `None` while the canvas element is not mounted; mutations are ignored then.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<CameraTransform> {
        self.snapshot
    }

    pub fn is_locked(&self) -> bool {
        self.mode == CameraMode::Locked
    }

    /// Puts `target` (canvas coords) at the viewport centre at `next_scale`.
    /// Every zoom goes through here.
    pub fn focal_zoom(&mut self, target: Point, next_scale: f64, duration_ms: u32) {
        let Some(vp) = self.viewport else {
            return;
        };
        let scale = self.config.clamp_scale(next_scale);
        let c = vp.center();
        self.transform = CameraTransform {
            position_x: c.x - target.x * scale,
            position_y: c.y - target.y * scale,
            scale,
        };
        self.transition_ms = duration_ms;
    }

    /// Canvas point currently under the viewport centre.
    pub fn focus_point(&self) -> Option<Point> {
        self.viewport
            .map(|vp| self.transform.screen_to_canvas(vp.center()))
    }

    pub fn zoom_by(&mut self, factor: f64) {
        if self.is_locked() {
            return;
        }
        let Some(focus) = self.focus_point() else {
            return;
        };
        let next = self.transform.scale * factor;
        self.focal_zoom(focus, next, self.config.focus_duration_ms);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / self.config.zoom_step);
    }

    /// Moves the canvas by a screen-space delta. Sub-threshold noise is dropped.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if self.viewport.is_none() || self.is_locked() {
            return;
        }
        let dz = self.config.dead_zone;
        let dx = if dx.abs() <= dz { 0.0 } else { dx };
        let dy = if dy.abs() <= dz { 0.0 } else { dy };
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.transform.position_x += dx;
        self.transform.position_y += dy;
        self.transition_ms = 0;
    }

    /// Wheel/trackpad scroll pans the canvas; each axis is capped per event.
    pub fn apply_wheel(&mut self, input: WheelInput) {
        let Some(vp) = self.viewport else {
            return;
        };
        if self.is_locked() {
            return;
        }
        let unit = match input.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => self.config.line_height_px,
            DeltaMode::Page => vp.height,
        };
        let cap = self.config.max_wheel_delta;
        let k = self.config.wheel_sensitivity * unit;
        let dx = (input.delta_x * k).clamp(-cap, cap);
        let dy = (input.delta_y * k).clamp(-cap, cap);
        // scrolling down moves the content up
        self.pan_by(-dx, -dy);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.is_locked() {
            return;
        }
        self.panning = true;
        self.last_x = x;
        self.last_y = y;
        self.drag_travel = 0.0;
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if !self.panning {
            return;
        }
        let (dx, dy) = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        self.drag_travel += dx.abs() + dy.abs();
        self.pan_by(dx, dy);
    }

    pub fn end_drag(&mut self) {
        self.panning = false;
    }

    /// True when the last pointer press moved far enough to count as a pan,
    /// so the click that ends it should not open anything.
    pub fn was_drag(&self) -> bool {
        self.drag_travel > 4.0
    }

    /// Animated fit of `content`, used by the "Fit" control.
    pub fn fit_to(&mut self, content: Rect) {
        if self.is_locked() {
            return;
        }
        let Some(vp) = self.viewport else {
            return;
        };
        let scale = fit_scale(vp, content, self.config.fit_max_scale);
        self.focal_zoom(content.center(), scale, self.config.focus_duration_ms);
    }

    /// Saves the current transform and stops reacting to canvas input.
    /// A second call while locked keeps the first snapshot.
    pub fn enter_locked(&mut self) {
        if self.is_locked() {
            return;
        }
        self.snapshot = Some(self.transform);
        self.mode = CameraMode::Locked;
        self.panning = false;
    }

    /// Puts the saved transform back verbatim and clears it.
    pub fn exit_locked(&mut self) {
        if !self.is_locked() {
            return;
        }
        self.mode = CameraMode::Free;
        if let Some(saved) = self.snapshot.take() {
            if self.viewport.is_some() {
                self.transform = saved;
                self.transition_ms = 0;
            }
        }
    }

    /// Any pointer, wheel, touch or key input. Cancels auto-centering if it has
    /// not finished yet.
    pub fn note_user_input(&mut self) {
        if matches!(self.auto_center, AutoCenter::Pending | AutoCenter::Fitted) {
            self.auto_center = AutoCenter::Disabled;
        }
    }

    /// First-load fit. Returns whether it was applied.
    pub fn auto_center_initial(&mut self, content: Rect) -> bool {
        if self.auto_center != AutoCenter::Pending {
            return false;
        }
        let Some(vp) = self.viewport else {
            return false;
        };
        let scale = fit_scale(vp, content, self.config.fit_max_scale);
        self.focal_zoom(content.center(), scale, 0);
        self.auto_center = AutoCenter::Fitted;
        true
    }

    /// The delayed cosmetic zoom step after the initial fit.
    pub fn auto_center_polish(&mut self) -> bool {
        if self.auto_center != AutoCenter::Fitted {
            return false;
        }
        let Some(focus) = self.focus_point() else {
            return false;
        };
        let next = self.transform.scale * self.config.polish_factor;
        self.focal_zoom(focus, next, self.config.focus_duration_ms);
        self.auto_center = AutoCenter::Done;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn mounted() -> Camera {
        let mut cam = Camera::default();
        cam.set_viewport(Some(Viewport {
            width: 1280.0,
            height: 800.0,
        }));
        cam
    }

    #[test]
    fn clamping_is_bounded_and_idempotent() {
        let cfg = CameraConfig::default();
        for s in [-3.0, 0.0, 0.1, 0.25, 1.0, 2.0, 7.5, f64::INFINITY, f64::NAN] {
            let once = cfg.clamp_scale(s);
            assert!(once >= cfg.min_scale && once <= cfg.max_scale, "{s}");
            assert_eq!(cfg.clamp_scale(once), once);
        }
    }

    #[test]
    fn focal_zoom_centres_target() {
        let mut cam = mounted();
        for (p, s) in [
            (Point::new(3000.0, 3000.0), 1.0),
            (Point::new(-42.5, 17.25), 0.3),
            (Point::new(123.0, 9876.0), 1.9),
        ] {
            cam.focal_zoom(p, s, 0);
            let screen = cam.transform.canvas_to_screen(p);
            assert!((screen.x - 640.0).abs() < EPS);
            assert!((screen.y - 400.0).abs() < EPS);
            assert_eq!(cam.transform.scale, s);
        }
    }

    #[test]
    fn focal_zoom_clamps_out_of_range_scale() {
        let mut cam = mounted();
        cam.focal_zoom(Point::new(0.0, 0.0), 50.0, 0);
        assert_eq!(cam.transform.scale, cam.config.max_scale);
        cam.focal_zoom(Point::new(0.0, 0.0), 0.0001, 0);
        assert_eq!(cam.transform.scale, cam.config.min_scale);
    }

    #[test]
    fn unmounted_viewport_ignores_everything() {
        let mut cam = Camera::default();
        let before = cam.transform;
        cam.focal_zoom(Point::new(10.0, 10.0), 1.5, 0);
        cam.pan_by(30.0, 30.0);
        cam.apply_wheel(WheelInput {
            delta_x: 5.0,
            delta_y: 5.0,
            mode: DeltaMode::Pixel,
        });
        cam.zoom_in();
        assert!(!cam.auto_center_initial(Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0
        }));
        assert_eq!(cam.transform, before);
    }

    #[test]
    fn open_close_restores_bit_identical_transform() {
        let mut cam = mounted();
        cam.focal_zoom(Point::new(2999.3, 3017.7), 0.8137, 0);
        cam.pan_by(13.37, -4.2);
        let before = cam.transform;
        cam.enter_locked();
        assert!(cam.is_locked());
        cam.exit_locked();
        assert_eq!(cam.transform.position_x.to_bits(), before.position_x.to_bits());
        assert_eq!(cam.transform.position_y.to_bits(), before.position_y.to_bits());
        assert_eq!(cam.transform.scale.to_bits(), before.scale.to_bits());
        assert_eq!(cam.snapshot(), None);
        assert_eq!(cam.mode, CameraMode::Free);
    }

    #[test]
    fn locked_mode_ignores_input_and_keeps_first_snapshot() {
        let mut cam = mounted();
        let first = cam.transform;
        cam.enter_locked();
        cam.pan_by(100.0, 100.0);
        cam.apply_wheel(WheelInput {
            delta_x: 0.0,
            delta_y: 40.0,
            mode: DeltaMode::Pixel,
        });
        cam.zoom_in();
        assert_eq!(cam.transform, first);
        // a transform change from outside plus a second enter must not replace the snapshot
        cam.transform.position_x = 999.0;
        cam.enter_locked();
        assert_eq!(cam.snapshot(), Some(first));
        cam.exit_locked();
        assert_eq!(cam.transform, first);
    }

    #[test]
    fn fit_scale_scenario() {
        let vp = Viewport {
            width: 1280.0,
            height: 800.0,
        };
        let content = Rect {
            x: 2400.0,
            y: 2600.0,
            width: 1200.0,
            height: 800.0,
        };
        assert_eq!(content.center(), Point::new(3000.0, 3000.0));
        let s = fit_scale(vp, content, 1.125);
        assert!((s - 1.0).abs() < EPS);

        let mut cam = mounted();
        assert!(cam.auto_center_initial(content));
        assert!((cam.transform.position_x - (640.0 - 3000.0 * s)).abs() < EPS);
        assert!((cam.transform.position_y - (400.0 - 3000.0 * s)).abs() < EPS);
        assert_eq!(cam.transition_ms, 0);
    }

    #[test]
    fn fit_scale_respects_cap() {
        let vp = Viewport {
            width: 4000.0,
            height: 4000.0,
        };
        let small = Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        };
        assert_eq!(fit_scale(vp, small, 1.125), 1.125);
    }

    #[test]
    fn wheel_delta_is_clamped_per_axis() {
        let mut cam = mounted();
        let before = cam.transform;
        cam.apply_wheel(WheelInput {
            delta_x: -1000.0,
            delta_y: -1000.0,
            mode: DeltaMode::Pixel,
        });
        let moved_x = cam.transform.position_x - before.position_x;
        let moved_y = cam.transform.position_y - before.position_y;
        assert_eq!(moved_x, 150.0);
        assert_eq!(moved_y, 150.0);

        cam.apply_wheel(WheelInput {
            delta_x: 0.0,
            delta_y: 3.0,
            mode: DeltaMode::Line,
        });
        assert_eq!(cam.transform.position_y - before.position_y, 150.0 - 48.0);
    }

    #[test]
    fn dead_zone_drops_noise() {
        let mut cam = mounted();
        let before = cam.transform;
        cam.pan_by(0.3, -0.4);
        assert_eq!(cam.transform, before);
        cam.pan_by(0.3, 5.0);
        assert_eq!(cam.transform.position_x, before.position_x);
        assert_eq!(cam.transform.position_y, before.position_y + 5.0);
    }

    #[test]
    fn drag_pans_by_pointer_movement() {
        let mut cam = mounted();
        cam.begin_drag(100.0, 100.0);
        cam.drag_to(130.0, 90.0);
        cam.end_drag();
        cam.drag_to(500.0, 500.0);
        assert_eq!(cam.transform.position_x, 30.0);
        assert_eq!(cam.transform.position_y, -10.0);
        assert!(cam.was_drag());

        cam.begin_drag(0.0, 0.0);
        cam.drag_to(1.0, 1.0);
        cam.end_drag();
        assert!(!cam.was_drag());
    }

    #[test]
    fn zoom_buttons_keep_centre_fixed() {
        let mut cam = mounted();
        cam.focal_zoom(Point::new(500.0, 700.0), 1.0, 0);
        cam.zoom_in();
        let c = cam.focus_point().unwrap();
        assert!((c.x - 500.0).abs() < 1e-6 && (c.y - 700.0).abs() < 1e-6);
        assert!((cam.transform.scale - 1.2).abs() < EPS);
        assert_eq!(cam.transition_ms, cam.config.focus_duration_ms);
    }

    #[test]
    fn user_input_disables_auto_center() {
        let content = Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let mut cam = mounted();
        cam.note_user_input();
        assert!(!cam.auto_center_initial(content));
        assert_eq!(cam.auto_center, AutoCenter::Disabled);

        let mut cam = mounted();
        assert!(cam.auto_center_initial(content));
        cam.note_user_input();
        assert!(!cam.auto_center_polish());

        let mut cam = mounted();
        assert!(cam.auto_center_initial(content));
        let fitted = cam.transform.scale;
        assert!(cam.auto_center_polish());
        assert_eq!(cam.auto_center, AutoCenter::Done);
        assert!(cam.transform.scale >= fitted);
        cam.note_user_input();
        assert_eq!(cam.auto_center, AutoCenter::Done);
    }
}
