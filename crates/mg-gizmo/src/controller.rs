//! Gizmo controller state machine
//!
//! Routes pointer events to the six handles, owns the authoritative
//! transform during a drag, and notifies the host through
//! [`GizmoDelegate`]. Owns no rendering.
//!
//! ```text
//! Idle ── move over handle ──> Hovering ── pointer down ──> Dragging
//!  ^                             |                             |
//!  └──── move off handles ───────┘        pointer up / cancel ─┘
//! ```
//!
//! Entering `Dragging` fires `interaction_started` (the host suspends its
//! map pan/rotate gestures); every exit path fires `interaction_ended`
//! exactly once, so the host's gesture controller can never be left
//! suspended.

use mg_core::{GizmoConfig, PointerSample, ProjectionContext, Ray, Transform};

use crate::handle::{AxisHandle, HandleId};
use crate::session::DragSession;

/// Host callbacks for the drag lifecycle.
///
/// `interaction_started` / `interaction_ended` are paired exactly once per
/// session; `transform_changed` fires zero or more times in between. The
/// host must treat incoming transforms as authoritative replacements.
pub trait GizmoDelegate {
    /// A drag began; suspend competing camera gestures
    fn interaction_started(&mut self) {}
    /// The dragged transform changed
    fn transform_changed(&mut self, _transform: &Transform) {}
    /// The drag ended; resume camera gestures
    fn interaction_ended(&mut self) {}
}

/// No-op delegate for hosts that poll state instead
impl GizmoDelegate for () {}

/// Interaction state
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No handle under the pointer
    #[default]
    Idle,
    /// Pointer over a handle, not dragging
    Hovering(HandleId),
    /// A drag is in progress
    Dragging(DragSession),
}

/// The gizmo interaction engine.
///
/// The external owner supplies the transform each frame while idle; during
/// a drag the controller is the sole writer and external updates are
/// ignored.
pub struct GizmoController {
    transform: Transform,
    scale: f32,
    config: GizmoConfig,
    handles: [AxisHandle; 6],
    state: DragState,
}

impl GizmoController {
    /// Create a controller with the given configuration
    pub fn new(config: GizmoConfig) -> Self {
        let handles = HandleId::ALL.map(|id| AxisHandle::new(id, &config));
        Self {
            transform: Transform::IDENTITY,
            scale: 1.0,
            config,
            handles,
            state: DragState::Idle,
        }
    }

    /// The current transform
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replace the transform from the external owner.
    ///
    /// Ignored while a drag is in progress: the controller owns the
    /// transform for the whole session.
    pub fn set_transform(&mut self, transform: Transform) {
        if matches!(self.state, DragState::Dragging(_)) {
            tracing::trace!("ignoring external transform update during drag");
            return;
        }
        self.transform = transform;
    }

    /// Set the gizmo scale factor (handle size in world units)
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }

    /// The current scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Replace the configuration, refreshing handle base colors
    pub fn set_config(&mut self, config: GizmoConfig) {
        for handle in &mut self.handles {
            handle.color = config.axis_colors[handle.id.axis.index()];
        }
        self.config = config;
    }

    /// The current configuration
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Handle visual states, for rendering
    pub fn handles(&self) -> &[AxisHandle; 6] {
        &self.handles
    }

    /// The handle currently under the pointer, if any
    pub fn hovered_handle(&self) -> Option<HandleId> {
        match self.state {
            DragState::Hovering(id) => Some(id),
            _ => None,
        }
    }

    /// Whether a drag session is open
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Process a pointer move.
    ///
    /// While idle, updates hover state; while dragging, recomputes the
    /// transform and reports it through the delegate. A frame with an
    /// unresolvable ray leaves all state untouched.
    pub fn pointer_move(
        &mut self,
        sample: PointerSample,
        context: &ProjectionContext,
        delegate: &mut dyn GizmoDelegate,
    ) {
        let Some(ray) = self.resolve(sample, context) else {
            return;
        };

        if let DragState::Dragging(session) = &mut self.state {
            let updated = session.update(&ray, self.scale, &self.config);
            self.transform = updated;
            tracing::trace!(handle = ?session.handle, "drag update");
            delegate.transform_changed(&updated);
            return;
        }

        match self.hit_test(&ray) {
            Some(id) => {
                self.state = DragState::Hovering(id);
                for handle in &mut self.handles {
                    handle.set_visual_state(handle.id == id, false);
                }
            }
            None => {
                self.state = DragState::Idle;
                for handle in &mut self.handles {
                    handle.set_visual_state(false, false);
                }
            }
        }
    }

    /// Process a pointer down.
    ///
    /// Opens a drag session when a handle is under the pointer. Ignored
    /// while a session is already open: exactly one session exists at a
    /// time.
    pub fn pointer_down(
        &mut self,
        sample: PointerSample,
        context: &ProjectionContext,
        delegate: &mut dyn GizmoDelegate,
    ) {
        if matches!(self.state, DragState::Dragging(_)) {
            tracing::debug!("ignoring pointer-down while a drag is open");
            return;
        }

        let Some(ray) = self.resolve(sample, context) else {
            return;
        };
        let Some(id) = self.hit_test(&ray) else {
            return;
        };

        for handle in &mut self.handles {
            handle.set_visual_state(false, handle.id == id);
        }
        self.state = DragState::Dragging(DragSession::new(id, sample, ray, self.transform));
        tracing::debug!(handle = ?id, "drag started");
        delegate.interaction_started();
    }

    /// Process a pointer up, closing any open session
    pub fn pointer_up(&mut self, delegate: &mut dyn GizmoDelegate) {
        self.close_session(delegate);
    }

    /// Forced cancellation (host unmount, focus loss).
    ///
    /// Identical to a pointer up when a session is open and a no-op
    /// otherwise, so `interaction_ended` fires exactly once per session on
    /// every teardown path.
    pub fn cancel(&mut self, delegate: &mut dyn GizmoDelegate) {
        self.close_session(delegate);
    }

    fn close_session(&mut self, delegate: &mut dyn GizmoDelegate) {
        if !matches!(self.state, DragState::Dragging(_)) {
            return;
        }
        self.state = DragState::Idle;
        for handle in &mut self.handles {
            handle.set_visual_state(false, false);
        }
        tracing::debug!("drag ended");
        delegate.interaction_ended();
    }

    /// Resolve a pointer sample into a ray, logging and skipping the frame
    /// on a degenerate projection
    fn resolve(&self, sample: PointerSample, context: &ProjectionContext) -> Option<Ray> {
        match context.resolve_ray(sample.ndc) {
            Ok(ray) => Some(ray),
            Err(err) => {
                tracing::warn!(%err, "skipping pick for this frame");
                None
            }
        }
    }

    /// Closest enabled handle hit by the ray
    fn hit_test(&self, ray: &Ray) -> Option<HandleId> {
        let mut closest: Option<HandleId> = None;
        let mut closest_t = f32::MAX;

        for handle in &self.handles {
            if !handle.is_enabled(&self.config) {
                continue;
            }
            if let Some(t) = handle.hit_test(
                ray,
                self.transform.position,
                self.transform.orientation,
                self.scale,
                &self.config,
            ) && t < closest_t
            {
                closest_t = t;
                closest = Some(handle.id);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{Axis, HandleKind};
    use glam::{Mat4, Vec3};
    use mg_core::ScreenRect;

    /// Delegate that records every callback
    #[derive(Default)]
    struct Recorder {
        starts: usize,
        ends: usize,
        transforms: Vec<Transform>,
    }

    impl GizmoDelegate for Recorder {
        fn interaction_started(&mut self) {
            self.starts += 1;
        }
        fn transform_changed(&mut self, transform: &Transform) {
            self.transforms.push(*transform);
        }
        fn interaction_ended(&mut self) {
            self.ends += 1;
        }
    }

    struct Rig {
        context: ProjectionContext,
        proj_view: Mat4,
        rect: ScreenRect,
    }

    impl Rig {
        /// Camera at (0, 0, 5) looking at the origin, square viewport
        fn new() -> Self {
            let position = Vec3::new(0.0, 0.0, 5.0);
            let proj = Mat4::perspective_rh(90.0_f32.to_radians(), 1.0, 0.1, 1000.0);
            let view = Mat4::look_at_rh(position, Vec3::ZERO, Vec3::Y);
            Self {
                context: ProjectionContext::Camera {
                    position,
                    proj,
                    view,
                },
                proj_view: proj * view,
                rect: ScreenRect::from_size(600.0, 600.0),
            }
        }

        /// Pointer sample whose ray passes through `world`
        fn sample_at(&self, world: Vec3) -> PointerSample {
            let clip = self.proj_view * world.extend(1.0);
            let ndc = clip.truncate() / clip.w;
            let x = (ndc.x + 1.0) / 2.0 * self.rect.width + self.rect.left;
            let y = (1.0 - ndc.y) / 2.0 * self.rect.height + self.rect.top;
            PointerSample::from_screen(x, y, self.rect).unwrap()
        }
    }

    const TRANSLATE_X: HandleId = HandleId {
        kind: HandleKind::Translate,
        axis: Axis::X,
    };

    #[test]
    fn test_hover_enter_and_leave() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());

        controller.pointer_move(rig.sample_at(Vec3::new(0.5, 0.0, 0.0)), &rig.context, &mut ());
        assert_eq!(controller.hovered_handle(), Some(TRANSLATE_X));
        assert!(controller.handles()[0].hovered);

        controller.pointer_move(rig.sample_at(Vec3::new(3.0, 3.0, 0.0)), &rig.context, &mut ());
        assert_eq!(controller.hovered_handle(), None);
        assert!(!controller.handles()[0].hovered);
    }

    #[test]
    fn test_hover_rotation_ring() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());

        // A point on the Z ring at 45 degrees, away from the translation arrows
        let on_ring = Vec3::new(1.0, 1.0, 0.0).normalize() * 0.8;
        controller.pointer_move(rig.sample_at(on_ring), &rig.context, &mut ());
        assert_eq!(
            controller.hovered_handle(),
            Some(HandleId {
                kind: HandleKind::Rotate,
                axis: Axis::Z,
            })
        );
    }

    #[test]
    fn test_full_drag_gesture() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        let start = rig.sample_at(Vec3::new(0.5, 0.0, 0.0));
        controller.pointer_move(start, &rig.context, &mut recorder);
        controller.pointer_down(start, &rig.context, &mut recorder);
        assert!(controller.is_dragging());
        assert_eq!(recorder.starts, 1);
        assert!(controller.handles()[0].active);

        controller.pointer_move(
            rig.sample_at(Vec3::new(0.9, 0.0, 0.0)),
            &rig.context,
            &mut recorder,
        );
        assert_eq!(recorder.transforms.len(), 1);
        let moved = recorder.transforms[0];
        // Drag along +X moves along +X only
        assert!(moved.position.x > 0.0);
        assert!(moved.position.y.abs() < 1e-4);
        assert!(moved.position.z.abs() < 1e-4);
        assert_eq!(controller.transform(), moved);

        controller.pointer_up(&mut recorder);
        assert!(!controller.is_dragging());
        assert_eq!(recorder.starts, 1);
        assert_eq!(recorder.ends, 1);
        assert!(!controller.handles()[0].active);
    }

    #[test]
    fn test_second_pointer_down_ignored() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        let on_x = rig.sample_at(Vec3::new(0.5, 0.0, 0.0));
        controller.pointer_down(on_x, &rig.context, &mut recorder);
        assert_eq!(recorder.starts, 1);

        // Second press over a different handle must not open a session or
        // disturb the first one's math
        let on_y = rig.sample_at(Vec3::new(0.0, 0.5, 0.0));
        controller.pointer_down(on_y, &rig.context, &mut recorder);
        assert_eq!(recorder.starts, 1);

        controller.pointer_move(
            rig.sample_at(Vec3::new(0.9, 0.0, 0.0)),
            &rig.context,
            &mut recorder,
        );
        let moved = recorder.transforms.last().unwrap();
        assert!(moved.position.x > 0.0);
        assert!(moved.position.y.abs() < 1e-4);

        controller.pointer_up(&mut recorder);
        assert_eq!(recorder.ends, 1);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        // Cancel with no session is a no-op
        controller.cancel(&mut recorder);
        assert_eq!(recorder.ends, 0);

        let on_x = rig.sample_at(Vec3::new(0.5, 0.0, 0.0));
        controller.pointer_down(on_x, &rig.context, &mut recorder);
        controller.cancel(&mut recorder);
        controller.cancel(&mut recorder);
        controller.pointer_up(&mut recorder);
        assert_eq!(recorder.starts, 1);
        assert_eq!(recorder.ends, 1);
    }

    #[test]
    fn test_external_transform_ignored_during_drag() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        let on_x = rig.sample_at(Vec3::new(0.5, 0.0, 0.0));
        controller.pointer_down(on_x, &rig.context, &mut recorder);

        controller.set_transform(Transform::from_position(Vec3::new(100.0, 0.0, 0.0)));
        assert!(controller.transform().position.x.abs() < 1e-6);

        controller.pointer_up(&mut recorder);
        controller.set_transform(Transform::from_position(Vec3::new(100.0, 0.0, 0.0)));
        assert_eq!(controller.transform().position.x, 100.0);
    }

    #[test]
    fn test_degenerate_frame_keeps_state() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        let on_x = rig.sample_at(Vec3::new(0.5, 0.0, 0.0));
        controller.pointer_down(on_x, &rig.context, &mut recorder);

        let bad = ProjectionContext::Camera {
            position: Vec3::ZERO,
            proj: Mat4::ZERO,
            view: Mat4::IDENTITY,
        };
        controller.pointer_move(on_x, &bad, &mut recorder);
        // No update emitted, drag still open
        assert!(recorder.transforms.is_empty());
        assert!(controller.is_dragging());

        controller.pointer_up(&mut recorder);
        assert_eq!(recorder.ends, 1);
    }

    #[test]
    fn test_disabled_handles_not_pickable() {
        let rig = Rig::new();
        let mut config = GizmoConfig::standard();
        config.active_axes = [false, true, true];
        let mut controller = GizmoController::new(config);

        controller.pointer_move(rig.sample_at(Vec3::new(0.5, 0.0, 0.0)), &rig.context, &mut ());
        assert_eq!(controller.hovered_handle(), None);

        controller.pointer_move(rig.sample_at(Vec3::new(0.0, 0.5, 0.0)), &rig.context, &mut ());
        assert_eq!(
            controller.hovered_handle(),
            Some(HandleId {
                kind: HandleKind::Translate,
                axis: Axis::Y,
            })
        );
    }

    #[test]
    fn test_pointer_down_without_hover_opens_session() {
        // A press straight onto a handle works even if no move preceded it
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        controller.pointer_down(
            rig.sample_at(Vec3::new(0.5, 0.0, 0.0)),
            &rig.context,
            &mut recorder,
        );
        assert!(controller.is_dragging());
        assert_eq!(recorder.starts, 1);
    }

    #[test]
    fn test_pointer_down_on_empty_space() {
        let rig = Rig::new();
        let mut controller = GizmoController::new(GizmoConfig::standard());
        let mut recorder = Recorder::default();

        controller.pointer_down(
            rig.sample_at(Vec3::new(3.0, 3.0, 0.0)),
            &rig.context,
            &mut recorder,
        );
        assert!(!controller.is_dragging());
        assert_eq!(recorder.starts, 0);
    }
}
