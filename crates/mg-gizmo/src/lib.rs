//! Map Gizmo Interaction
//!
//! Drag interaction for a six-handle transform gizmo (three translation
//! arrows, three rotation rings) driven by picking rays from `mg-core`.
//!
//! # Architecture
//!
//! - [`handle::AxisHandle`] - One pickable handle with hover/active state
//! - [`collision`] - Ray/cylinder and ray/ring hit tests
//! - [`session::DragSession`] - One pointer-down-to-pointer-up manipulation
//! - [`controller::GizmoController`] - The state machine routing pointer
//!   events to handles and emitting transform updates
//!
//! The controller owns no rendering. The host feeds it pointer samples and
//! a per-frame [`mg_core::ProjectionContext`], reads back handle visual
//! state, and receives transform updates through [`controller::GizmoDelegate`].

pub mod collision;
pub mod controller;
pub mod handle;
pub mod session;

pub use controller::{DragState, GizmoController, GizmoDelegate};
pub use handle::{Axis, AxisHandle, HandleId, HandleKind};
pub use session::DragSession;
