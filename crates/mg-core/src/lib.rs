//! Map Gizmo Core
//!
//! Data model and picking primitives for a transform gizmo that sits on
//! top of a map-driven 3D scene.
//!
//! # Module Structure
//!
//! ```text
//! mg-core/
//! ├── constants.rs     # Calibrated defaults (handle sizes, sensitivity)
//! ├── config.rs        # Serializable gizmo configuration
//! ├── error.rs         # Error types
//! ├── pointer.rs       # Screen -> NDC pointer samples
//! ├── projection.rs    # Projection context and ray resolution
//! ├── ray.rs           # World-space picking ray
//! └── transform.rs     # Position/orientation/scale transform
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod pointer;
pub mod projection;
pub mod ray;
pub mod transform;

pub use config::GizmoConfig;
pub use error::{ConfigError, PickError};
pub use pointer::{PointerSample, ScreenRect};
pub use projection::ProjectionContext;
pub use ray::Ray;
pub use transform::Transform;
