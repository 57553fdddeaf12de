//! Core-Domänentypen: Szenengrenzen, Sphären, Bezier-Kurve, Szenen-Registry.

pub mod bounds;
pub mod curve;
pub mod scene;
pub mod sphere;

pub use bounds::SceneBounds;
pub use curve::Curve;
pub use scene::{SceneModel, SUBJECT_COLOR};
pub use sphere::Sphere;
