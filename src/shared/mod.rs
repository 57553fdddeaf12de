//! Geteilte Typen und Konstanten für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, Palette und den Render-Vertrag, die zwischen
//! `app` und dem (externen) Renderer geteilt werden.

pub mod options;
pub mod palette;
mod render_scene;

pub use options::EditorOptions;
pub use options::{
    EDITING_THRESHOLD, LIGHT_MOVE_STEP, MAX_SELECT_DISTANCE, MINIMUM_PLACEMENT_SCALE, SMOOTHNESS,
};
pub use palette::{Palette, Rgb};
pub use render_scene::{RenderScene, SphereInstance, SPHERE_UNIFORM_STRIDE};
