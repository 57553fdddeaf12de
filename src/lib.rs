//! Funhouse Scene Editor Kernbibliothek.
//! Szenen-Modell, Kurven-Tessellation und Interaktions-Zustandsmaschine
//! als Library exportiert für Host-Anwendungen (Renderer/UI) und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, EditMode, EditSession, KeyCommand,
    Selection,
};
pub use core::{Curve, SceneBounds, SceneModel, Sphere};
pub use shared::{EditorOptions, Palette, RenderScene, Rgb, SphereInstance};
