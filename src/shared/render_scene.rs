//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul: `app` baut sie, der (externe) Renderer konsumiert sie.

use super::palette::Rgb;
use glam::Vec3;

/// Anzahl der f32-Werte pro Sphäre im Uniform-Layout des Trace-Shaders.
pub const SPHERE_UNIFORM_STRIDE: usize = 7;

/// Eine zu zeichnende Sphäre inklusive Selektions-Hervorhebung.
#[derive(Debug, Clone, Copy)]
pub struct SphereInstance {
    /// Mittelpunkt in Szenenkoordinaten
    pub position: Vec3,
    /// Radius in Szeneneinheiten
    pub radius: f32,
    /// Materialfarbe
    pub color: Rgb,
    /// Wireframe-Hervorhebung, gesetzt für die selektierte Sphäre
    pub highlight: Option<Rgb>,
    /// False für die Subjekt-Sphäre im Kurvenspiegel-Modus
    pub visible: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Sphären in Zeichenreihenfolge (Index 0 = Subjekt)
    pub spheres: Vec<SphereInstance>,
    /// Flaches Uniform-Layout: x, radius, y, radius, r, g, b pro Sphäre
    pub sphere_uniforms: Vec<f32>,
    /// Polyline-Approximation der Spiegelkurve
    pub curve_polyline: Vec<Vec3>,
    /// Die drei Steuerpunkte der Kurve
    pub control_points: [Vec3; 3],
    /// Flaches Uniform-Layout der Steuerpunkte: x0, y0, x1, y1, x2, y2
    pub control_point_uniforms: [f32; 6],
    /// True = Kurvenspiegel (Kurve zeichnen, Subjekt im Sphären-Pass auslassen)
    pub curved_mirror: bool,
    /// Position des Punktlichts
    pub light_position: Vec3,
    /// Farbe der Kurven-Polyline
    pub curve_color: Rgb,
    /// Farbe der Steuerpunkt-Marker
    pub point_color: Rgb,
}

impl RenderScene {
    /// Anzahl der Sphären im Uniform-Layout.
    pub fn sphere_count(&self) -> usize {
        self.sphere_uniforms.len() / SPHERE_UNIFORM_STRIDE
    }
}
