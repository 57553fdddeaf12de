//! Szenen-Registry: Subjekt-Sphäre, platzierte Sphären und die Spiegelkurve.

use super::{Curve, SceneBounds, Sphere};
use crate::shared::Rgb;
use glam::Vec3;

/// Farbe der vorgesetzten Subjekt-Sphäre (Index 0).
pub const SUBJECT_COLOR: Rgb = Rgb::new(0.9, 0.9, 0.9);

/// Geordnete Szene: Index 0 ist die nicht löschbare Subjekt-Sphäre,
/// Einfügereihenfolge = Zeichenreihenfolge.
#[derive(Debug, Clone)]
pub struct SceneModel {
    spheres: Vec<Sphere>,
    /// Die eine Spiegelkurve der Session
    pub curve: Curve,
    /// Grenzen für Platzierung, Move und Resize
    pub bounds: SceneBounds,
}

impl SceneModel {
    /// Erstellt die Startszene: Subjekt-Sphäre plus Standard-Steuerpunkte.
    pub fn new(bounds: SceneBounds) -> Self {
        Self {
            spheres: vec![Sphere::new(SUBJECT_COLOR, Vec3::new(0.0, 1.0, 0.0))],
            curve: Curve::new([
                Vec3::new(-0.75, 0.2, 0.0),
                Vec3::new(-0.5, 0.75, 0.0),
                Vec3::new(0.5, 1.25, 0.0),
            ]),
            bounds,
        }
    }

    /// Alle Sphären in Zeichenreihenfolge.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Anzahl der Sphären inklusive Subjekt.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Read-only Zugriff auf eine Sphäre per Registry-Index.
    pub fn sphere(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    /// Mutable Zugriff auf eine Sphäre per Registry-Index.
    pub fn sphere_mut(&mut self, index: usize) -> Option<&mut Sphere> {
        self.spheres.get_mut(index)
    }

    /// Hit-Test in Registry-Reihenfolge; der letzte Treffer gewinnt,
    /// neuere Sphären liegen damit vor älteren.
    pub fn hit_test(&self, point: Vec3) -> Option<usize> {
        let mut selected = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            if sphere.includes(point) {
                selected = Some(index);
            }
        }
        selected
    }

    /// Hängt eine neue Sphäre an und gibt ihren Registry-Index zurück.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Entfernt eine platzierte Sphäre. Durchsucht nur die Indizes ab 1:
    /// die Subjekt-Sphäre ist für die Entfernung strukturell unerreichbar.
    pub fn remove_placed(&mut self, selected_index: usize) -> bool {
        for index in 1..self.spheres.len() {
            if index == selected_index {
                self.spheres.remove(index);
                return true;
            }
        }
        false
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(SceneBounds::default())
    }
}
