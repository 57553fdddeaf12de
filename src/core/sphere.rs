//! Platzierung und Größe einer Sphäre in der Szene.

use super::SceneBounds;
use crate::shared::{Rgb, MINIMUM_PLACEMENT_SCALE};
use glam::Vec3;

/// Eine platzierte Sphäre: Farbe, Position und Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Materialfarbe (bei Erstellung aus der Palette kopiert)
    pub color: Rgb,
    /// Mittelpunkt in Szenenkoordinaten (z = 0 für platzierte Objekte)
    pub position: Vec3,
    /// Radius, nie kleiner als `MINIMUM_PLACEMENT_SCALE`
    pub radius: f32,
}

impl Sphere {
    /// Erstellt eine neue Sphäre mit minimalem Radius am gegebenen Punkt.
    pub fn new(color: Rgb, position: Vec3) -> Self {
        Self {
            color,
            position,
            radius: MINIMUM_PLACEMENT_SCALE,
        }
    }

    /// Prüft ob der Punkt strikt innerhalb der Sphären-Grundfläche liegt.
    pub fn includes(&self, query_point: Vec3) -> bool {
        let distance2 = self.position.distance_squared(query_point);
        distance2 < self.radius * self.radius
    }

    /// Verschiebt die Sphäre; die volle Grundfläche bleibt innerhalb der Grenzen.
    ///
    /// Klemm-Reihenfolge: erst left/bottom anheben, dann right/top absenken.
    pub fn move_to(&mut self, position: Vec3, bounds: &SceneBounds) {
        let mut position = position;
        position.x = position.x.max(bounds.left + self.radius);
        position.y = position.y.max(bounds.bottom + self.radius);
        position.x = position.x.min(bounds.right - self.radius);
        position.y = position.y.min(bounds.top - self.radius);
        self.position = position;
    }

    /// Setzt den Radius auf `scale`, gedeckelt auf den Abstand des fixen
    /// Mittelpunkts zu jeder der vier Kanten. Resize bewegt den Mittelpunkt nie.
    pub fn resize(&mut self, scale: f32, bounds: &SceneBounds) {
        let mut scale = scale.max(MINIMUM_PLACEMENT_SCALE);
        scale = scale.min(bounds.right - self.position.x);
        scale = scale.min(bounds.top - self.position.y);
        scale = scale.min(self.position.x - bounds.left);
        scale = scale.min(self.position.y - bounds.bottom);
        self.radius = scale;
    }
}
