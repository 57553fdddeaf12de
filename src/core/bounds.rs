//! Szenengrenzen als achsenparalleles Rechteck in der x/y-Ebene.

use crate::shared::options::{SCENE_BOTTOM, SCENE_LEFT, SCENE_RIGHT, SCENE_TOP};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rechteckige Grenzen der editierbaren Szene.
///
/// Platzierung und Resize klemmen gegen diese Kanten, statt Eingaben
/// abzulehnen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    /// Linke Kante (minimales x)
    pub left: f32,
    /// Rechte Kante (maximales x)
    pub right: f32,
    /// Untere Kante (minimales y)
    pub bottom: f32,
    /// Obere Kante (maximales y)
    pub top: f32,
}

impl SceneBounds {
    /// Erstellt Grenzen aus den vier Kanten.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Prüft ob ein Punkt (x/y, z wird ignoriert) innerhalb der Grenzen liegt.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self::new(SCENE_LEFT, SCENE_RIGHT, SCENE_BOTTOM, SCENE_TOP)
    }
}
