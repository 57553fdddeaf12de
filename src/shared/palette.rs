//! Material-Palette für neu platzierte Sphären.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// RGB-Farbtriple (Komponenten 0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Erstellt eine Farbe aus den drei Komponenten.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Highlight-Farbe der selektierten Sphäre (Gelb).
pub const SPHERE_SELECT_COLOR: Rgb = Rgb::new(0.950, 0.900, 0.500);
/// Farbe der gezeichneten Kurve (Kreide-Blau).
pub const CURVE_COLOR: Rgb = Rgb::new(0.325, 0.575, 0.675);
/// Farbe der Steuerpunkt-Marker (Kreide-Orange).
pub const POINT_COLOR: Rgb = Rgb::new(0.825, 0.475, 0.175);
/// Fallback wenn ein Name nicht in der Palette existiert (adriatic).
pub const FALLBACK_COLOR: Rgb = Rgb::new(0.125, 0.25, 0.375);

/// Benannte Materialfarben in Einfügereihenfolge (stabil für UI-Listen).
#[derive(Debug, Clone)]
pub struct Palette {
    colors: IndexMap<String, Rgb>,
}

impl Palette {
    /// Erstellt die Standard-Palette der fünf Materialien.
    pub fn new() -> Self {
        let mut colors = IndexMap::new();
        colors.insert("adriatic".to_string(), Rgb::new(0.125, 0.25, 0.375));
        colors.insert("travertine".to_string(), Rgb::new(0.60, 0.57, 0.52));
        colors.insert("jade".to_string(), Rgb::new(0.18, 0.38, 0.27));
        colors.insert("amethyst".to_string(), Rgb::new(0.40, 0.30, 0.50));
        colors.insert("fireball".to_string(), Rgb::new(0.55, 0.20, 0.22));
        Self { colors }
    }

    /// Sucht eine Farbe per Name.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    /// Fügt eine Farbe hinzu oder überschreibt eine bestehende.
    pub fn insert(&mut self, name: impl Into<String>, color: Rgb) {
        self.colors.insert(name.into(), color);
    }

    /// Alle Farbnamen in Einfügereihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True wenn die Palette leer ist.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
