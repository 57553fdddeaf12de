//! Transiente Editier-Session: Modus und Selektion.

/// Modus der Interaktions-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Keine laufende Interaktion
    #[default]
    Idle,
    /// Ein Steuerpunkt der Kurve folgt dem Zeiger
    EditingControlPoint,
    /// Sphäre selektiert, wartet auf Drag oder Release
    SphereSelected,
    /// Selektierte Sphäre folgt dem Zeiger bis zum nächsten Klick
    SphereRepositioning,
    /// Radius der selektierten Sphäre folgt dem Zeigerabstand
    SphereResizing,
}

/// Aktuell editiertes Objekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nichts selektiert
    #[default]
    None,
    /// Sphäre per Registry-Index
    Sphere(usize),
    /// Steuerpunkt der Kurve (0..=2)
    ControlPoint(usize),
}

/// Transienter Zustand der laufenden Editier-Interaktion.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditSession {
    /// Aktueller Modus der Zustandsmaschine
    pub mode: EditMode,
    /// Objekt unter Bearbeitung
    pub selection: Selection,
}

impl EditSession {
    /// Erstellt eine leere Session (Idle, keine Selektion).
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt Modus und Selektion auf den Grundzustand zurück.
    pub fn clear(&mut self) {
        self.mode = EditMode::Idle;
        self.selection = Selection::None;
    }

    /// True wenn gerade eine Sphäre bearbeitet wird, egal in welchem Modus.
    pub fn is_sphere_mode(&self) -> bool {
        matches!(
            self.mode,
            EditMode::SphereSelected | EditMode::SphereRepositioning | EditMode::SphereResizing
        )
    }
}
