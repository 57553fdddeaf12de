use crate::app::CommandLog;
use crate::core::{SceneModel, Sphere};
use crate::shared::palette::FALLBACK_COLOR;
use crate::shared::{EditorOptions, Palette, Rgb};
use glam::Vec3;

use super::{EditSession, Selection};

/// Hauptzustand des Szenen-Editors.
pub struct AppState {
    /// Szenen-Registry: Sphären, Kurve, Grenzen
    pub scene: SceneModel,
    /// Transiente Editier-Session (Modus + Selektion)
    pub session: EditSession,
    /// Farb-Palette für neue Sphären (vom Host erweiterbar)
    pub palette: Palette,
    /// Farbe der nächsten neu platzierten Sphäre
    pub next_color: Rgb,
    /// True = Kurvenspiegel, false = sphärischer Spiegel
    pub curved_mirror: bool,
    /// Position des Punktlichts
    pub light_position: Vec3,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Startzustand aus gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let palette = Palette::new();
        let next_color = palette.get(&options.initial_color_name).unwrap_or_else(|| {
            log::warn!(
                "Unbekannte Startfarbe '{}', verwende Fallback",
                options.initial_color_name
            );
            FALLBACK_COLOR
        });

        Self {
            scene: SceneModel::new(options.bounds),
            session: EditSession::new(),
            palette,
            next_color,
            curved_mirror: false,
            light_position: options.light_position,
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl der Sphären inklusive Subjekt (für UI-Anzeige).
    pub fn sphere_count(&self) -> usize {
        self.scene.sphere_count()
    }

    /// Gibt die aktuell selektierte Sphäre zurück, falls vorhanden.
    pub fn selected_sphere(&self) -> Option<&Sphere> {
        match self.session.selection {
            Selection::Sphere(index) => self.scene.sphere(index),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
