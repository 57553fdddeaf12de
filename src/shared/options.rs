//! Zentrale Konfiguration des Szenen-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SceneBounds;
use serde::{Deserialize, Serialize};

// ── Platzierung ─────────────────────────────────────────────────────

/// Kleinster platzierbarer Sphären-Radius.
pub const MINIMUM_PLACEMENT_SCALE: f32 = 0.1;
/// Pick-Radius für Steuerpunkt-Selektion (Szeneneinheiten).
pub const MAX_SELECT_DISTANCE: f32 = 0.2;

// ── Kurve ───────────────────────────────────────────────────────────

/// Kehrwert der minimalen Sehnenlänge bei der Kurven-Unterteilung.
pub const SMOOTHNESS: f32 = 10.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Drag-Distanz-Faktor (× Radius), ab dem ein Drag als Resize gilt.
pub const EDITING_THRESHOLD: f32 = 1.1;

// ── Szene ───────────────────────────────────────────────────────────

/// Linke Kante der Standard-Szenengrenzen.
pub const SCENE_LEFT: f32 = -1.0;
/// Rechte Kante der Standard-Szenengrenzen.
pub const SCENE_RIGHT: f32 = 1.0;
/// Untere Kante der Standard-Szenengrenzen.
pub const SCENE_BOTTOM: f32 = 0.0;
/// Obere Kante der Standard-Szenengrenzen.
pub const SCENE_TOP: f32 = 2.0;

// ── Licht ───────────────────────────────────────────────────────────

/// Schrittweite der Licht-Bewegung pro Tastenbefehl.
pub const LIGHT_MOVE_STEP: f32 = 0.05;
/// Standard-Position des Punktlichts.
pub const LIGHT_POSITION_DEFAULT: glam::Vec3 = glam::Vec3::new(0.0, 1.0, 0.0);

// ── Palette ─────────────────────────────────────────────────────────

/// Name der beim Start gewählten Palettenfarbe.
pub const INITIAL_COLOR_NAME: &str = "adriatic";

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `funhouse_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Szenengrenzen für Platzierung, Move und Resize
    pub bounds: SceneBounds,
    /// Palettenfarbe der ersten neu platzierten Sphäre
    pub initial_color_name: String,
    /// Startposition des Punktlichts
    pub light_position: glam::Vec3,
    /// Schrittweite der Licht-Bewegung pro Tastenbefehl
    pub light_move_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            bounds: SceneBounds::default(),
            initial_color_name: INITIAL_COLOR_NAME.to_string(),
            light_position: LIGHT_POSITION_DEFAULT,
            light_move_step: LIGHT_MOVE_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("funhouse_scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("funhouse_scene_editor.toml")
    }
}
