//! Handler für Palette, Spiegel-Modus und Punktlicht.

use crate::app::AppState;
use glam::Vec3;

/// Setzt die Farbe für die nächste neu platzierte Sphäre.
///
/// Unbekannte Namen werden ignoriert; die aktuelle Farbe bleibt erhalten.
pub fn set_next_color(state: &mut AppState, name: &str) {
    match state.palette.get(name) {
        Some(color) => {
            state.next_color = color;
            log::info!("Nächste Sphärenfarbe: {}", name);
        }
        None => log::warn!("Unbekannte Palettenfarbe: {}", name),
    }
}

/// Schaltet zwischen Kurven- und sphärischem Spiegel um.
pub fn set_mirror_mode(state: &mut AppState, curved: bool) {
    state.curved_mirror = curved;
    log::info!(
        "Spiegel-Modus: {}",
        if curved { "Kurvenspiegel" } else { "sphärisch" }
    );
}

/// Verschiebt das Punktlicht achsenweise, begrenzt auf die Licht-Box
/// (x ∈ [-1, 1], y ∈ [0, 2], z ∈ [0, 2]).
///
/// Eine Achse bewegt sich nur, wenn das Ergebnis strikt innerhalb der
/// Grenzen bleibt; die anderen Achsen sind davon unabhängig.
pub fn move_light(state: &mut AppState, delta: Vec3) {
    let mut position = state.light_position;
    let moved = position + delta;
    if delta.x != 0.0 && moved.x > -1.0 && moved.x < 1.0 {
        position.x = moved.x;
    }
    if delta.y != 0.0 && moved.y > 0.0 && moved.y < 2.0 {
        position.y = moved.y;
    }
    if delta.z != 0.0 && moved.z > 0.0 && moved.z < 2.0 {
        position.z = moved.z;
    }
    state.light_position = position;
}
