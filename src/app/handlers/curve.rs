//! Handler für das Editieren der Kurven-Steuerpunkte.

use crate::app::state::{EditMode, Selection};
use crate::app::AppState;
use glam::Vec2;

use super::editing::lift;

/// Greift den nächstgelegenen Steuerpunkt; kein Treffer ist kein Fehler.
///
/// Bei Erfolg springt der Steuerpunkt sofort zum Zeiger und folgt ihm
/// bis zum Ablegen.
pub fn grab_control_point(state: &mut AppState, world_pos: Vec2) {
    let click = lift(world_pos);
    let Some(which) = state.scene.curve.nearest_control_point(click) else {
        return;
    };
    state.session.selection = Selection::ControlPoint(which);
    state.session.mode = EditMode::EditingControlPoint;
    state.scene.curve.set_control_point(which, click);
    log::debug!("Steuerpunkt {} gegriffen", which);
}

/// Führt den gegriffenen Steuerpunkt dem Zeiger nach.
pub fn drag_control_point(state: &mut AppState, world_pos: Vec2) {
    if let Selection::ControlPoint(which) = state.session.selection {
        state.scene.curve.set_control_point(which, lift(world_pos));
    }
}

/// Legt den Steuerpunkt am Zeiger ab und beendet die Editier-Session.
pub fn release_control_point(state: &mut AppState, world_pos: Vec2) {
    if let Selection::ControlPoint(which) = state.session.selection {
        state.scene.curve.set_control_point(which, lift(world_pos));
    }
    state.session.clear();
}
