//! Handler für den Sphären-Lifecycle: Selektion, Platzierung, Resize, Löschen.

use crate::app::state::{EditMode, Selection};
use crate::app::AppState;
use crate::core::Sphere;
use crate::shared::EDITING_THRESHOLD;
use glam::{Vec2, Vec3};

/// Hebt einen 2D-Zeigerpunkt in die Szenenebene (z = 0).
pub(crate) fn lift(world_pos: Vec2) -> Vec3 {
    Vec3::new(world_pos.x, world_pos.y, 0.0)
}

/// Selektiert die oberste Sphäre am Klickpunkt oder legt eine neue an.
///
/// Kein Treffer ist kein Fehler: dann entsteht eine neue Sphäre mit der
/// aktuell gewählten Palettenfarbe und minimalem Radius.
pub fn select_or_create_sphere(state: &mut AppState, world_pos: Vec2) {
    let click = lift(world_pos);
    let index = match state.scene.hit_test(click) {
        Some(index) => index,
        None => {
            let index = state.scene.add_sphere(Sphere::new(state.next_color, click));
            log::info!("Neue Sphäre #{} bei ({:.2}, {:.2})", index, click.x, click.y);
            index
        }
    };
    state.session.selection = Selection::Sphere(index);
    state.session.mode = EditMode::SphereSelected;
}

/// Legt die selektierte Sphäre am Punkt ab (geklemmt) und deselektiert.
pub fn place_selected_sphere(state: &mut AppState, world_pos: Vec2) {
    let target = lift(world_pos);
    if let Selection::Sphere(index) = state.session.selection {
        let bounds = state.scene.bounds;
        if let Some(sphere) = state.scene.sphere_mut(index) {
            sphere.move_to(target, &bounds);
        }
    }
    state.session.clear();
}

/// Hebt die Selektion auf und kehrt in den Idle-Modus zurück.
pub fn deselect_sphere(state: &mut AppState) {
    state.session.clear();
}

/// Wechselt in den Repositionier-Modus: die Sphäre folgt ab jetzt dem Zeiger.
pub fn begin_sphere_repositioning(state: &mut AppState) {
    state.session.mode = EditMode::SphereRepositioning;
}

/// Wechselt in den Resize-Modus, sobald der Drag die Schwelle überschreitet.
///
/// Schwelle: `EDITING_THRESHOLD × Radius` vom Sphären-Zentrum; Klick-Zitter
/// löst damit kein Resize aus.
pub fn begin_resize_if_dragged(state: &mut AppState, world_pos: Vec2) {
    let pointer = lift(world_pos);
    let Selection::Sphere(index) = state.session.selection else {
        return;
    };
    let Some(sphere) = state.scene.sphere(index) else {
        return;
    };
    if sphere.position.distance(pointer) > EDITING_THRESHOLD * sphere.radius {
        state.session.mode = EditMode::SphereResizing;
    }
}

/// Setzt den Radius auf den Zeigerabstand zum Zentrum (nur im Resize-Modus).
pub fn resize_selected_sphere(state: &mut AppState, world_pos: Vec2) {
    if state.session.mode != EditMode::SphereResizing {
        return;
    }
    let pointer = lift(world_pos);
    if let Selection::Sphere(index) = state.session.selection {
        let bounds = state.scene.bounds;
        if let Some(sphere) = state.scene.sphere_mut(index) {
            let distance = sphere.position.distance(pointer);
            sphere.resize(distance, &bounds);
        }
    }
}

/// Führt die selektierte Sphäre dem Zeiger nach (Live-Vorschau, geklemmt).
pub fn move_selected_sphere(state: &mut AppState, world_pos: Vec2) {
    let target = lift(world_pos);
    if let Selection::Sphere(index) = state.session.selection {
        let bounds = state.scene.bounds;
        if let Some(sphere) = state.scene.sphere_mut(index) {
            sphere.move_to(target, &bounds);
        }
    }
}

/// Entfernt die selektierte Sphäre aus der Registry.
///
/// Die Subjekt-Sphäre (Index 0) ist über `remove_placed` unerreichbar;
/// in dem Fall bleiben Modus und Selektion unverändert.
pub fn delete_selected_sphere(state: &mut AppState) {
    if let Selection::Sphere(index) = state.session.selection {
        if state.scene.remove_placed(index) {
            log::info!("Sphäre #{} entfernt", index);
            state.session.clear();
        }
    }
}
