//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier liegt die Übergangstabelle der Interaktions-Zustandsmaschine als
//! explizites Matching über (Modus, Intent)-Paare. Undefinierte
//! Kombinationen ergeben eine leere Command-Liste. Die geometrischen
//! Nebenbedingungen (Hit-Test, Resize-Schwelle, Pick-Radius) prüfen die
//! Handler, da sie Szenen-Zustand brauchen.

use super::state::EditMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.session.mode;
    match intent {
        AppIntent::PointerPressed { world_pos } => match mode {
            EditMode::Idle => vec![AppCommand::SelectOrCreateSphere { world_pos }],
            // Klick legt die Sphäre ab, egal ob sie noch wartet oder schon folgt
            EditMode::SphereSelected | EditMode::SphereRepositioning => {
                vec![AppCommand::PlaceSelectedSphere { world_pos }]
            }
            // Resize endet ohne weiteren Move
            EditMode::SphereResizing => vec![AppCommand::DeselectSphere],
            EditMode::EditingControlPoint => vec![],
        },
        AppIntent::PointerReleased { .. } => match mode {
            // Kein Drag seit der Selektion: Sphäre folgt ab jetzt dem Zeiger
            EditMode::SphereSelected => vec![AppCommand::BeginSphereRepositioning],
            EditMode::SphereResizing | EditMode::SphereRepositioning => {
                vec![AppCommand::DeselectSphere]
            }
            EditMode::Idle | EditMode::EditingControlPoint => vec![],
        },
        AppIntent::PointerDragged { world_pos } => match mode {
            // Erst Schwellen-Check, dann Resize (greift nur nach dem Wechsel)
            EditMode::SphereSelected => vec![
                AppCommand::BeginResizeIfDragged { world_pos },
                AppCommand::ResizeSelectedSphere { world_pos },
            ],
            EditMode::SphereResizing => vec![AppCommand::ResizeSelectedSphere { world_pos }],
            EditMode::EditingControlPoint => vec![AppCommand::DragControlPoint { world_pos }],
            EditMode::Idle | EditMode::SphereRepositioning => vec![],
        },
        AppIntent::PointerMoved { world_pos } => match mode {
            EditMode::SphereRepositioning => vec![AppCommand::MoveSelectedSphere { world_pos }],
            _ => vec![],
        },
        AppIntent::CurvePointerPressed { world_pos } => match mode {
            EditMode::Idle => vec![AppCommand::GrabControlPoint { world_pos }],
            _ => vec![],
        },
        AppIntent::CurvePointerReleased { world_pos } => match mode {
            EditMode::EditingControlPoint => vec![AppCommand::ReleaseControlPoint { world_pos }],
            _ => vec![],
        },
        AppIntent::DeleteSelectedRequested => {
            if state.session.is_sphere_mode() {
                vec![AppCommand::DeleteSelectedSphere]
            } else {
                vec![]
            }
        }
        AppIntent::PaletteColorSelected { name } => vec![AppCommand::SetNextColor { name }],
        AppIntent::MirrorModeChanged { curved } => vec![AppCommand::SetMirrorMode { curved }],
        AppIntent::LightMoveRequested { delta } => vec![AppCommand::MoveLight { delta }],
    }
}
