//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping};
use super::{AppCommand, AppIntent, AppState, KeyCommand};
use glam::Vec2;

/// Orchestriert Eingabe-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Primärtasten-Kanal: (down, drag) kodiert Klick, Release, Drag und Move.
    ///
    /// Gibt `true` zurück, wenn mindestens ein Command ausgeführt wurde;
    /// der Host sollte dann neu zeichnen.
    pub fn register_pointer_event(
        &mut self,
        state: &mut AppState,
        world_pos: Vec2,
        button_down: bool,
        is_drag: bool,
    ) -> anyhow::Result<bool> {
        let intent = match (button_down, is_drag) {
            (true, false) => AppIntent::PointerPressed { world_pos },
            (false, false) => AppIntent::PointerReleased { world_pos },
            (true, true) => AppIntent::PointerDragged { world_pos },
            (false, true) => AppIntent::PointerMoved { world_pos },
        };
        self.handle_intent(state, intent)
    }

    /// Kurven-Kanal (alternativer Zeigerknopf): greift und platziert Steuerpunkte.
    ///
    /// Drag und Move laufen über denselben Pfad wie der Primär-Kanal; nur
    /// Klick und Release unterscheiden sich.
    pub fn register_curve_pointer_event(
        &mut self,
        state: &mut AppState,
        world_pos: Vec2,
        button_down: bool,
        is_drag: bool,
    ) -> anyhow::Result<bool> {
        let intent = match (button_down, is_drag) {
            (true, false) => AppIntent::CurvePointerPressed { world_pos },
            (false, false) => AppIntent::CurvePointerReleased { world_pos },
            (true, true) => AppIntent::PointerDragged { world_pos },
            (false, true) => AppIntent::PointerMoved { world_pos },
        };
        self.handle_intent(state, intent)
    }

    /// Tastatur-Befehle des Hosts.
    pub fn register_key_command(
        &mut self,
        state: &mut AppState,
        command: KeyCommand,
    ) -> anyhow::Result<bool> {
        let intent = match command {
            KeyCommand::DeleteSelection => AppIntent::DeleteSelectedRequested,
            KeyCommand::MoveLight { direction } => AppIntent::LightMoveRequested {
                delta: direction * state.options.light_move_step,
            },
        };
        self.handle_intent(state, intent)
    }

    /// Wählt die Palettenfarbe für die nächste neu platzierte Sphäre.
    pub fn select_palette_color(
        &mut self,
        state: &mut AppState,
        name: &str,
    ) -> anyhow::Result<bool> {
        self.handle_intent(
            state,
            AppIntent::PaletteColorSelected {
                name: name.to_string(),
            },
        )
    }

    /// Setzt den Spiegel-Modus (true = Kurvenspiegel).
    pub fn set_mirror_mode(&mut self, state: &mut AppState, curved: bool) -> anyhow::Result<bool> {
        self.handle_intent(state, AppIntent::MirrorModeChanged { curved })
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<bool> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        let executed = !commands.is_empty();
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(executed)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Sphären-Lifecycle ===
            AppCommand::SelectOrCreateSphere { world_pos } => {
                handlers::editing::select_or_create_sphere(state, world_pos)
            }
            AppCommand::PlaceSelectedSphere { world_pos } => {
                handlers::editing::place_selected_sphere(state, world_pos)
            }
            AppCommand::DeselectSphere => handlers::editing::deselect_sphere(state),
            AppCommand::BeginSphereRepositioning => {
                handlers::editing::begin_sphere_repositioning(state)
            }
            AppCommand::BeginResizeIfDragged { world_pos } => {
                handlers::editing::begin_resize_if_dragged(state, world_pos)
            }
            AppCommand::ResizeSelectedSphere { world_pos } => {
                handlers::editing::resize_selected_sphere(state, world_pos)
            }
            AppCommand::MoveSelectedSphere { world_pos } => {
                handlers::editing::move_selected_sphere(state, world_pos)
            }
            AppCommand::DeleteSelectedSphere => handlers::editing::delete_selected_sphere(state),

            // === Steuerpunkte ===
            AppCommand::GrabControlPoint { world_pos } => {
                handlers::curve::grab_control_point(state, world_pos)
            }
            AppCommand::DragControlPoint { world_pos } => {
                handlers::curve::drag_control_point(state, world_pos)
            }
            AppCommand::ReleaseControlPoint { world_pos } => {
                handlers::curve::release_control_point(state, world_pos)
            }

            // === Ansicht ===
            AppCommand::SetNextColor { name } => handlers::view::set_next_color(state, &name),
            AppCommand::SetMirrorMode { curved } => handlers::view::set_mirror_mode(state, curved),
            AppCommand::MoveLight { delta } => handlers::view::move_light(state, delta),
        }

        Ok(())
    }
}
