use approx::assert_relative_eq;
use funhouse_scene_editor::shared::MINIMUM_PLACEMENT_SCALE;
use funhouse_scene_editor::{
    app::build_render_scene, AppCommand, AppController, AppState, EditMode, KeyCommand, Selection,
};
use glam::{Vec2, Vec3};

fn new_editor() -> (AppController, AppState) {
    let _ = env_logger::builder().is_test(true).try_init();
    (AppController::new(), AppState::new())
}

#[test]
fn test_click_on_empty_space_creates_and_selects_a_sphere() {
    let (mut controller, mut state) = new_editor();

    let changed = controller
        .register_pointer_event(&mut state, Vec2::new(0.5, 0.5), true, false)
        .expect("Klick sollte ohne Fehler durchlaufen");

    assert!(changed);
    assert_eq!(state.sphere_count(), 2);
    assert_eq!(state.session.mode, EditMode::SphereSelected);
    assert_eq!(state.session.selection, Selection::Sphere(1));

    let sphere = state.selected_sphere().expect("Sphäre sollte selektiert sein");
    assert_eq!(sphere.position, Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(sphere.radius, MINIMUM_PLACEMENT_SCALE);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::SelectOrCreateSphere { .. }));
}

#[test]
fn test_click_on_existing_sphere_selects_instead_of_creating() {
    let (mut controller, mut state) = new_editor();
    let spot = Vec2::new(0.5, 0.5);

    // Anlegen, ablegen (Klick-Klick), dann erneut anklicken
    controller
        .register_pointer_event(&mut state, spot, true, false)
        .unwrap();
    controller
        .register_pointer_event(&mut state, spot, true, false)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::Idle);

    controller
        .register_pointer_event(&mut state, Vec2::new(0.52, 0.5), true, false)
        .unwrap();

    assert_eq!(state.sphere_count(), 2);
    assert_eq!(state.session.selection, Selection::Sphere(1));
}

#[test]
fn test_drag_beyond_threshold_resizes_and_click_finalizes() {
    let (mut controller, mut state) = new_editor();
    controller
        .register_pointer_event(&mut state, Vec2::new(0.5, 1.0), true, false)
        .unwrap();

    // Zitter unterhalb der Schwelle (0.02 < 1.1 × 0.1): kein Resize
    controller
        .register_pointer_event(&mut state, Vec2::new(0.52, 1.0), true, true)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::SphereSelected);
    assert_eq!(
        state.selected_sphere().unwrap().radius,
        MINIMUM_PLACEMENT_SCALE
    );

    // Drag über die Schwelle: Resize-Modus, Radius folgt dem Zeigerabstand
    controller
        .register_pointer_event(&mut state, Vec2::new(0.8, 1.0), true, true)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::SphereResizing);
    let radius = state.selected_sphere().unwrap().radius;
    assert_relative_eq!(radius, 0.3, epsilon = 1e-6);

    // Klick beendet das Resize ohne weiteren Move
    controller
        .register_pointer_event(&mut state, Vec2::new(0.9, 1.9), true, false)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::Idle);
    assert_eq!(state.session.selection, Selection::None);
    assert_eq!(state.scene.sphere(1).unwrap().radius, radius);
    assert_eq!(
        state.scene.sphere(1).unwrap().position,
        Vec3::new(0.5, 1.0, 0.0)
    );
}

#[test]
fn test_resize_is_capped_at_the_scene_bounds() {
    let (mut controller, mut state) = new_editor();
    controller
        .register_pointer_event(&mut state, Vec2::new(0.5, 1.0), true, false)
        .unwrap();

    controller
        .register_pointer_event(&mut state, Vec2::new(5.0, 1.0), true, true)
        .unwrap();

    // Nächste Kante ist rechts (Abstand 0.5); das Zentrum bleibt fix
    assert_relative_eq!(state.selected_sphere().unwrap().radius, 0.5, epsilon = 1e-6);
}

#[test]
fn test_quick_click_enters_repositioning_and_follows_the_pointer() {
    let (mut controller, mut state) = new_editor();
    controller
        .register_pointer_event(&mut state, Vec2::new(-0.5, 0.5), true, false)
        .unwrap();

    // Release ohne Drag: Sphäre folgt ab jetzt dem Zeiger
    controller
        .register_pointer_event(&mut state, Vec2::new(-0.5, 0.5), false, false)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::SphereRepositioning);

    controller
        .register_pointer_event(&mut state, Vec2::new(0.0, 0.7), false, true)
        .unwrap();
    assert_eq!(
        state.selected_sphere().unwrap().position,
        Vec3::new(0.0, 0.7, 0.0)
    );

    // Out-of-bounds-Vorschau wird geklemmt statt abgelehnt
    controller
        .register_pointer_event(&mut state, Vec2::new(2.0, 0.7), false, true)
        .unwrap();
    assert_relative_eq!(state.selected_sphere().unwrap().position.x, 0.9);

    // Klick legt ab und deselektiert
    controller
        .register_pointer_event(&mut state, Vec2::new(0.3, 0.8), true, false)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::Idle);
    assert_eq!(state.session.selection, Selection::None);
    assert_eq!(
        state.scene.sphere(1).unwrap().position,
        Vec3::new(0.3, 0.8, 0.0)
    );
}

#[test]
fn test_delete_removes_the_selected_sphere() {
    let (mut controller, mut state) = new_editor();
    controller
        .register_pointer_event(&mut state, Vec2::new(0.6, 0.6), true, false)
        .unwrap();
    assert_eq!(state.sphere_count(), 2);

    let changed = controller
        .register_key_command(&mut state, KeyCommand::DeleteSelection)
        .expect("Delete sollte ohne Fehler durchlaufen");

    assert!(changed);
    assert_eq!(state.sphere_count(), 1);
    assert_eq!(state.session.mode, EditMode::Idle);
    assert_eq!(state.session.selection, Selection::None);
}

#[test]
fn test_delete_without_selection_is_a_noop() {
    let (mut controller, mut state) = new_editor();

    let changed = controller
        .register_key_command(&mut state, KeyCommand::DeleteSelection)
        .unwrap();

    assert!(!changed);
    assert_eq!(state.sphere_count(), 1);
}

#[test]
fn test_delete_never_removes_the_subject_sphere() {
    let (mut controller, mut state) = new_editor();

    // Subjekt anklicken (Index 0 ist per Hit-Test selektierbar)
    controller
        .register_pointer_event(&mut state, Vec2::new(0.0, 1.05), true, false)
        .unwrap();
    assert_eq!(state.sphere_count(), 1);
    assert_eq!(state.session.selection, Selection::Sphere(0));

    controller
        .register_key_command(&mut state, KeyCommand::DeleteSelection)
        .unwrap();

    // Entfernen greift nicht; die Session bleibt wie sie war
    assert_eq!(state.sphere_count(), 1);
    assert_eq!(state.session.mode, EditMode::SphereSelected);
    assert_eq!(state.session.selection, Selection::Sphere(0));
}

#[test]
fn test_control_point_grab_drag_release_flow() {
    let (mut controller, mut state) = new_editor();
    let before = state.scene.curve.polyline().to_vec();

    // Greifen nahe Steuerpunkt 0: springt sofort zum Zeiger
    let changed = controller
        .register_curve_pointer_event(&mut state, Vec2::new(-0.7, 0.25), true, false)
        .unwrap();
    assert!(changed);
    assert_eq!(state.session.mode, EditMode::EditingControlPoint);
    assert_eq!(state.session.selection, Selection::ControlPoint(0));
    assert_eq!(
        state.scene.curve.control_points()[0],
        Vec3::new(-0.7, 0.25, 0.0)
    );

    // Drag führt den Punkt live nach
    controller
        .register_curve_pointer_event(&mut state, Vec2::new(-0.6, 0.4), true, true)
        .unwrap();
    assert_eq!(
        state.scene.curve.control_points()[0],
        Vec3::new(-0.6, 0.4, 0.0)
    );

    // Release legt ab, invalidiert und beendet die Session
    controller
        .register_curve_pointer_event(&mut state, Vec2::new(-0.55, 0.45), false, false)
        .unwrap();
    assert_eq!(state.session.mode, EditMode::Idle);
    assert_eq!(state.session.selection, Selection::None);
    assert!(!state.scene.curve.is_compiled());

    let after = state.scene.curve.polyline().to_vec();
    assert_ne!(before, after);
    assert!(after.contains(&Vec3::new(-0.55, 0.45, 0.0)));
}

#[test]
fn test_curve_press_far_from_all_control_points_grabs_nothing() {
    let (mut controller, mut state) = new_editor();

    controller
        .register_curve_pointer_event(&mut state, Vec2::new(0.9, 1.9), true, false)
        .unwrap();

    assert_eq!(state.session.mode, EditMode::Idle);
    assert_eq!(state.session.selection, Selection::None);
}

#[test]
fn test_palette_choice_applies_to_the_next_created_sphere() {
    let (mut controller, mut state) = new_editor();

    controller.select_palette_color(&mut state, "jade").unwrap();

    // Unbekannte Namen ändern die Wahl nicht
    controller.select_palette_color(&mut state, "neon").unwrap();

    controller
        .register_pointer_event(&mut state, Vec2::new(0.4, 0.4), true, false)
        .unwrap();

    let jade = state.palette.get("jade").unwrap();
    assert_eq!(state.scene.sphere(1).unwrap().color, jade);
}

#[test]
fn test_render_scene_reflects_mirror_mode_and_selection() {
    let (mut controller, mut state) = new_editor();
    controller
        .register_pointer_event(&mut state, Vec2::new(0.5, 0.5), true, false)
        .unwrap();
    controller.set_mirror_mode(&mut state, true).unwrap();

    let scene = build_render_scene(&mut state);

    assert!(scene.curved_mirror);
    // Subjekt bleibt im Kurvenspiegel-Modus dem Shader vorbehalten
    assert!(!scene.spheres[0].visible);
    assert!(scene.spheres[1].visible);
    assert!(scene.spheres[0].highlight.is_none());
    assert!(scene.spheres[1].highlight.is_some());
    assert_eq!(scene.sphere_count(), 2);
    assert_eq!(scene.sphere_uniforms.len(), 14);
    assert!(scene.curve_polyline.len() > 2);

    let cps = state.scene.curve.control_points();
    assert_eq!(scene.control_point_uniforms[0], cps[0].x);
    assert_eq!(scene.control_point_uniforms[5], cps[2].y);
}

#[test]
fn test_light_moves_by_the_configured_step() {
    let (mut controller, mut state) = new_editor();

    for _ in 0..4 {
        controller
            .register_key_command(
                &mut state,
                KeyCommand::MoveLight {
                    direction: Vec3::new(0.0, 1.0, 0.0),
                },
            )
            .unwrap();
    }

    assert_relative_eq!(state.light_position.y, 1.2, epsilon = 1e-5);
    assert_eq!(state.light_position.x, 0.0);
    assert_eq!(state.light_position.z, 0.0);
}

#[test]
fn test_light_movement_stops_at_the_box_edges() {
    let (mut controller, mut state) = new_editor();
    let step = state.options.light_move_step;

    for _ in 0..25 {
        controller
            .register_key_command(
                &mut state,
                KeyCommand::MoveLight {
                    direction: Vec3::new(0.0, 1.0, 0.0),
                },
            )
            .unwrap();
    }

    // Das Licht bleibt strikt in der Box und endet höchstens einen Schritt
    // unter der Oberkante
    assert!(state.light_position.y < 2.0);
    assert!(state.light_position.y > 2.0 - 2.0 * step);
}
