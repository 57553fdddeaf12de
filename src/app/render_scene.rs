//! Baut die `RenderScene`-Momentaufnahme aus dem AppState.

use crate::app::state::Selection;
use crate::app::AppState;
use crate::shared::palette::{CURVE_COLOR, POINT_COLOR, SPHERE_SELECT_COLOR};
use crate::shared::{RenderScene, SphereInstance, SPHERE_UNIFORM_STRIDE};

/// Erstellt die Render-Szene für einen Frame.
///
/// Kompiliert die Kurven-Polyline bei Bedarf neu (lazy) und markiert die
/// selektierte Sphäre für die Hervorhebung.
pub fn build(state: &mut AppState) -> RenderScene {
    let selected_index = match state.session.selection {
        Selection::Sphere(index) => Some(index),
        _ => None,
    };
    let curved = state.curved_mirror;

    let mut spheres = Vec::with_capacity(state.scene.sphere_count());
    let mut sphere_uniforms =
        Vec::with_capacity(state.scene.sphere_count() * SPHERE_UNIFORM_STRIDE);
    for (index, sphere) in state.scene.spheres().iter().enumerate() {
        let highlight = (selected_index == Some(index)).then_some(SPHERE_SELECT_COLOR);
        // Im Kurvenspiegel-Modus bleibt das Subjekt dem Trace-Shader vorbehalten
        let visible = index != 0 || !curved;
        spheres.push(SphereInstance {
            position: sphere.position,
            radius: sphere.radius,
            color: sphere.color,
            highlight,
            visible,
        });
        sphere_uniforms.extend_from_slice(&[
            sphere.position.x,
            sphere.radius,
            sphere.position.y,
            sphere.radius,
            sphere.color.r,
            sphere.color.g,
            sphere.color.b,
        ]);
    }

    let curve_polyline = state.scene.curve.polyline().to_vec();
    let control_points = *state.scene.curve.control_points();
    let control_point_uniforms = [
        control_points[0].x,
        control_points[0].y,
        control_points[1].x,
        control_points[1].y,
        control_points[2].x,
        control_points[2].y,
    ];

    RenderScene {
        spheres,
        sphere_uniforms,
        curve_polyline,
        control_points,
        control_point_uniforms,
        curved_mirror: curved,
        light_position: state.light_position,
        curve_color: CURVE_COLOR,
        point_color: POINT_COLOR,
    }
}
