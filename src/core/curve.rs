//! Quadratische Bezier-Kurve mit adaptiver Polyline-Approximation.

use crate::shared::{MAX_SELECT_DISTANCE, SMOOTHNESS};
use glam::Vec3;

/// Steuerbare quadratische Bezier-Kurve mit lazily neuberechneter Polyline.
///
/// Die drei Steuerpunkte werden ausschließlich über [`Curve::set_control_point`]
/// verändert; jede Änderung invalidiert den Polyline-Cache bis zum nächsten
/// [`Curve::compile`].
#[derive(Debug, Clone)]
pub struct Curve {
    /// Die drei Steuerpunkte (p0, p1, p2)
    control_points: [Vec3; 3],
    /// Cache: sortierte Stützpunkte der Polyline-Approximation
    points: Vec<Vec3>,
    /// True wenn `points` zu den aktuellen Steuerpunkten passt
    compiled: bool,
}

impl Curve {
    /// Erstellt eine Kurve aus genau drei Steuerpunkten.
    pub fn new(control_points: [Vec3; 3]) -> Self {
        Self {
            control_points,
            points: Vec::new(),
            compiled: false,
        }
    }

    /// Read-only Zugriff auf die Steuerpunkte.
    pub fn control_points(&self) -> &[Vec3; 3] {
        &self.control_points
    }

    /// Setzt einen Steuerpunkt und invalidiert den Polyline-Cache.
    pub fn set_control_point(&mut self, which: usize, position: Vec3) {
        self.control_points[which] = position;
        self.update();
    }

    /// Invalidiert den Cache; die nächste Abfrage berechnet die Polyline neu.
    pub fn update(&mut self) {
        self.compiled = false;
    }

    /// True wenn der Polyline-Cache aktuell ist.
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Berechnet die Polyline neu, falls Steuerpunkte geändert wurden.
    ///
    /// Stützpunkte sind die beiden Endpunkte plus alle bei der Unterteilung
    /// gesammelten Kurven-Mittelpunkte.
    pub fn compile(&mut self) {
        if self.compiled {
            return;
        }
        let [p0, p1, p2] = self.control_points;
        let mut points = vec![p0, p2];
        rec_bezier_points(p0, p1, p2, &mut points);
        // Sortierung nach x: liefert nur für x-monotone Kurven eine
        // überschneidungsfreie Polyline (bekannte Einschränkung).
        points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        self.points = points;
        self.compiled = true;
    }

    /// Gibt die Polyline zurück; kompiliert bei Bedarf.
    pub fn polyline(&mut self) -> &[Vec3] {
        self.compile();
        &self.points
    }

    /// Index des nächstgelegenen Steuerpunkts innerhalb des Pick-Radius.
    ///
    /// Arbeitet auf den Live-Steuerpunkten, unabhängig vom Cache-Zustand.
    /// Bei exaktem Gleichstand gewinnt der kleinste Index.
    pub fn nearest_control_point(&self, query_point: Vec3) -> Option<usize> {
        let mut which = None;
        let mut best_distance2 = MAX_SELECT_DISTANCE * MAX_SELECT_DISTANCE;
        for (index, control_point) in self.control_points.iter().enumerate() {
            let distance2 = control_point.distance_squared(query_point);
            if distance2 < best_distance2 {
                which = Some(index);
                best_distance2 = distance2;
            }
        }
        which
    }
}

/// Rekursive Mittelpunkt-Unterteilung (de Casteljau) der Kurve (p0, p1, p2).
///
/// Bricht ab sobald die Sehne p0–p2 kürzer als `1.0 / SMOOTHNESS` ist.
/// Der Split-Punkt `l2` liegt exakt auf der Kurve bei t = 0.5 und wird als
/// Stützpunkt gesammelt; danach werden beide Hälften weiter unterteilt.
fn rec_bezier_points(p0: Vec3, p1: Vec3, p2: Vec3, points: &mut Vec<Vec3>) {
    if p0.distance(p2) < 1.0 / SMOOTHNESS {
        return;
    }
    let l1 = p0.lerp(p1, 0.5);
    let r1 = p1.lerp(p2, 0.5);
    let l2 = l1.lerp(r1, 0.5);
    points.push(l2);
    rec_bezier_points(p0, l1, l2, points);
    rec_bezier_points(l2, r1, p2, points);
}
