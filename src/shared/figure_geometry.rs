//! Reine Geometrie-Funktionen für Figur-Polylines.
//!
//! Layer-neutral: kann von `figures` und Tests importiert werden,
//! ohne Engine-Typen zu kennen.

use std::f32::consts::TAU;

use glam::Vec2;

/// Approximierte Länge einer offenen Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Umfang eines geschlossenen Polygonzugs (inklusive Schlusskante).
pub fn polygon_perimeter(points: &[Vec2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let closing = points[points.len() - 1].distance(points[0]);
    polyline_length(points) + closing
}

/// Fläche eines einfachen Polygons (Shoelace-Formel, vorzeichenfrei).
pub fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0.0f32;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        doubled += a.x * b.y - b.x * a.y;
    }
    (doubled * 0.5).abs()
}

/// Tastet einen Vollkreis mit `segments` Segmenten ab (ein Vertex pro Segment,
/// der Renderer schließt die Linie).
pub fn sample_circle(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let mut result = Vec::with_capacity(segments);
    for i in 0..segments {
        let angle = TAU * i as f32 / segments as f32;
        result.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
    }
    result
}

/// Tastet einen Kreisbogen ab: Startwinkel `start_angle`, vorzeichenbehafteter
/// Öffnungswinkel `sweep` (Radiant), `segments + 1` Vertices inklusive Endpunkt.
pub fn sample_arc(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    segments: usize,
) -> Vec<Vec2> {
    let mut result = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = start_angle + sweep * i as f32 / segments as f32;
        result.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
    }
    result
}

/// Vorzeichenfreier Winkel zwischen zwei Vektoren in Radiant ([0, π]).
/// Entartete (Null-)Vektoren liefern 0.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let lengths = a.length() * b.length();
    if lengths <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / lengths).clamp(-1.0, 1.0).acos()
}

/// Vorzeichenbehafteter Winkel von `a` nach `b` in Radiant ((-π, π]).
pub fn signed_angle(a: Vec2, b: Vec2) -> f32 {
    let mut delta = b.y.atan2(b.x) - a.y.atan2(a.x);
    if delta > std::f32::consts::PI {
        delta -= TAU;
    } else if delta <= -std::f32::consts::PI {
        delta += TAU;
    }
    delta
}
