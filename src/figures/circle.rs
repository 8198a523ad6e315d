//! Kreis-Figur: Zentrum plus Radius-Griffpunkt.

use std::f64::consts::PI;

use glam::Vec2;

use crate::core::{FeatureTable, FigureShape, PolyLineSet};
use crate::shared::sample_circle;

/// Anzahl der Kreissegmente für die gerenderte Polyline.
const CIRCLE_SEGMENTS: usize = 64;

/// Kreis aus zwei Kontrollpunkten: Index 0 = Zentrum, Index 1 = Radius-Griff.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleFigure;

impl CircleFigure {
    /// Feature-Index des Radius.
    pub const FEATURE_RADIUS: usize = 0;
    /// Feature-Index des Durchmessers.
    pub const FEATURE_DIAMETER: usize = 1;
    /// Feature-Index der Fläche.
    pub const FEATURE_AREA: usize = 2;
}

impl FigureShape for CircleFigure {
    fn name(&self) -> &'static str {
        "CircleFigure"
    }

    fn minimum_control_points(&self) -> usize {
        2
    }

    fn maximum_control_points(&self) -> usize {
        2
    }

    fn closed(&self) -> bool {
        true
    }

    fn init_features(&self, features: &mut FeatureTable) {
        let radius = features.add("Radius", "mm");
        features.activate(radius);
        let diameter = features.add("Diameter", "mm");
        features.activate(diameter);
        let area = features.add("Area", "mm^2");
        features.activate(area);
    }

    fn generate_polyline(&self, points: &[Vec2], _closed: bool, out: &mut PolyLineSet) {
        out.reset(1);
        let [center, handle, ..] = points else {
            return;
        };
        let radius = center.distance(*handle);
        for vertex in sample_circle(*center, radius, CIRCLE_SEGMENTS) {
            out.append(0, vertex);
        }
    }

    fn evaluate_features(&self, points: &[Vec2], _closed: bool, features: &mut FeatureTable) {
        let radius = match points {
            [center, handle, ..] => center.distance(*handle) as f64,
            _ => 0.0,
        };
        features.set_quantity(Self::FEATURE_RADIUS, radius);
        features.set_quantity(Self::FEATURE_DIAMETER, 2.0 * radius);
        features.set_quantity(Self::FEATURE_AREA, PI * radius * radius);
    }

    fn clone_shape(&self) -> Box<dyn FigureShape> {
        Box::new(*self)
    }
}
