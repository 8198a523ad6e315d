//! Polygon-Figur: geschlossener Linienzug mit Umfang und Fläche.

use glam::Vec2;

use crate::core::{FeatureTable, FigureShape, PolyLineSet};
use crate::shared::{polygon_area, polygon_perimeter, polyline_length};

/// Geschlossenes Polygon mit mindestens drei, beliebig vielen Kontrollpunkten.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonFigure;

impl PolygonFigure {
    /// Feature-Index des Umfangs.
    pub const FEATURE_CIRCUMFERENCE: usize = 0;
    /// Feature-Index der Fläche.
    pub const FEATURE_AREA: usize = 1;
}

impl FigureShape for PolygonFigure {
    fn name(&self) -> &'static str {
        "PolygonFigure"
    }

    fn minimum_control_points(&self) -> usize {
        3
    }

    fn maximum_control_points(&self) -> usize {
        usize::MAX
    }

    fn closed(&self) -> bool {
        true
    }

    fn init_features(&self, features: &mut FeatureTable) {
        let circumference = features.add("Circumference", "mm");
        features.activate(circumference);
        let area = features.add("Area", "mm^2");
        features.activate(area);
    }

    fn generate_polyline(&self, points: &[Vec2], _closed: bool, out: &mut PolyLineSet) {
        // Die Schlusskante zieht der Renderer anhand der closed-Property
        out.reset(1);
        for point in points {
            out.append(0, *point);
        }
    }

    fn evaluate_features(&self, points: &[Vec2], closed: bool, features: &mut FeatureTable) {
        let circumference = if closed {
            polygon_perimeter(points)
        } else {
            polyline_length(points)
        };
        features.set_quantity(Self::FEATURE_CIRCUMFERENCE, circumference as f64);

        let area = if closed { polygon_area(points) } else { 0.0 };
        features.set_quantity(Self::FEATURE_AREA, area as f64);
    }

    fn clone_shape(&self) -> Box<dyn FigureShape> {
        Box::new(*self)
    }
}
