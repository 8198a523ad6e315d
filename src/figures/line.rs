//! Linien-Figur: zwei Kontrollpunkte, Länge als Feature.

use glam::Vec2;

use crate::core::{FeatureTable, FigureShape, PolyLineSet};

/// Offene Strecke zwischen genau zwei Kontrollpunkten.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFigure;

impl LineFigure {
    /// Feature-Index der Streckenlänge.
    pub const FEATURE_LENGTH: usize = 0;
}

impl FigureShape for LineFigure {
    fn name(&self) -> &'static str {
        "LineFigure"
    }

    fn minimum_control_points(&self) -> usize {
        2
    }

    fn maximum_control_points(&self) -> usize {
        2
    }

    fn init_features(&self, features: &mut FeatureTable) {
        let index = features.add("Length", "mm");
        features.activate(index);
    }

    fn generate_polyline(&self, points: &[Vec2], _closed: bool, out: &mut PolyLineSet) {
        out.reset(1);
        for point in points {
            out.append(0, *point);
        }
    }

    fn evaluate_features(&self, points: &[Vec2], _closed: bool, features: &mut FeatureTable) {
        let length = match points {
            [start, end, ..] => start.distance(*end) as f64,
            _ => 0.0,
        };
        features.set_quantity(Self::FEATURE_LENGTH, length);
    }

    fn clone_shape(&self) -> Box<dyn FigureShape> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlanarFigure;

    #[test]
    fn test_linie_laenge_und_polyline() {
        let mut figure = PlanarFigure::new(Box::new(LineFigure));
        figure.place_figure(Vec2::ZERO);
        figure.set_current_control_point(Vec2::new(3.0, 4.0));

        figure.evaluate_features();
        assert_eq!(figure.quantity(LineFigure::FEATURE_LENGTH), 5.0);
        assert_eq!(figure.feature_unit(LineFigure::FEATURE_LENGTH), Some("mm"));
        assert!(figure.is_feature_active(LineFigure::FEATURE_LENGTH));

        assert_eq!(figure.poly_line_count(), 1);
        assert_eq!(figure.poly_line(0).len(), 2);
        assert!(!figure.is_closed());
    }

    #[test]
    fn test_linie_ohne_punkte_laenge_null() {
        let mut figure = PlanarFigure::new(Box::new(LineFigure));
        figure.evaluate_features();
        assert_eq!(figure.quantity(LineFigure::FEATURE_LENGTH), 0.0);
        assert!(figure.poly_line(0).is_empty());
    }
}
