//! Winkel-Figur: zwei Strahlen mit gemeinsamem Scheitel und Maß-Bogen.

use glam::Vec2;

use crate::core::{FeatureTable, FigureShape, HelperLineSet, PolyLineSet};
use crate::shared::{angle_between, sample_arc, signed_angle};

/// Soll-Radius des Winkel-Bogens in Display-Pixeln.
const ARC_RADIUS_PX: f32 = 12.0;
/// Anteil der Display-Höhe, den der Bogen maximal einnehmen darf.
const ARC_MAX_DISPLAY_FRACTION: f32 = 0.25;
/// Segmentanzahl des Bogens.
const ARC_SEGMENTS: usize = 32;

/// Winkelmessung aus drei Kontrollpunkten: Index 1 ist der Scheitel.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleFigure;

impl AngleFigure {
    /// Feature-Index des Winkels.
    pub const FEATURE_ANGLE: usize = 0;
}

impl FigureShape for AngleFigure {
    fn name(&self) -> &'static str {
        "AngleFigure"
    }

    fn minimum_control_points(&self) -> usize {
        3
    }

    fn maximum_control_points(&self) -> usize {
        3
    }

    fn init_features(&self, features: &mut FeatureTable) {
        let angle = features.add("Angle", "deg");
        features.activate(angle);
    }

    fn generate_polyline(&self, points: &[Vec2], _closed: bool, out: &mut PolyLineSet) {
        out.reset(1);
        for point in points {
            out.append(0, *point);
        }
    }

    fn generate_helper_polyline(
        &self,
        points: &[Vec2],
        mm_per_display_unit: f32,
        display_height: u32,
        out: &mut HelperLineSet,
    ) {
        out.reset(1, true);

        let [first, vertex, second] = points else {
            out.set_visible(0, false);
            return;
        };
        let ray_a = *first - *vertex;
        let ray_b = *second - *vertex;
        if ray_a.length() <= f32::EPSILON || ray_b.length() <= f32::EPSILON {
            out.set_visible(0, false);
            return;
        }

        // Bogen-Radius: zoomabhängige Sollgröße, begrenzt auf die kürzere
        // Strahllänge und einen Anteil der sichtbaren Höhe
        let display_cap = ARC_MAX_DISPLAY_FRACTION * display_height as f32 * mm_per_display_unit;
        let radius = (ARC_RADIUS_PX * mm_per_display_unit)
            .min(0.5 * ray_a.length().min(ray_b.length()))
            .min(display_cap);

        let start_angle = ray_a.y.atan2(ray_a.x);
        let sweep = signed_angle(ray_a, ray_b);
        for vertex_on_arc in sample_arc(*vertex, radius, start_angle, sweep, ARC_SEGMENTS) {
            out.append(0, vertex_on_arc);
        }
    }

    fn evaluate_features(&self, points: &[Vec2], _closed: bool, features: &mut FeatureTable) {
        let angle = match points {
            [first, vertex, second, ..] => {
                angle_between(*first - *vertex, *second - *vertex).to_degrees() as f64
            }
            _ => 0.0,
        };
        features.set_quantity(Self::FEATURE_ANGLE, angle);
    }

    fn clone_shape(&self) -> Box<dyn FigureShape> {
        Box::new(*self)
    }
}
