//! Form-Schnittstelle: variantenspezifisches Verhalten einer planaren Figur.

use glam::Vec2;

use super::features::FeatureTable;
use super::polyline::{HelperLineSet, PolyLineSet};

/// Verhalten einer konkreten Figurform (Linie, Polygon, Kreis, Winkel, ...).
///
/// Die Engine hält die Form als `Box<dyn FigureShape>` und ruft die Hooks
/// mit dem aktuellen Punktbestand auf. Formen sind zustandslos; aller
/// veränderlicher Zustand lebt in der Engine.
pub trait FigureShape: Send + Sync {
    /// Eindeutiger Name der Form. Dient u. a. dem Typvergleich beim Kopieren.
    fn name(&self) -> &'static str;

    /// Minimal benötigte Kontrollpunktzahl.
    fn minimum_control_points(&self) -> usize;

    /// Maximal erlaubte Kontrollpunktzahl (`usize::MAX` = unbegrenzt).
    fn maximum_control_points(&self) -> usize;

    /// Ob der Linienzug der Form standardmäßig geschlossen ist.
    fn closed(&self) -> bool {
        false
    }

    /// Registriert die Messgrößen der Form in der Feature-Tabelle.
    fn init_features(&self, features: &mut FeatureTable);

    /// Erzeugt die Render-Polylines aus dem Punktbestand.
    fn generate_polyline(&self, points: &[Vec2], closed: bool, out: &mut PolyLineSet);

    /// Erzeugt zoomabhängige Hilfslinien. Standard: keine.
    fn generate_helper_polyline(
        &self,
        _points: &[Vec2],
        _mm_per_display_unit: f32,
        _display_height: u32,
        out: &mut HelperLineSet,
    ) {
        out.reset(0, false);
    }

    /// Berechnet alle Messgrößen neu.
    fn evaluate_features(&self, points: &[Vec2], closed: bool, features: &mut FeatureTable);

    /// Formspezifische Punkt-Restriktion (z. B. Einrasten auf eine Achse).
    /// Standard: Punkt unverändert übernehmen.
    fn constrain_point(&self, _index: usize, point: Vec2, _points: &[Vec2]) -> Vec2 {
        point
    }

    /// Erzeugt eine Kopie der Form für `deep_copy_from`.
    fn clone_shape(&self) -> Box<dyn FigureShape>;
}
