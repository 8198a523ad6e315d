//! Figur-Engine: Kontrollpunkt-Bestand, Platzierungs-Zustand, Restriktionen
//! und lazy berechnete abgeleitete Geometrie (Polylines, Hilfslinien, Features).

use std::fmt;
use std::sync::Arc;

use anyhow::{bail, Result};
use glam::{Vec2, Vec3};
use log::debug;

use super::features::FeatureTable;
use super::geometry::Geometry2D;
use super::polyline::{CacheState, HelperLineSet, PolyLineSet};
use super::properties::{PropertyMap, PropertyValue};
use super::shape::FigureShape;

/// Eine planare Figur: hält den Kontrollpunkt-Bestand und delegiert
/// formspezifisches Verhalten an ihre [`FigureShape`].
///
/// Abgeleitete Geometrie wird lazy berechnet: jede Mutation des Bestands
/// invalidiert alle drei Caches, die Neuberechnung passiert erst beim
/// nächsten lesenden Zugriff.
pub struct PlanarFigure {
    shape: Box<dyn FigureShape>,
    points: Vec<Vec2>,
    /// Provisorische Slots am Ende des Bestands, die `add_control_point`
    /// zuerst bestätigt bevor neue Punkte angehängt werden.
    pending_slots: usize,
    selected: Option<usize>,
    hovering: Option<Vec2>,
    placed: bool,
    geometry: Option<Arc<dyn Geometry2D>>,
    properties: PropertyMap,
    features: FeatureTable,
    poly_lines: PolyLineSet,
    helper_lines: HelperLineSet,
    poly_line_cache: CacheState,
    helper_line_cache: CacheState,
    feature_cache: CacheState,
}

impl PlanarFigure {
    /// Erstellt eine leere, unplatzierte Figur für die gegebene Form.
    pub fn new(shape: Box<dyn FigureShape>) -> Self {
        let mut properties = PropertyMap::new();
        properties.set("closed", PropertyValue::Bool(shape.closed()));

        let mut features = FeatureTable::new();
        shape.init_features(&mut features);

        Self {
            shape,
            points: Vec::new(),
            pending_slots: 0,
            selected: None,
            hovering: None,
            placed: false,
            geometry: None,
            properties,
            features,
            poly_lines: PolyLineSet::default(),
            helper_lines: HelperLineSet::default(),
            poly_line_cache: CacheState::Invalid,
            helper_line_cache: CacheState::Invalid,
            feature_cache: CacheState::Invalid,
        }
    }

    // ── Platzierung und Kontrollpunkte ──────────────────────────────────

    /// Platziert die Figur: füllt alle minimal nötigen Slots mit dem
    /// (restringierten) Startpunkt. Slot 0 ist bestätigt, die übrigen
    /// Slots sind provisorisch und werden von `add_control_point`
    /// der Reihe nach überschrieben.
    pub fn place_figure(&mut self, point: Vec2) {
        let minimum = self.shape.minimum_control_points();
        let constrained = self.apply_control_point_constraints(0, point);

        self.points.clear();
        self.points.resize(minimum, constrained);
        self.pending_slots = minimum.saturating_sub(1);
        self.placed = true;
        self.selected = match minimum {
            0 => None,
            1 => Some(0),
            _ => Some(1),
        };
        self.invalidate_caches();
        debug!(
            "Figur '{}' platziert mit {} Slots",
            self.shape.name(),
            minimum
        );
    }

    /// Fügt einen Kontrollpunkt hinzu. Bestätigt zuerst provisorische Slots
    /// (überschreibt sie, die Punktzahl bleibt gleich), hängt danach bis zum
    /// Maximum neue Punkte an. `false` wenn das Maximum erreicht ist.
    pub fn add_control_point(&mut self, point: Vec2) -> bool {
        if self.pending_slots > 0 {
            let index = self.points.len() - self.pending_slots;
            self.points[index] = self.apply_control_point_constraints(index, point);
            self.pending_slots -= 1;
            self.selected = Some((index + 1).min(self.points.len() - 1));
            self.invalidate_caches();
            return true;
        }

        if self.points.len() >= self.shape.maximum_control_points() {
            return false;
        }
        let index = self.points.len();
        let constrained = self.apply_control_point_constraints(index, point);
        self.points.push(constrained);
        self.selected = Some(index);
        self.invalidate_caches();
        true
    }

    /// Setzt den Kontrollpunkt `index` auf eine neue Position. Mit
    /// `create_if_missing` wächst der Bestand bis zum Maximum; Lücken werden
    /// mit der neuen Position gefüllt. `false` bei ungültigem Index.
    pub fn set_control_point(&mut self, index: usize, point: Vec2, create_if_missing: bool) -> bool {
        if index < self.points.len() {
            self.points[index] = self.apply_control_point_constraints(index, point);
            self.invalidate_caches();
            return true;
        }
        if create_if_missing && index < self.shape.maximum_control_points() {
            let constrained = self.apply_control_point_constraints(index, point);
            self.points.resize(index + 1, constrained);
            self.invalidate_caches();
            return true;
        }
        false
    }

    /// Setzt den aktuell selektierten Kontrollpunkt. `false` ohne Selektion.
    pub fn set_current_control_point(&mut self, point: Vec2) -> bool {
        match self.selected {
            Some(index) => self.set_control_point(index, point, false),
            None => false,
        }
    }

    /// Entfernt den Kontrollpunkt `index`. Verweigert wenn der Index
    /// ungültig ist oder der Bestand unter das Minimum fallen würde.
    pub fn remove_control_point(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        if self.points.len() <= self.shape.minimum_control_points() {
            return false;
        }

        if index >= self.points.len() - self.pending_slots {
            self.pending_slots -= 1;
        }
        self.points.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        self.invalidate_caches();
        true
    }

    /// Entfernt den letzten Kontrollpunkt.
    pub fn remove_last_control_point(&mut self) -> bool {
        match self.points.len() {
            0 => false,
            len => self.remove_control_point(len - 1),
        }
    }

    /// Position des Kontrollpunkts `index` in Ebenen-Koordinaten.
    pub fn control_point(&self, index: usize) -> Result<Vec2> {
        match self.points.get(index) {
            Some(point) => Ok(*point),
            None => bail!(
                "Kontrollpunkt-Index {} außerhalb des Bestands ({} Punkte)",
                index,
                self.points.len()
            ),
        }
    }

    /// Position des Kontrollpunkts `index` im 3D-Weltraum. Benötigt einen
    /// gesetzten Koordinatenrahmen.
    pub fn world_control_point(&self, index: usize) -> Result<Vec3> {
        let point = self.control_point(index)?;
        match &self.geometry {
            Some(geometry) => Ok(geometry.map_to_3d(point)),
            None => bail!("Figur hat keinen Koordinatenrahmen"),
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn number_of_control_points(&self) -> usize {
        self.points.len()
    }

    /// Minimal benötigte Kontrollpunktzahl der Form.
    pub fn minimum_control_points(&self) -> usize {
        self.shape.minimum_control_points()
    }

    /// Maximal erlaubte Kontrollpunktzahl der Form.
    pub fn maximum_control_points(&self) -> usize {
        self.shape.maximum_control_points()
    }

    /// Ob die Figur platziert wurde.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    // ── Selektion und Hover ─────────────────────────────────────────────

    /// Selektiert den Kontrollpunkt `index`. `false` bei ungültigem Index.
    pub fn select_control_point(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Hebt die Selektion auf.
    pub fn deselect_control_point(&mut self) {
        self.selected = None;
    }

    /// Index des selektierten Kontrollpunkts.
    pub fn selected_control_point(&self) -> Option<usize> {
        self.selected
    }

    /// Setzt die Hover-Vorschauposition (z. B. Mauszeiger vor dem Klick).
    pub fn set_hovering_control_point(&mut self, point: Vec2) {
        self.hovering = Some(point);
    }

    /// Entfernt die Hover-Vorschauposition.
    pub fn reset_hovering_control_point(&mut self) {
        self.hovering = None;
    }

    /// Aktuelle Hover-Vorschauposition.
    pub fn hovering_control_point(&self) -> Option<Vec2> {
        self.hovering
    }

    // ── Koordinatenrahmen ───────────────────────────────────────────────

    /// Setzt den Koordinatenrahmen der Figur.
    pub fn set_geometry(&mut self, geometry: Arc<dyn Geometry2D>) {
        self.geometry = Some(geometry);
        self.invalidate_caches();
    }

    /// Aktueller Koordinatenrahmen.
    pub fn geometry(&self) -> Option<&Arc<dyn Geometry2D>> {
        self.geometry.as_ref()
    }

    /// Wendet Form-Restriktion und Rahmen-Grenzen auf eine Zielposition an.
    /// Die Klemmung passiert im Index-Raum des Rahmens.
    fn apply_control_point_constraints(&self, index: usize, point: Vec2) -> Vec2 {
        let constrained = self.shape.constrain_point(index, point, &self.points);
        match &self.geometry {
            Some(geometry) => {
                let index_point = geometry.world_to_index(constrained);
                let clamped = geometry.bounds().clamp(index_point);
                geometry.index_to_world(clamped)
            }
            None => constrained,
        }
    }

    // ── Properties ──────────────────────────────────────────────────────

    /// Setzt eine Property.
    pub fn set_property(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.set(key, value);
        self.invalidate_caches();
    }

    /// Liest eine Property.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Property-Tabelle der Figur.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Ob der Linienzug geschlossen ist. Die `closed`-Property übersteuert
    /// den Form-Default.
    pub fn is_closed(&self) -> bool {
        self.properties
            .get_bool("closed")
            .unwrap_or_else(|| self.shape.closed())
    }

    // ── Abgeleitete Geometrie (lazy) ────────────────────────────────────

    /// Render-Polyline `index`. Berechnet den Cache bei Bedarf neu;
    /// ein ungültiger Index liefert eine leere Linie.
    pub fn poly_line(&mut self, index: usize) -> &[Vec2] {
        self.ensure_poly_lines();
        self.poly_lines.line(index)
    }

    /// Anzahl der Render-Polylines. Berechnet den Cache bei Bedarf neu.
    pub fn poly_line_count(&mut self) -> usize {
        self.ensure_poly_lines();
        self.poly_lines.len()
    }

    /// Hilfslinie `index` für den gegebenen Display-Maßstab. Berechnet den
    /// Cache bei Bedarf neu; die Maßstabs-Parameter sind bewusst nicht Teil
    /// des Cache-Schlüssels.
    pub fn helper_poly_line(
        &mut self,
        index: usize,
        mm_per_display_unit: f32,
        display_height: u32,
    ) -> &[Vec2] {
        self.ensure_helper_lines(mm_per_display_unit, display_height);
        self.helper_lines.line(index)
    }

    /// Anzahl der Hilfslinien. Berechnet bei Bedarf die Render-Polylines
    /// neu, nie die Hilfslinien selbst.
    pub fn helper_poly_line_count(&mut self) -> usize {
        self.ensure_poly_lines();
        self.helper_lines.len()
    }

    /// Ob Hilfslinie `index` gezeichnet werden soll. Liest nur den Cache.
    pub fn is_helper_to_be_painted(&self, index: usize) -> bool {
        self.helper_lines.is_visible(index)
    }

    /// Berechnet alle Messgrößen neu, falls der Feature-Cache ungültig ist.
    pub fn evaluate_features(&mut self) {
        if self.feature_cache.is_valid() {
            return;
        }
        let closed = self.is_closed();
        self.shape
            .evaluate_features(&self.points, closed, &mut self.features);
        self.feature_cache = CacheState::Valid;
    }

    fn ensure_poly_lines(&mut self) {
        if self.poly_line_cache.is_valid() {
            return;
        }
        let closed = self.is_closed();
        self.shape
            .generate_polyline(&self.points, closed, &mut self.poly_lines);
        self.poly_line_cache = CacheState::Valid;
    }

    fn ensure_helper_lines(&mut self, mm_per_display_unit: f32, display_height: u32) {
        if self.helper_line_cache.is_valid() {
            return;
        }
        self.shape.generate_helper_polyline(
            &self.points,
            mm_per_display_unit,
            display_height,
            &mut self.helper_lines,
        );
        self.helper_line_cache = CacheState::Valid;
    }

    fn invalidate_caches(&mut self) {
        self.poly_line_cache = CacheState::Invalid;
        self.helper_line_cache = CacheState::Invalid;
        self.feature_cache = CacheState::Invalid;
    }

    // ── Features ────────────────────────────────────────────────────────

    /// Wert der Messgröße `index`; 0.0 außerhalb des Bereichs.
    pub fn quantity(&self, index: usize) -> f64 {
        self.features.quantity(index)
    }

    /// Name der Messgröße `index`.
    pub fn feature_name(&self, index: usize) -> Option<&str> {
        self.features.name(index)
    }

    /// Einheit der Messgröße `index`.
    pub fn feature_unit(&self, index: usize) -> Option<&str> {
        self.features.unit(index)
    }

    /// Aktiv-Flag der Messgröße `index`.
    pub fn is_feature_active(&self, index: usize) -> bool {
        self.features.is_active(index)
    }

    /// Aktiviert die Messgröße `index`.
    pub fn activate_feature(&mut self, index: usize) {
        self.features.activate(index);
    }

    /// Deaktiviert die Messgröße `index`.
    pub fn deactivate_feature(&mut self, index: usize) {
        self.features.deactivate(index);
    }

    /// Anzahl der Messgrößen.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    // ── Kopieren ────────────────────────────────────────────────────────

    /// Übernimmt den vollständigen Zustand einer anderen Figur gleicher
    /// Form. Der Koordinatenrahmen wird tief kopiert, der Hover-Zustand
    /// nicht übernommen. Die Render-Polylines werden sofort berechnet,
    /// damit die Kopie ohne weitere Mutation zeichenbar ist.
    pub fn deep_copy_from(&mut self, source: &PlanarFigure) -> Result<()> {
        if self.shape.name() != source.shape.name() {
            bail!(
                "Kopieren zwischen verschiedenen Formen: '{}' <- '{}'",
                self.shape.name(),
                source.shape.name()
            );
        }

        self.shape = source.shape.clone_shape();
        self.points = source.points.clone();
        self.pending_slots = source.pending_slots;
        self.selected = source.selected;
        self.hovering = None;
        self.placed = source.placed;
        self.geometry = source
            .geometry
            .as_ref()
            .map(|geometry| geometry.clone_frame());
        self.properties = source.properties.clone();
        self.features = source.features.clone();

        self.invalidate_caches();
        self.ensure_poly_lines();
        debug!("Figur '{}' tief kopiert", self.shape.name());
        Ok(())
    }
}

impl fmt::Debug for PlanarFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanarFigure")
            .field("shape", &self.shape.name())
            .field("points", &self.points)
            .field("pending_slots", &self.pending_slots)
            .field("selected", &self.selected)
            .field("placed", &self.placed)
            .field("has_geometry", &self.geometry.is_some())
            .field("features", &self.features.len())
            .finish()
    }
}
