//! 2D-Koordinatenrahmen: Welt↔Index-Abbildung, Ebenen-Grenzen und 3D-Einbettung.

use std::sync::Arc;

use glam::{Vec2, Vec3};

/// Achsenparallele Grenzen einer Bildebene im Index-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBounds {
    /// Untere Grenze der X-Achse
    pub x_min: f32,
    /// Obere Grenze der X-Achse
    pub x_max: f32,
    /// Untere Grenze der Y-Achse
    pub y_min: f32,
    /// Obere Grenze der Y-Achse
    pub y_max: f32,
}

impl PlaneBounds {
    /// Erstellt neue Grenzen. Erwartet `min <= max` pro Achse.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Klemmt einen Punkt achsenweise unabhängig in die Grenzen.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x_min, self.x_max),
            point.y.clamp(self.y_min, self.y_max),
        )
    }

    /// Prüft ob ein Punkt innerhalb der Grenzen liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

/// Abstrakter 2D-Koordinatenrahmen, auf dem eine planare Figur liegt.
///
/// Alle Methoden sind reine Funktionen der aktuellen Rahmen-Konfiguration.
/// Ein Rahmen kann von mehreren Figuren geteilt werden und wird von der
/// Figur ausschließlich lesend benutzt.
pub trait Geometry2D: Send + Sync {
    /// Bildet einen Weltpunkt in den Index-Raum der Ebene ab.
    fn world_to_index(&self, point: Vec2) -> Vec2;

    /// Bildet einen Index-Punkt zurück in den Welt-Raum.
    fn index_to_world(&self, point: Vec2) -> Vec2;

    /// Gibt die 2D-Grenzen der Ebene (Index-Raum) zurück.
    fn bounds(&self) -> PlaneBounds;

    /// Bettet einen 2D-Weltpunkt der Ebene in den 3D-Raum ein.
    fn map_to_3d(&self, point: Vec2) -> Vec3;

    /// Erzeugt eine tiefe, unabhängige Kopie des Rahmens.
    fn clone_frame(&self) -> Arc<dyn Geometry2D>;
}

/// Affiner Standard-Rahmen: Ursprung + Spacing pro Achse, feste Grenzen,
/// 3D-Pose über Ursprungspunkt und zwei Achsenvektoren.
#[derive(Debug, Clone)]
pub struct PlaneGeometry {
    origin: Vec2,
    spacing: Vec2,
    bounds: PlaneBounds,
    origin_3d: Vec3,
    axis_x: Vec3,
    axis_y: Vec3,
}

impl PlaneGeometry {
    /// Erstellt einen Rahmen mit Ursprung (0,0), Spacing 1 und Standard-XY-Pose.
    pub fn new(bounds: PlaneBounds) -> Self {
        Self {
            origin: Vec2::ZERO,
            spacing: Vec2::ONE,
            bounds,
            origin_3d: Vec3::ZERO,
            axis_x: Vec3::X,
            axis_y: Vec3::Y,
        }
    }

    /// Erstellt einen Rahmen mit expliziter Welt↔Index-Transformation.
    pub fn with_transform(bounds: PlaneBounds, origin: Vec2, spacing: Vec2) -> Self {
        Self {
            origin,
            spacing,
            bounds,
            origin_3d: Vec3::ZERO,
            axis_x: Vec3::X,
            axis_y: Vec3::Y,
        }
    }

    /// Setzt die 3D-Pose der Ebene (Ursprung und Achsenvektoren).
    pub fn set_pose(&mut self, origin_3d: Vec3, axis_x: Vec3, axis_y: Vec3) {
        self.origin_3d = origin_3d;
        self.axis_x = axis_x;
        self.axis_y = axis_y;
    }
}

impl Geometry2D for PlaneGeometry {
    fn world_to_index(&self, point: Vec2) -> Vec2 {
        (point - self.origin) / self.spacing
    }

    fn index_to_world(&self, point: Vec2) -> Vec2 {
        self.origin + point * self.spacing
    }

    fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    fn map_to_3d(&self, point: Vec2) -> Vec3 {
        self.origin_3d + self.axis_x * point.x + self.axis_y * point.y
    }

    fn clone_frame(&self) -> Arc<dyn Geometry2D> {
        Arc::new(self.clone())
    }
}
