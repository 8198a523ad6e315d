//! Polyline-Puffer der abgeleiteten Geometrie und ihr Cache-Zustand.

use glam::Vec2;

/// Gültigkeit eines abgeleiteten Caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    /// Cache entspricht dem aktuellen Punktbestand
    Valid,
    /// Cache muss vor dem nächsten Zugriff neu berechnet werden
    #[default]
    Invalid,
}

impl CacheState {
    /// Prüft ob der Cache gültig ist.
    pub fn is_valid(self) -> bool {
        self == CacheState::Valid
    }
}

/// Satz von Render-Polylines einer Figur.
#[derive(Debug, Clone, Default)]
pub struct PolyLineSet {
    lines: Vec<Vec<Vec2>>,
}

impl PolyLineSet {
    /// Verwirft alle Linien und legt `count` leere Linien an.
    pub fn reset(&mut self, count: usize) {
        self.lines.clear();
        self.lines.resize(count, Vec::new());
    }

    /// Hängt einen Vertex an Linie `index` an. Stiller No-op außerhalb des Bereichs.
    pub fn append(&mut self, index: usize, vertex: Vec2) {
        if let Some(line) = self.lines.get_mut(index) {
            line.push(vertex);
        }
    }

    /// Vertices der Linie `index`; leer außerhalb des Bereichs.
    pub fn line(&self, index: usize) -> &[Vec2] {
        self.lines.get(index).map_or(&[], |line| line.as_slice())
    }

    /// Anzahl der Linien.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Prüft ob keine Linien vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Satz von Hilfslinien (z. B. Maß-Bögen) mit Sichtbarkeits-Flag pro Linie.
#[derive(Debug, Clone, Default)]
pub struct HelperLineSet {
    lines: Vec<Vec<Vec2>>,
    visible: Vec<bool>,
}

impl HelperLineSet {
    /// Verwirft alle Hilfslinien und legt `count` leere mit einheitlicher
    /// Start-Sichtbarkeit an.
    pub fn reset(&mut self, count: usize, visible_default: bool) {
        self.lines.clear();
        self.lines.resize(count, Vec::new());
        self.visible.clear();
        self.visible.resize(count, visible_default);
    }

    /// Hängt einen Vertex an Hilfslinie `index` an. Stiller No-op außerhalb des Bereichs.
    pub fn append(&mut self, index: usize, vertex: Vec2) {
        if let Some(line) = self.lines.get_mut(index) {
            line.push(vertex);
        }
    }

    /// Setzt die Sichtbarkeit einer Hilfslinie.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(flag) = self.visible.get_mut(index) {
            *flag = visible;
        }
    }

    /// Sichtbarkeit einer Hilfslinie, `false` außerhalb des Bereichs.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Vertices der Hilfslinie `index`; leer außerhalb des Bereichs.
    pub fn line(&self, index: usize) -> &[Vec2] {
        self.lines.get(index).map_or(&[], |line| line.as_slice())
    }

    /// Anzahl der Hilfslinien.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Prüft ob keine Hilfslinien vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
