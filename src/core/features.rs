//! Feature-Tabelle: benannte Messgrößen einer Figur mit Einheit und Aktiv-Flag.

use serde::{Deserialize, Serialize};

/// Eine einzelne Messgröße (z. B. Länge, Fläche, Winkel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Anzeigename der Messgröße
    pub name: String,
    /// Physikalische Einheit
    pub unit: String,
    /// Zuletzt berechneter Wert
    pub quantity: f64,
    /// Ob die Messgröße aktuell ausgewertet und angezeigt wird
    pub active: bool,
}

/// Append-only-Tabelle der Messgrößen einer Figur.
///
/// Indizes bleiben über die Lebensdauer der Figur stabil; deaktivierte
/// Features behalten ihren Platz. Zugriffe außerhalb des gültigen Bereichs
/// sind stille No-ops bzw. liefern neutrale Defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureTable {
    features: Vec<Feature>,
}

impl FeatureTable {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine neue Messgröße an und gibt ihren Index zurück.
    /// Startwert 0.0, zunächst inaktiv.
    pub fn add(&mut self, name: impl Into<String>, unit: impl Into<String>) -> usize {
        self.features.push(Feature {
            name: name.into(),
            unit: unit.into(),
            quantity: 0.0,
            active: false,
        });
        self.features.len() - 1
    }

    /// Benennt eine Messgröße um. Stiller No-op außerhalb des Bereichs.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.name = name.into();
        }
    }

    /// Ändert die Einheit einer Messgröße. Stiller No-op außerhalb des Bereichs.
    pub fn set_unit(&mut self, index: usize, unit: impl Into<String>) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.unit = unit.into();
        }
    }

    /// Setzt den Wert einer Messgröße. Stiller No-op außerhalb des Bereichs.
    pub fn set_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.quantity = quantity;
        }
    }

    /// Aktiviert eine Messgröße.
    pub fn activate(&mut self, index: usize) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.active = true;
        }
    }

    /// Deaktiviert eine Messgröße; ihr Index bleibt erhalten.
    pub fn deactivate(&mut self, index: usize) {
        if let Some(feature) = self.features.get_mut(index) {
            feature.active = false;
        }
    }

    /// Name einer Messgröße, `None` außerhalb des Bereichs.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.features.get(index).map(|feature| feature.name.as_str())
    }

    /// Einheit einer Messgröße, `None` außerhalb des Bereichs.
    pub fn unit(&self, index: usize) -> Option<&str> {
        self.features.get(index).map(|feature| feature.unit.as_str())
    }

    /// Wert einer Messgröße, 0.0 außerhalb des Bereichs.
    pub fn quantity(&self, index: usize) -> f64 {
        self.features.get(index).map_or(0.0, |feature| feature.quantity)
    }

    /// Aktiv-Flag einer Messgröße, `false` außerhalb des Bereichs.
    pub fn is_active(&self, index: usize) -> bool {
        self.features.get(index).is_some_and(|feature| feature.active)
    }

    /// Anzahl der Messgrößen.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Prüft ob die Tabelle leer ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iteriert über alle Messgrößen.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_lebenszyklus() {
        let mut table = FeatureTable::new();
        let length = table.add("Length", "mm");
        assert_eq!(length, 0);
        assert_eq!(table.name(length), Some("Length"));
        assert_eq!(table.unit(length), Some("mm"));
        assert_eq!(table.quantity(length), 0.0);
        assert!(!table.is_active(length), "neue Features starten inaktiv");

        table.activate(length);
        table.set_quantity(length, 42.5);
        assert!(table.is_active(length));
        assert_eq!(table.quantity(length), 42.5);

        table.deactivate(length);
        assert!(!table.is_active(length));
        assert_eq!(table.quantity(length), 42.5, "Wert überlebt Deaktivierung");
    }

    #[test]
    fn test_zugriff_ausserhalb_des_bereichs() {
        let mut table = FeatureTable::new();
        table.add("Length", "mm");

        // Lesezugriffe liefern neutrale Defaults
        assert_eq!(table.quantity(5), 0.0);
        assert_eq!(table.name(5), None);
        assert_eq!(table.unit(5), None);
        assert!(!table.is_active(5));

        // Schreibzugriffe sind stille No-ops
        table.set_quantity(5, 1.0);
        table.activate(5);
        table.set_name(5, "x");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_indizes_bleiben_stabil() {
        let mut table = FeatureTable::new();
        let first = table.add("Circumference", "mm");
        let second = table.add("Area", "mm^2");
        table.deactivate(first);

        assert_eq!(table.name(first), Some("Circumference"));
        assert_eq!(table.name(second), Some("Area"));
        assert_eq!(table.len(), 2);
    }
}
