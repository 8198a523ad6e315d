//! Typisierte Key-Value-Properties einer Figur mit stabiler Einfüge-Reihenfolge.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Wert einer Figur-Property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Boolescher Wert
    Bool(bool),
    /// Ganzzahl
    Int(i64),
    /// Gleitkommazahl
    Float(f64),
    /// Zeichenkette
    String(String),
}

/// Property-Tabelle einer Figur. Bewahrt die Einfüge-Reihenfolge,
/// damit Serialisierung und UI-Listen deterministisch bleiben.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Erstellt eine leere Property-Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt oder überschreibt eine Property.
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.entries.insert(key.into(), value);
    }

    /// Liest eine Property, falls vorhanden.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    /// Liest eine Bool-Property. `None` wenn fehlend oder falsch typisiert.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(PropertyValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Liest eine Int-Property. `None` wenn fehlend oder falsch typisiert.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(PropertyValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Liest eine Float-Property. `None` wenn fehlend oder falsch typisiert.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(PropertyValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Liest eine String-Property. `None` wenn fehlend oder falsch typisiert.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(PropertyValue::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Entfernt eine Property und erhält dabei die Reihenfolge der übrigen.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(key)
    }

    /// Anzahl der Properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Prüft ob die Tabelle leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert über alle Properties in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typisierte_zugriffe() {
        let mut properties = PropertyMap::new();
        properties.set("closed", PropertyValue::Bool(true));
        properties.set("line_width", PropertyValue::Float(2.5));
        properties.set("name", PropertyValue::String("Messung 1".into()));

        assert_eq!(properties.get_bool("closed"), Some(true));
        assert_eq!(properties.get_float("line_width"), Some(2.5));
        assert_eq!(properties.get_string("name"), Some("Messung 1"));
        // Falscher Typ liefert None statt zu konvertieren
        assert_eq!(properties.get_int("line_width"), None);
        assert_eq!(properties.get_bool("fehlt"), None);
    }

    #[test]
    fn test_ueberschreiben_und_entfernen() {
        let mut properties = PropertyMap::new();
        properties.set("closed", PropertyValue::Bool(false));
        properties.set("closed", PropertyValue::Bool(true));
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get_bool("closed"), Some(true));

        assert_eq!(
            properties.remove("closed"),
            Some(PropertyValue::Bool(true))
        );
        assert!(properties.is_empty());
    }

    #[test]
    fn test_serde_roundtrip_erhaelt_reihenfolge() {
        let mut properties = PropertyMap::new();
        properties.set("b", PropertyValue::Int(1));
        properties.set("a", PropertyValue::Int(2));
        properties.set("c", PropertyValue::Bool(false));

        let json = serde_json::to_string(&properties).unwrap();
        let restored: PropertyMap = serde_json::from_str(&json).unwrap();

        let keys: Vec<&str> = restored.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a", "c"], "Reihenfolge muss erhalten bleiben");
    }
}
