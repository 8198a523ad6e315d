//! Planar-Figure-Engine.
//!
//! Zustands- und Geometrie-Kern für planare Mess-Figuren auf 2D-Bildebenen:
//! Kontrollpunkt-Bestand mit Platzierungs-Zustandsmaschine, formspezifische
//! Restriktionen, lazy berechnete Render-Polylines und Hilfslinien sowie
//! eine Feature-Tabelle für Messgrößen (Länge, Fläche, Winkel, ...).
//!
//! Die Engine selbst rendert nicht; sie liefert fertige Polylines und
//! Messwerte an darüberliegende Anzeige-Schichten.

pub mod core;
pub mod figures;
pub mod shared;

pub use crate::core::{
    CacheState, Feature, FeatureTable, FigureShape, Geometry2D, HelperLineSet, PlanarFigure,
    PlaneBounds, PlaneGeometry, PolyLineSet, PropertyMap, PropertyValue,
};
pub use crate::figures::{AngleFigure, CircleFigure, LineFigure, PolygonFigure};
