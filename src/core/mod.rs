//! Core-Domänentypen: Figur-Engine, Koordinatenrahmen, Properties, Features.

pub mod features;
pub mod figure;
pub mod geometry;
pub mod polyline;
pub mod properties;
pub mod shape;

pub use features::{Feature, FeatureTable};
pub use figure::PlanarFigure;
pub use geometry::{Geometry2D, PlaneBounds, PlaneGeometry};
pub use polyline::{CacheState, HelperLineSet, PolyLineSet};
pub use properties::{PropertyMap, PropertyValue};
pub use shape::FigureShape;
