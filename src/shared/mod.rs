//! Layer-neutrale Hilfsfunktionen (reine Geometrie, keine Engine-Typen).

pub mod figure_geometry;

pub use figure_geometry::{
    angle_between, polygon_area, polygon_perimeter, polyline_length, sample_arc, sample_circle,
    signed_angle,
};
