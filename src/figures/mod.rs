//! Konkrete Figurformen: Linie, Polygon, Kreis, Winkel.

pub mod angle;
pub mod circle;
pub mod line;
pub mod polygon;

pub use angle::AngleFigure;
pub use circle::CircleFigure;
pub use line::LineFigure;
pub use polygon::PolygonFigure;
