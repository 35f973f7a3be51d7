// Immutable box value type: construction, formatting, parsing and comparison

pub mod compare;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod unit;


pub use compare::{by_volume_area_edges, sort_boxes};
pub use detector::looks_like_pudelko_string;
pub use error::{Dimension, DimensionBound, PudelkoError};
pub use formatter::FormatSpec;
pub use model::{Pudelko, PudelkoBuilder, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use unit::Unit;
