//! Celestial coordinate types and their conversion to cartesian points.
//!
//! Distances are whatever unit the caller supplies, light years and parsecs are
//! both in use by exoplanet catalogs and no conversion between them happens here.
//!

mod cartesian;
mod projection;
mod sexagesimal;

pub use cartesian::*;
pub use projection::*;
pub use sexagesimal::*;
