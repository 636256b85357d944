//! # exosky Core
//! This library contains the astronomical coordinate conversions required to place
//! exoplanets around a model Earth in a 3D scene.
//!
//! This crate is left as a stand alone Rust crate, completely independent of any
//! rendering frontend. This is done intentionally, as the scene graph, camera, and
//! picking layers only ever consume the cartesian points produced here, and keeping
//! the math separate makes it available to any renderer.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod catalog;
pub mod constants;
pub mod coords;
pub mod errors;

/// Common useful imports
pub mod prelude {
    pub use crate::catalog::{Catalog, Exoplanet, NOTABLE_PLANETS};
    pub use crate::coords::{
        project, project_sexagesimal, to_radians, CartesianCoordinates, Declination,
        RightAscension,
    };
    pub use crate::errors::{Error, ExoskyResult};
}
