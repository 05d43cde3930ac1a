//! OME-NGFF multiscale image metadata, one module per specification version.
//! https://ngff.openmicroscopy.org/0.4/
//! https://ngff.openmicroscopy.org/0.5/
//! https://ngff.openmicroscopy.org/latest/#multiscale-md
//!
//! The value types (axes, datasets, coordinate transformations, omero, method metadata) are
//! defined separately in each version module. Values of adjacent versions convert into each
//! other via `From`:
//! ```
//! use ome_ngff::{v0_4, v0_5};
//!
//! let axis = v0_4::Axis::Space(v0_4::SpaceAxis::new("x", Some(ome_ngff::SpaceUnit::Micrometer)));
//! let axis: v0_5::Axis = axis.into();
//! assert_eq!(axis.name(), "x");
//! ```

mod axis;
mod coordinate_transformations;
mod multiscale;
mod omero;
mod util;

pub mod convert;
pub mod unit;
pub mod v0_4;
pub mod v0_5;
pub mod v0_6;

pub use unit::{
    SpaceUnit,
    TimeUnit,
};
