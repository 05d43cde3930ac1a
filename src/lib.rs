//! Conversion of OME-NGFF multiscale image metadata between specification versions.
//!
//! Every supported version has its own metadata record in [`zarr_metadata`]. Records of any
//! version are wrapped in [`NgffMetadata`], which converts between versions and reads and writes
//! the NGFF part of a Zarr group's attributes:
//! ```
//! use ngff_zarr::{NgffMetadata, NgffVersion};
//! use serde_json::json;
//!
//! let attributes = json!({
//!     "multiscales": [{
//!         "version": "0.4",
//!         "axes": [{"name": "y", "type": "space"}, {"name": "x", "type": "space"}],
//!         "datasets": [{"path": "0", "coordinateTransformations": [{"type": "scale", "scale": [1.0, 1.0]}]}]
//!     }]
//! });
//! let metadata = NgffMetadata::from_attributes(&attributes)?;
//! let converted = metadata.to_version("0.5")?;
//! assert_eq!(converted.version(), NgffVersion::V0_5);
//! assert_eq!(converted.to_attributes()?["ome"]["version"], "0.5");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attributes;

pub mod error;
pub mod supported_versions;
pub mod zarr_metadata;

pub use ome_ngff;

pub use error::{AttributesError, ConversionError};
pub use supported_versions::{canonicalize, is_supported, NgffVersion, SUPPORTED_VERSIONS};
pub use zarr_metadata::NgffMetadata;
