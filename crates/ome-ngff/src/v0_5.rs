//! OME-NGFF 0.5
//! https://ngff.openmicroscopy.org/0.5/
//!
//! Zarr v3 based. All NGFF keys moved below a single `"ome"` key that holds the version, so
//! multiscale entries no longer carry one:
//! ```json
//! {"ome": {"version": "0.5", "multiscales": [{"axes": [...], "datasets": [...]}], "omero": {...}}}
//! ```

use serde::{Serialize, Deserialize};

pub use crate::unit::{SpaceUnit, TimeUnit};

crate::axis::axis_types!();
crate::coordinate_transformations::coordinate_transformation_types!();
crate::multiscale::multiscale_types!();
crate::omero::omero_types!();

pub const VERSION: &str = "0.5";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Multiscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub axes: Vec<Axis>,

    // ordered by largest (i.e. highest resolution) to smallest.
    pub datasets: Vec<Dataset>,

    // are applied after `coordinate_transformations` in `datasets`
    #[serde(rename = "coordinateTransformations")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_transformations: Option<Vec<CoordinateTransformation>>,

    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downscaling_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MethodMetadata>,
}

impl Multiscale {
    pub fn is_valid(&self) -> bool {
        validation::is_multiscale_valid(
            &self.axes,
            self.coordinate_transformations.as_deref(),
            &self.datasets,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ome {
    pub version: String,

    pub multiscales: Vec<Multiscale>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub omero: Option<Omero>,
}

/// The NGFF part of a 0.5 group's attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub ome: Ome,
}
