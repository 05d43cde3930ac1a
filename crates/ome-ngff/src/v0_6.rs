//! OME-NGFF 0.6
//! https://ngff.openmicroscopy.org/0.6/
//!
//! Same attribute layout as 0.5, i.e. everything below the `"ome"` key.

use serde::{Serialize, Deserialize};

pub use crate::unit::{SpaceUnit, TimeUnit};

crate::axis::axis_types!();
crate::coordinate_transformations::coordinate_transformation_types!();
crate::multiscale::multiscale_types!();
crate::omero::omero_types!();

pub const VERSION: &str = "0.6";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Multiscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub axes: Vec<Axis>,

    pub datasets: Vec<Dataset>,

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

/// The NGFF part of a 0.6 group's attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub ome: Ome,
}
