//! NGFF 0.4 image metadata.

use crate::error::ConversionError;
use crate::supported_versions::NgffVersion;
use crate::zarr_metadata::record::{convert_all, metadata_record};
use crate::zarr_metadata::{v0_5, NgffMetadata};

metadata_record!(v0_4, NgffVersion::V0_4);

impl Metadata {
    /// Builds a 0.4 record from a record of an adjacent version.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnsupportedSourceType`] for records that are not 0.5 records.
    pub fn from_version(metadata: &NgffMetadata) -> Result<Self, ConversionError> {
        match metadata {
            NgffMetadata::V0_5(metadata) => Ok(Self::from_v05(metadata)),
            other => Err(ConversionError::UnsupportedSourceType(other.type_name().to_string())),
        }
    }

    pub fn to_v05(&self) -> v0_5::Metadata {
        self.clone().into()
    }

    pub fn from_v05(metadata: &v0_5::Metadata) -> Self {
        metadata.clone().into()
    }
}

impl From<Metadata> for v0_5::Metadata {
    fn from(record: Metadata) -> Self {
        let Metadata {
            axes,
            datasets,
            coordinate_transformations,
            omero,
            name,
            downscaling_type,
            metadata,
        } = record;
        v0_5::Metadata::new(
            convert_all(axes),
            convert_all(datasets),
            coordinate_transformations.map(convert_all),
        )
            .with_name(name)
            .with_omero(omero.map(Into::into))
            .with_type(downscaling_type)
            .with_method_metadata(metadata.map(Into::into))
    }
}
