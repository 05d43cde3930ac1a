//! NGFF 0.5 image metadata.

use crate::error::ConversionError;
use crate::supported_versions::NgffVersion;
use crate::zarr_metadata::record::{convert_all, metadata_record};
use crate::zarr_metadata::{v0_4, v0_6, NgffMetadata};

metadata_record!(v0_5, NgffVersion::V0_5);

impl Metadata {
    /// Builds a 0.5 record from a record of an adjacent version, i.e. 0.4 or 0.6.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnsupportedSourceType`] for any other record.
    pub fn from_version(metadata: &NgffMetadata) -> Result<Self, ConversionError> {
        match metadata {
            NgffMetadata::V0_4(metadata) => Ok(Self::from_v04(metadata)),
            NgffMetadata::V0_6(metadata) => Ok(Self::from_v06(metadata)),
            other => Err(ConversionError::UnsupportedSourceType(other.type_name().to_string())),
        }
    }

    pub fn to_v04(&self) -> v0_4::Metadata {
        self.clone().into()
    }

    pub fn from_v04(metadata: &v0_4::Metadata) -> Self {
        metadata.clone().into()
    }

    pub fn to_v06(&self) -> v0_6::Metadata {
        self.clone().into()
    }

    pub fn from_v06(metadata: &v0_6::Metadata) -> Self {
        metadata.clone().into()
    }
}

impl From<Metadata> for v0_4::Metadata {
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
        v0_4::Metadata::new(
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

impl From<Metadata> for v0_6::Metadata {
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
        v0_6::Metadata::new(
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
