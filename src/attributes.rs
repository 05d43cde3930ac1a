//! Reading and writing records as the NGFF part of a group's attributes.
//!
//! The layout depends on the version:
//! - 0.4 keeps `"multiscales"` and `"omero"` at the top level, each multiscale entry declares its
//!   own `"version"`.
//! - 0.5 and 0.6 nest everything below `"ome"`, which declares the version once.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AttributesError, ConversionError};
use crate::supported_versions::{canonicalize, is_supported, NgffVersion};
use crate::zarr_metadata::record::DEFAULT_NAME;
use crate::zarr_metadata::{v0_4, v0_5, v0_6, NgffMetadata};

impl NgffMetadata {
    /// Serializes this record into the attribute layout of its version.
    ///
    /// # Errors
    /// Returns [`AttributesError::Serde`] if serialization fails.
    pub fn to_attributes(&self) -> Result<Value, AttributesError> {
        let attributes = match self {
            NgffMetadata::V0_4(metadata) => serde_json::to_value(ome_ngff::v0_4::Attributes {
                multiscales: vec![multiscale_v04(metadata)],
                omero: metadata.omero.clone(),
            })?,
            NgffMetadata::V0_5(metadata) => serde_json::to_value(ome_ngff::v0_5::Attributes {
                ome: ome_ngff::v0_5::Ome {
                    version: ome_ngff::v0_5::VERSION.to_string(),
                    multiscales: vec![multiscale_v05(metadata)],
                    omero: metadata.omero.clone(),
                },
            })?,
            NgffMetadata::V0_6(metadata) => serde_json::to_value(ome_ngff::v0_6::Attributes {
                ome: ome_ngff::v0_6::Ome {
                    version: ome_ngff::v0_6::VERSION.to_string(),
                    multiscales: vec![multiscale_v06(metadata)],
                    omero: metadata.omero.clone(),
                },
            })?,
        };
        Ok(attributes)
    }

    /// Reads a record from a group's attributes. The version is taken from the attributes.
    ///
    /// Only the first multiscale entry is read.
    ///
    /// # Errors
    /// Returns an [`AttributesError`] if the attributes hold no NGFF metadata of a supported
    /// version or do not match the layout of their declared version.
    pub fn from_attributes(attributes: &Value) -> Result<Self, AttributesError> {
        let version = declared_version(attributes)?;
        if !is_supported(version) {
            return Err(ConversionError::UnsupportedVersion {
                from_version: None,
                version: version.to_string(),
            }.into());
        }
        let metadata = match canonicalize(version)? {
            NgffVersion::V0_4 => {
                let ome_ngff::v0_4::Attributes { multiscales, omero } = Deserialize::deserialize(attributes)?;
                NgffMetadata::V0_4(record_v04(first_multiscale(multiscales)?, omero))
            },
            NgffVersion::V0_5 => {
                let ome_ngff::v0_5::Attributes { ome } = Deserialize::deserialize(attributes)?;
                NgffMetadata::V0_5(record_v05(first_multiscale(ome.multiscales)?, ome.omero))
            },
            NgffVersion::V0_6 => {
                let ome_ngff::v0_6::Attributes { ome } = Deserialize::deserialize(attributes)?;
                NgffMetadata::V0_6(record_v06(first_multiscale(ome.multiscales)?, ome.omero))
            },
        };
        Ok(metadata)
    }
}

fn declared_version(attributes: &Value) -> Result<&str, AttributesError> {
    if let Some(ome) = attributes.get("ome") {
        return ome.get("version").and_then(Value::as_str).ok_or(AttributesError::MissingVersion);
    }
    match attributes.get("multiscales") {
        Some(Value::Array(multiscales)) => multiscales
            .first()
            .ok_or(AttributesError::NoMultiscales)?
            .get("version")
            .and_then(Value::as_str)
            .ok_or(AttributesError::MissingVersion),
        _ => Err(AttributesError::UnrecognizedLayout),
    }
}

fn first_multiscale<T>(multiscales: Vec<T>) -> Result<T, AttributesError> {
    if multiscales.len() > 1 {
        log::warn!("ignoring {} additional multiscale entries", multiscales.len() - 1);
    }
    multiscales.into_iter().next().ok_or(AttributesError::NoMultiscales)
}

fn multiscale_v04(metadata: &v0_4::Metadata) -> ome_ngff::v0_4::Multiscale {
    ome_ngff::v0_4::Multiscale {
        version: Some(ome_ngff::v0_4::VERSION.to_string()),
        name: Some(metadata.name.clone()),
        axes: metadata.axes.clone(),
        datasets: metadata.datasets.clone(),
        coordinate_transformations: metadata.coordinate_transformations.clone(),
        downscaling_type: metadata.downscaling_type.clone(),
        metadata: metadata.metadata.clone(),
    }
}

fn record_v04(multiscale: ome_ngff::v0_4::Multiscale, omero: Option<v0_4::Omero>) -> v0_4::Metadata {
    let ome_ngff::v0_4::Multiscale {
        version: _,
        name,
        axes,
        datasets,
        coordinate_transformations,
        downscaling_type,
        metadata,
    } = multiscale;
    v0_4::Metadata::new(axes, datasets, coordinate_transformations)
        .with_name(name.unwrap_or_else(|| DEFAULT_NAME.to_string()))
        .with_omero(omero)
        .with_type(downscaling_type)
        .with_method_metadata(metadata)
}

fn multiscale_v05(metadata: &v0_5::Metadata) -> ome_ngff::v0_5::Multiscale {
    ome_ngff::v0_5::Multiscale {
        name: Some(metadata.name.clone()),
        axes: metadata.axes.clone(),
        datasets: metadata.datasets.clone(),
        coordinate_transformations: metadata.coordinate_transformations.clone(),
        downscaling_type: metadata.downscaling_type.clone(),
        metadata: metadata.metadata.clone(),
    }
}

fn record_v05(multiscale: ome_ngff::v0_5::Multiscale, omero: Option<v0_5::Omero>) -> v0_5::Metadata {
    let ome_ngff::v0_5::Multiscale {
        name,
        axes,
        datasets,
        coordinate_transformations,
        downscaling_type,
        metadata,
    } = multiscale;
    v0_5::Metadata::new(axes, datasets, coordinate_transformations)
        .with_name(name.unwrap_or_else(|| DEFAULT_NAME.to_string()))
        .with_omero(omero)
        .with_type(downscaling_type)
        .with_method_metadata(metadata)
}

fn multiscale_v06(metadata: &v0_6::Metadata) -> ome_ngff::v0_6::Multiscale {
    ome_ngff::v0_6::Multiscale {
        name: Some(metadata.name.clone()),
        axes: metadata.axes.clone(),
        datasets: metadata.datasets.clone(),
        coordinate_transformations: metadata.coordinate_transformations.clone(),
        downscaling_type: metadata.downscaling_type.clone(),
        metadata: metadata.metadata.clone(),
    }
}

fn record_v06(multiscale: ome_ngff::v0_6::Multiscale, omero: Option<v0_6::Omero>) -> v0_6::Metadata {
    let ome_ngff::v0_6::Multiscale {
        name,
        axes,
        datasets,
        coordinate_transformations,
        downscaling_type,
        metadata,
    } = multiscale;
    v0_6::Metadata::new(axes, datasets, coordinate_transformations)
        .with_name(name.unwrap_or_else(|| DEFAULT_NAME.to_string()))
        .with_omero(omero)
        .with_type(downscaling_type)
        .with_method_metadata(metadata)
}
