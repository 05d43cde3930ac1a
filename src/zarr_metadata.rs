//! Multiscale image metadata records, one per NGFF version, and conversion between them.
//!
//! Conversions are only implemented between adjacent versions (0.4 ↔ 0.5 ↔ 0.6).
//! [`NgffMetadata::to_version`] composes them by walking the supported versions in order:
//! ```
//! use ngff_zarr::zarr_metadata::{v0_4, NgffMetadata};
//! use ngff_zarr::NgffVersion;
//!
//! let axes = serde_json::from_str(r#"[{"name": "y", "type": "space"}, {"name": "x", "type": "space"}]"#)?;
//! let record = NgffMetadata::from(v0_4::Metadata::new(axes, vec![], None));
//! let latest = record.to_version("latest")?;
//! assert_eq!(latest.version(), NgffVersion::V0_6);
//! assert_eq!(latest.dimension_names(), vec!["y", "x"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;

use crate::error::ConversionError;
use crate::supported_versions::{canonicalize, NgffVersion};

pub mod record;
pub mod v0_4;
pub mod v0_5;
pub mod v0_6;

/// A metadata record of any supported version.
#[derive(Clone, Debug, PartialEq)]
pub enum NgffMetadata {
    V0_4(v0_4::Metadata),
    V0_5(v0_5::Metadata),
    V0_6(v0_6::Metadata),
}

impl NgffMetadata {
    pub fn version(&self) -> NgffVersion {
        match self {
            NgffMetadata::V0_4(metadata) => metadata.version(),
            NgffMetadata::V0_5(metadata) => metadata.version(),
            NgffMetadata::V0_6(metadata) => metadata.version(),
        }
    }

    /// The axis names in axis order.
    pub fn dimension_names(&self) -> Vec<&str> {
        match self {
            NgffMetadata::V0_4(metadata) => metadata.dimension_names(),
            NgffMetadata::V0_5(metadata) => metadata.dimension_names(),
            NgffMetadata::V0_6(metadata) => metadata.dimension_names(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            NgffMetadata::V0_4(metadata) => metadata.is_valid(),
            NgffMetadata::V0_5(metadata) => metadata.is_valid(),
            NgffMetadata::V0_6(metadata) => metadata.is_valid(),
        }
    }

    /// The Rust type of the wrapped record.
    pub fn type_name(&self) -> &'static str {
        match self {
            NgffMetadata::V0_4(_) => std::any::type_name::<v0_4::Metadata>(),
            NgffMetadata::V0_5(_) => std::any::type_name::<v0_5::Metadata>(),
            NgffMetadata::V0_6(_) => std::any::type_name::<v0_6::Metadata>(),
        }
    }

    /// Converts this record to `version`, which may be an alias like `"latest"`.
    ///
    /// Returns `self` borrowed if it already has the requested version.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnsupportedVersion`] if `version` is not supported.
    pub fn to_version(&self, version: &str) -> Result<Cow<'_, NgffMetadata>, ConversionError> {
        let target = self.resolve_target(version)?;
        if target == self.version() {
            Ok(Cow::Borrowed(self))
        } else {
            self.clone().into_version(target.as_str()).map(Cow::Owned)
        }
    }

    /// Like [`NgffMetadata::to_version`], but consumes the record so no field is cloned.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnsupportedVersion`] if `version` is not supported.
    pub fn into_version(self, version: &str) -> Result<NgffMetadata, ConversionError> {
        let target = self.resolve_target(version)?;
        let mut metadata = self;
        for step in metadata.version().path_to(target) {
            log::debug!("converting NGFF metadata {} -> {}", metadata.version(), step);
            metadata = metadata.into_adjacent_version(step)?;
        }
        Ok(metadata)
    }

    fn resolve_target(&self, version: &str) -> Result<NgffVersion, ConversionError> {
        canonicalize(version).map_err(|_| ConversionError::UnsupportedVersion {
            from_version: Some(self.version()),
            version: version.to_string(),
        })
    }

    fn into_adjacent_version(self, target: NgffVersion) -> Result<NgffMetadata, ConversionError> {
        match (self, target) {
            (NgffMetadata::V0_4(metadata), NgffVersion::V0_5) => Ok(NgffMetadata::V0_5(metadata.into())),
            (NgffMetadata::V0_5(metadata), NgffVersion::V0_4) => Ok(NgffMetadata::V0_4(metadata.into())),
            (NgffMetadata::V0_5(metadata), NgffVersion::V0_6) => Ok(NgffMetadata::V0_6(metadata.into())),
            (NgffMetadata::V0_6(metadata), NgffVersion::V0_5) => Ok(NgffMetadata::V0_5(metadata.into())),
            (metadata, target) => Err(ConversionError::UnsupportedVersion {
                from_version: Some(metadata.version()),
                version: target.to_string(),
            }),
        }
    }
}

impl From<v0_4::Metadata> for NgffMetadata {
    fn from(metadata: v0_4::Metadata) -> Self {
        NgffMetadata::V0_4(metadata)
    }
}

impl From<v0_5::Metadata> for NgffMetadata {
    fn from(metadata: v0_5::Metadata) -> Self {
        NgffMetadata::V0_5(metadata)
    }
}

impl From<v0_6::Metadata> for NgffMetadata {
    fn from(metadata: v0_6::Metadata) -> Self {
        NgffMetadata::V0_6(metadata)
    }
}
