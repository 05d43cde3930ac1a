use thiserror::Error;

use crate::supported_versions::NgffVersion;

/// An error converting metadata between NGFF versions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The requested version is neither a supported version nor a known alias.
    #[error("{}", unsupported_version_message(.from_version, .version))]
    UnsupportedVersion {
        /// The version of the record being converted, if there is one.
        from_version: Option<NgffVersion>,
        /// The rejected version string.
        version: String,
    },
    /// No converter is registered for metadata of this type.
    #[error("unsupported metadata type: {_0}")]
    UnsupportedSourceType(String),
}

fn unsupported_version_message(from_version: &Option<NgffVersion>, version: &str) -> String {
    match from_version {
        Some(from) => format!("unsupported version conversion: {from} -> {version}"),
        None => format!("unsupported version: {version}"),
    }
}

/// An error reading or writing the NGFF part of a group's attributes.
#[derive(Debug, Error)]
pub enum AttributesError {
    /// Neither an `"ome"` nor a `"multiscales"` key is present.
    #[error("attributes contain no NGFF metadata")]
    UnrecognizedLayout,
    /// The multiscale metadata does not declare its version.
    #[error("multiscale metadata does not declare a version")]
    MissingVersion,
    /// The `"multiscales"` list is empty.
    #[error("attributes contain no multiscale entry")]
    NoMultiscales,
    /// The declared version is not supported.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// Serialization/deserialization error.
    #[error("JSON serialization or deserialization error: {_0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_names_the_transition() {
        let error = ConversionError::UnsupportedVersion {
            from_version: Some(NgffVersion::V0_5),
            version: "0.7".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported version conversion: 0.5 -> 0.7");
    }

    #[test]
    fn unsupported_version_without_source() {
        let error = ConversionError::UnsupportedVersion {
            from_version: None,
            version: "1.0".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported version: 1.0");
    }
}
