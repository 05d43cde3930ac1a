//! The NGFF versions this crate reads, writes and converts between.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConversionError;

/// Supported NGFF specification versions, oldest first.
pub const SUPPORTED_VERSIONS: [&str; 3] = ["0.4", "0.5", "0.6"];

/// Maps every accepted version string to the version it stands for.
pub const VERSION_ALIASES: [(&str, NgffVersion); 4] = [
    ("0.4", NgffVersion::V0_4),
    ("0.5", NgffVersion::V0_5),
    ("0.6", NgffVersion::V0_6),
    ("latest", NgffVersion::LATEST),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NgffVersion {
    V0_4,
    V0_5,
    V0_6,
}

impl NgffVersion {
    /// All supported versions, oldest first.
    pub const ALL: [NgffVersion; 3] = [NgffVersion::V0_4, NgffVersion::V0_5, NgffVersion::V0_6];

    /// The version `"latest"` resolves to.
    pub const LATEST: NgffVersion = NgffVersion::V0_6;

    pub fn as_str(&self) -> &'static str {
        match self {
            NgffVersion::V0_4 => ome_ngff::v0_4::VERSION,
            NgffVersion::V0_5 => ome_ngff::v0_5::VERSION,
            NgffVersion::V0_6 => ome_ngff::v0_6::VERSION,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    /// The next newer version, if any.
    pub fn next(&self) -> Option<NgffVersion> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The next older version, if any.
    pub fn previous(&self) -> Option<NgffVersion> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// The versions visited when converting from `self` to `target` one adjacent version at a
    /// time, excluding `self`. Empty if `target == self`.
    pub fn path_to(&self, target: NgffVersion) -> Vec<NgffVersion> {
        let mut path = Vec::new();
        let mut current = *self;
        while current != target {
            let step = if current < target { current.next() } else { current.previous() };
            match step {
                Some(step) => {
                    path.push(step);
                    current = step;
                },
                None => break,
            }
        }
        path
    }
}

impl fmt::Display for NgffVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NgffVersion {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonicalize(s)
    }
}

impl Serialize for NgffVersion {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NgffVersion {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let version = String::deserialize(d)?;
        canonicalize(&version).map_err(serde::de::Error::custom)
    }
}

/// Returns true if `version` is one of [`SUPPORTED_VERSIONS`]. Aliases are not versions.
pub fn is_supported(version: &str) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}

/// Resolves a version string or alias (e.g. `"latest"`) to a supported version.
///
/// # Errors
/// Returns [`ConversionError::UnsupportedVersion`] naming `version` if it is neither.
pub fn canonicalize(version: &str) -> Result<NgffVersion, ConversionError> {
    VERSION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == version)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| ConversionError::UnsupportedVersion {
            from_version: None,
            version: version.to_string(),
        })
}
