//! Conversions between the value types of adjacent NGFF versions.
//!
//! Every field is mapped explicitly, so a version whose types start to diverge fails to compile
//! here instead of silently dropping data.

macro_rules! one_way_conversions {
    ($from:ident => $to:ident) => {
        impl From<$from::SpaceAxis> for $to::SpaceAxis {
            fn from(axis: $from::SpaceAxis) -> Self {
                Self {
                    name: axis.name,
                    unit: axis.unit,
                }
            }
        }

        impl From<$from::TimeAxis> for $to::TimeAxis {
            fn from(axis: $from::TimeAxis) -> Self {
                Self {
                    name: axis.name,
                    unit: axis.unit,
                }
            }
        }

        impl From<$from::ChannelAxis> for $to::ChannelAxis {
            fn from(axis: $from::ChannelAxis) -> Self {
                Self {
                    name: axis.name,
                }
            }
        }

        impl From<$from::CustomAxis> for $to::CustomAxis {
            fn from(axis: $from::CustomAxis) -> Self {
                Self {
                    name: axis.name,
                    axis_type: axis.axis_type,
                    unit: axis.unit,
                }
            }
        }

        impl From<$from::Axis> for $to::Axis {
            fn from(axis: $from::Axis) -> Self {
                match axis {
                    $from::Axis::Space(axis) => $to::Axis::Space(axis.into()),
                    $from::Axis::Time(axis) => $to::Axis::Time(axis.into()),
                    $from::Axis::Channel(axis) => $to::Axis::Channel(axis.into()),
                    $from::Axis::Custom(axis) => $to::Axis::Custom(axis.into()),
                }
            }
        }

        impl From<$from::CoordinateTransformation> for $to::CoordinateTransformation {
            fn from(transformation: $from::CoordinateTransformation) -> Self {
                match transformation {
                    $from::CoordinateTransformation::Identity($from::Identity {}) => {
                        $to::CoordinateTransformation::Identity($to::Identity {})
                    },
                    $from::CoordinateTransformation::Translation($from::Translation::Translation(translation)) => {
                        $to::CoordinateTransformation::Translation($to::Translation::Translation(translation))
                    },
                    $from::CoordinateTransformation::Translation($from::Translation::Path(path)) => {
                        $to::CoordinateTransformation::Translation($to::Translation::Path(path))
                    },
                    $from::CoordinateTransformation::Scale($from::Scale::Scale(scale)) => {
                        $to::CoordinateTransformation::Scale($to::Scale::Scale(scale))
                    },
                    $from::CoordinateTransformation::Scale($from::Scale::Path(path)) => {
                        $to::CoordinateTransformation::Scale($to::Scale::Path(path))
                    },
                }
            }
        }

        impl From<$from::Dataset> for $to::Dataset {
            fn from(dataset: $from::Dataset) -> Self {
                Self {
                    path: dataset.path,
                    coordinate_transformations: dataset.coordinate_transformations.into_iter().map(Into::into).collect(),
                }
            }
        }

        impl From<$from::MethodMetadata> for $to::MethodMetadata {
            fn from(metadata: $from::MethodMetadata) -> Self {
                Self {
                    description: metadata.description,
                    method: metadata.method,
                    version: metadata.version,
                    additional_fields: metadata.additional_fields,
                }
            }
        }

        impl From<$from::Window> for $to::Window {
            fn from(window: $from::Window) -> Self {
                Self {
                    min: window.min,
                    max: window.max,
                    start: window.start,
                    end: window.end,
                }
            }
        }

        impl From<$from::Channel> for $to::Channel {
            fn from(channel: $from::Channel) -> Self {
                Self {
                    active: channel.active,
                    coefficient: channel.coefficient,
                    color: channel.color,
                    family: channel.family,
                    inverted: channel.inverted,
                    label: channel.label,
                    window: channel.window.into(),
                }
            }
        }

        impl From<$from::RDefs> for $to::RDefs {
            fn from(r_defs: $from::RDefs) -> Self {
                Self {
                    default_t: r_defs.default_t,
                    default_z: r_defs.default_z,
                    model: r_defs.model,
                }
            }
        }

        // "omero.version" is informational and kept as is
        impl From<$from::Omero> for $to::Omero {
            fn from(omero: $from::Omero) -> Self {
                Self {
                    id: omero.id,
                    name: omero.name,
                    version: omero.version,
                    channels: omero.channels.into_iter().map(Into::into).collect(),
                    r_defs: omero.r_defs.map(Into::into),
                }
            }
        }
    };
}

macro_rules! adjacent_conversions {
    ($older:ident <=> $newer:ident) => {
        one_way_conversions!($older => $newer);
        one_way_conversions!($newer => $older);
    };
}

use crate::{v0_4, v0_5, v0_6};

adjacent_conversions!(v0_4 <=> v0_5);
adjacent_conversions!(v0_5 <=> v0_6);
