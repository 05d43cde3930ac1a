// https://ngff.openmicroscopy.org/0.4/#multiscale-md

/// Defines `Dataset`, `MethodMetadata` and the `validation` module in the invoking version
/// module. Requires `axis_types!` and `coordinate_transformation_types!` in the same module.
macro_rules! multiscale_types {
    () => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct Dataset {
            pub path: String,

            #[serde(rename = "coordinateTransformations")]
            pub coordinate_transformations: Vec<CoordinateTransformation>,
        }

        impl Dataset {
            pub fn new(path: impl Into<String>, coordinate_transformations: Vec<CoordinateTransformation>) -> Self {
                Self {
                    path: path.into(),
                    coordinate_transformations,
                }
            }
        }

        /// Describes the downscaling method, e.g. the function used and the parameters it got.
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct MethodMetadata {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub description: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub method: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub version: Option<String>,

            // e.g. "args" and "kwargs" of the method
            #[serde(flatten)]
            pub additional_fields: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl MethodMetadata {
            pub fn new(description: impl Into<String>, method: impl Into<String>, version: impl Into<String>) -> Self {
                Self {
                    description: Some(description.into()),
                    method: Some(method.into()),
                    version: Some(version.into()),
                    additional_fields: ::serde_json::Map::new(),
                }
            }
        }

        pub mod validation {
            use super::{Axis, CoordinateTransformation, Dataset};
            use $crate::util::warn_unless;

            pub fn is_multiscale_valid(
                axes: &[Axis],
                coordinate_transformations: Option<&[CoordinateTransformation]>,
                datasets: &[Dataset],
            ) -> bool {
                let axes_length = axes.len();
                are_axes_valid(axes) &&
                    coordinate_transformations.map_or(true, |c| are_coordinate_transformations_valid(c, axes_length)) &&
                    datasets.iter().all(|d| are_coordinate_transformations_valid(&d.coordinate_transformations, axes_length))
            }

            pub fn are_axes_valid(axes: &[Axis]) -> bool {
                is_axes_length_valid(axes) &&
                    are_axes_types_valid(axes) &&
                    is_axes_order_valid(axes)
            }

            pub fn is_axes_length_valid(axes: &[Axis]) -> bool {
                warn_unless!(
                    axes.len() >= 2 && axes.len() <= 5,
                    "The length of \"axes\" must be between 2 and 5. Got: {}",
                    axes.len(),
                )
            }

            pub fn are_axes_types_valid(axes: &[Axis]) -> bool {
                let space_count = axes.iter().filter(|a| matches!(a, Axis::Space(_))).count();
                let time_count = axes.iter().filter(|a| matches!(a, Axis::Time(_))).count();
                let channel_count = axes.iter().filter(|a| matches!(a, Axis::Channel(_))).count();
                let custom_count = axes.iter().filter(|a| matches!(a, Axis::Custom(_))).count();
                warn_unless!(
                    (space_count == 2 || space_count == 3) &&
                        time_count <= 1 &&
                        channel_count + custom_count <= 1,
                    "The \"axes\" must contain 2 or 3 entries of \"type:space\" and may contain one additional entry of \"type:time\" and may contain one additional entry of \"type:channel\" or a null / custom type. Got (space,time,channel,custom): ({},{},{},{})",
                    space_count,
                    time_count,
                    channel_count,
                    custom_count,
                )
            }

            // time first, then channel or custom, then space
            fn order_rank(axis: &Axis) -> u8 {
                match axis {
                    Axis::Time(_) => 0,
                    Axis::Channel(_) | Axis::Custom(_) => 1,
                    Axis::Space(_) => 2,
                }
            }

            pub fn is_axes_order_valid(axes: &[Axis]) -> bool {
                let ranks: Vec<u8> = axes.iter().map(order_rank).collect();
                warn_unless!(
                    ranks.windows(2).all(|w| w[0] <= w[1]),
                    "The \"axes\" must be ordered by \"type\" where the \"time\" axis must come first (if present), followed by the \"channel\" or custom axis (if present) and the axes of type \"space\". Got names: {:?}",
                    axes.iter().map(Axis::name).collect::<Vec<_>>(),
                )
            }

            pub fn are_coordinate_transformations_valid(coordinate_transformations: &[CoordinateTransformation], axes_length: usize) -> bool {
                are_coordinate_transformations_dimensions_valid(coordinate_transformations, axes_length) &&
                    are_coordinate_transformation_types_valid(coordinate_transformations) &&
                    coordinate_transformations_contain_exactly_one_scale(coordinate_transformations) &&
                    coordinate_transformations_contain_at_most_one_translation(coordinate_transformations) &&
                    is_scale_first_element(coordinate_transformations)
            }

            fn are_coordinate_transformations_dimensions_valid(coordinate_transformations: &[CoordinateTransformation], axes_length: usize) -> bool {
                coordinate_transformations.iter().all(|c| {
                    // can't validate "path"
                    let transformation_length = c.dimensionality().unwrap_or(axes_length);
                    warn_unless!(
                        transformation_length == axes_length,
                        "The length of the scale and translation array must be the same as the length of \"axes\". Got (axes,transformation): ({},{})",
                        axes_length,
                        transformation_length,
                    )
                })
            }

            fn are_coordinate_transformation_types_valid(coordinate_transformations: &[CoordinateTransformation]) -> bool {
                coordinate_transformations.iter().all(|c| {
                    warn_unless!(
                        matches!(c, CoordinateTransformation::Translation(_) | CoordinateTransformation::Scale(_)),
                        "A transformation must only be of type translation or scale."
                    )
                })
            }

            fn coordinate_transformations_contain_exactly_one_scale(coordinate_transformations: &[CoordinateTransformation]) -> bool {
                let scale_count = coordinate_transformations.iter()
                    .filter(|c| matches!(c, CoordinateTransformation::Scale(_)))
                    .count();
                warn_unless!(
                    scale_count == 1,
                    "Coordinate transformations must contain exactly one scale transformation. Got: {}",
                    scale_count
                )
            }

            fn coordinate_transformations_contain_at_most_one_translation(coordinate_transformations: &[CoordinateTransformation]) -> bool {
                let translation_count = coordinate_transformations.iter()
                    .filter(|c| matches!(c, CoordinateTransformation::Translation(_)))
                    .count();
                warn_unless!(
                    translation_count <= 1,
                    "Coordinate transformations may contain at most one translation. Got: {}",
                    translation_count
                )
            }

            fn is_scale_first_element(coordinate_transformations: &[CoordinateTransformation]) -> bool {
                warn_unless!(
                    matches!(coordinate_transformations.first(), Some(CoordinateTransformation::Scale(_))),
                    "If a translation is given it must be listed after the scale to ensure that it is given in physical coordinates."
                )
            }
        }
    };
}

pub(crate) use multiscale_types;

#[cfg(test)]
mod tests {
    use serde_json::from_str;
    use crate::v0_4::*;
    use crate::v0_4::validation::*;

    fn t() -> Axis {
        from_str::<Axis>(r#"{"name": "t", "type": "time", "unit": "millisecond"}"#).unwrap()
    }
    fn c() -> Axis {
        from_str::<Axis>(r#"{"name": "c", "type": "channel"}"#).unwrap()
    }
    fn custom() -> Axis {
        from_str::<Axis>(r#"{"name": "foo"}"#).unwrap()
    }
    fn z() -> Axis {
        from_str::<Axis>(r#"{"name": "z", "type": "space", "unit": "micrometer"}"#).unwrap()
    }
    fn y() -> Axis {
        from_str::<Axis>(r#"{"name": "y", "type": "space", "unit": "micrometer"}"#).unwrap()
    }
    fn x() -> Axis {
        from_str::<Axis>(r#"{"name": "x", "type": "space", "unit": "micrometer"}"#).unwrap()
    }

    fn spec_example_json() -> String {
        r#"{
            "version": "0.4",
            "name": "example",
            "axes": [
                {"name": "t", "type": "time", "unit": "millisecond"},
                {"name": "c", "type": "channel"},
                {"name": "z", "type": "space", "unit": "micrometer"},
                {"name": "y", "type": "space", "unit": "micrometer"},
                {"name": "x", "type": "space", "unit": "micrometer"}
            ],
            "datasets": [
                {
                    "path": "0",
                    "coordinateTransformations": [{"type": "scale", "scale": [1.0, 1.0, 0.5, 0.5, 0.5]}]
                },
                {
                    "path": "1",
                    "coordinateTransformations": [{"type": "scale", "scale": [1.0, 1.0, 1.0, 1.0, 1.0]}]
                },
                {
                    "path": "2",
                    "coordinateTransformations": [{"type": "scale", "scale": [1.0, 1.0, 2.0, 2.0, 2.0]}]
                }
            ],
            "coordinateTransformations": [{"type": "scale", "scale": [0.1, 1.0, 1.0, 1.0, 1.0]}],
            "type": "gaussian",
            "metadata": {
                "description": "the fields in metadata depend on the downscaling implementation. Here, the parameters passed to the skimage function are given",
                "method": "skimage.transform.pyramid_gaussian",
                "version": "0.16.1",
                "args": "[true]",
                "kwargs": {"multichannel": true}
            }
        }"#.to_string()
    }

    #[test]
    fn spec_example_is_valid() {
        let multiscale = from_str::<Multiscale>(&spec_example_json()).unwrap();
        assert!(multiscale.is_valid());
        let metadata = multiscale.metadata.unwrap();
        assert_eq!(metadata.method.as_deref(), Some("skimage.transform.pyramid_gaussian"));
        assert!(metadata.additional_fields.contains_key("kwargs"));
    }

    #[test]
    fn test_invalid_empty_axes() {
        assert!(!is_axes_length_valid(&[]));
    }

    #[test]
    fn test_invalid_too_many_axes() {
        assert!(!is_axes_length_valid(&[t(), c(), custom(), z(), y(), x()]));
    }

    #[test]
    fn test_valid_axes_length() {
        assert!(is_axes_length_valid(&[t(), c(), z(), y(), x()]));
        assert!(is_axes_length_valid(&[y(), x()]));
    }

    #[test]
    fn test_invalid_too_many_space_axes_types() {
        assert!(!are_axes_types_valid(&[x(), y(), z(), x()]));
    }

    #[test]
    fn test_invalid_single_space_axis_with_time() {
        assert!(!are_axes_types_valid(&[t(), x()]));
    }

    #[test]
    fn test_invalid_too_many_time_axes_types() {
        assert!(!are_axes_types_valid(&[t(), t(), z(), y(), x()]));
    }

    #[test]
    fn test_invalid_channel_and_custom_axes_types() {
        assert!(!are_axes_types_valid(&[c(), custom(), z(), y(), x()]));
    }

    #[test]
    fn test_valid_axes_types() {
        assert!(are_axes_types_valid(&[t(), c(), z(), y(), x()]));
        assert!(are_axes_types_valid(&[t(), custom(), y(), x()]));
        assert!(are_axes_types_valid(&[z(), y(), x()]));
    }

    #[test]
    fn test_valid_axes_order() {
        assert!(is_axes_order_valid(&[t(), c(), z(), y(), x()]));
        assert!(is_axes_order_valid(&[custom(), z(), y(), x()]));
        assert!(is_axes_order_valid(&[t(), y(), x()]));
    }

    #[test]
    fn test_invalid_axes_order_zyxtc() {
        assert!(!is_axes_order_valid(&[z(), y(), x(), t(), c()]));
    }

    #[test]
    fn test_invalid_axes_order_ctzyx() {
        assert!(!is_axes_order_valid(&[c(), t(), z(), y(), x()]));
    }

    #[test]
    fn test_invalid_axes_order_t_zyx_custom() {
        assert!(!is_axes_order_valid(&[t(), z(), y(), x(), custom()]));
    }

    #[test]
    fn test_valid_scale_then_translation() {
        let transformations = vec![
            CoordinateTransformation::scale(vec![1.0, 2.0]),
            CoordinateTransformation::translation(vec![5.0, 5.0]),
        ];
        assert!(are_coordinate_transformations_valid(&transformations, 2));
    }

    #[test]
    fn test_invalid_translation_before_scale() {
        let transformations = vec![
            CoordinateTransformation::translation(vec![5.0, 5.0]),
            CoordinateTransformation::scale(vec![1.0, 2.0]),
        ];
        assert!(!are_coordinate_transformations_valid(&transformations, 2));
    }

    #[test]
    fn test_invalid_scale_length() {
        let transformations = vec![CoordinateTransformation::scale(vec![1.0, 2.0, 3.0])];
        assert!(!are_coordinate_transformations_valid(&transformations, 2));
    }

    #[test]
    fn test_invalid_missing_scale() {
        assert!(!are_coordinate_transformations_valid(&[], 2));
    }

    #[test]
    fn test_invalid_identity() {
        let transformations = vec![
            CoordinateTransformation::scale(vec![1.0, 2.0]),
            CoordinateTransformation::Identity(Identity {}),
        ];
        assert!(!are_coordinate_transformations_valid(&transformations, 2));
    }

    #[test]
    fn test_invalid_dataset_transformations() {
        let datasets = vec![Dataset::new("0", vec![CoordinateTransformation::scale(vec![1.0])])];
        assert!(!is_multiscale_valid(&[y(), x()], None, &datasets));
    }
}
