// https://ngff.openmicroscopy.org/0.4/#trafo-md

/// Defines `CoordinateTransformation` and its variants in the invoking version module.
macro_rules! coordinate_transformation_types {
    () => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct Identity {}

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Translation {
            Translation(Vec<f64>),
            Path(String),
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Scale {
            Scale(Vec<f64>),
            Path(String),
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        #[serde(tag = "type")]
        pub enum CoordinateTransformation {
            Identity(Identity),
            Translation(Translation),
            Scale(Scale),
        }

        impl CoordinateTransformation {
            pub fn scale(scale: Vec<f64>) -> Self {
                CoordinateTransformation::Scale(Scale::Scale(scale))
            }

            pub fn translation(translation: Vec<f64>) -> Self {
                CoordinateTransformation::Translation(Translation::Translation(translation))
            }

            /// Number of dimensions of an inline scale or translation vector. `None` for
            /// transformations stored at a path and for the identity.
            pub fn dimensionality(&self) -> Option<usize> {
                match self {
                    CoordinateTransformation::Translation(Translation::Translation(translation)) => Some(translation.len()),
                    CoordinateTransformation::Scale(Scale::Scale(scale)) => Some(scale.len()),
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use coordinate_transformation_types;

#[cfg(test)]
mod tests {
    use serde_json::{from_str, to_string, Value};
    use crate::v0_4::*;

    fn identity_json() -> String {
        r#"{"type": "identity"}"#.to_string()
    }

    fn translation_vec_json() -> String {
        r#"{"type": "translation", "translation": [1.0, 2.0, 3.0]}"#.to_string()
    }

    fn translation_path_json() -> String {
        r#"{"type": "translation", "path": "/path/to/translation"}"#.to_string()
    }

    fn scale_vec_json() -> String {
        r#"{"type": "scale", "scale": [1.0, 2.0, 3.0]}"#.to_string()
    }

    fn scale_path_json() -> String {
        r#"{"type": "scale", "path": "/path/to/scale"}"#.to_string()
    }

    fn identity() -> CoordinateTransformation {
        CoordinateTransformation::Identity(Identity {})
    }

    fn translation_path() -> CoordinateTransformation {
        CoordinateTransformation::Translation(Translation::Path("/path/to/translation".to_string()))
    }

    fn scale_path() -> CoordinateTransformation {
        CoordinateTransformation::Scale(Scale::Path("/path/to/scale".to_string()))
    }

    fn coordinate_transformations_json() -> String {
        format!(
            "[{},{},{},{},{}]",
            identity_json(),
            translation_vec_json(),
            translation_path_json(),
            scale_vec_json(),
            scale_path_json(),
        )
    }

    fn coordinate_transformations() -> Vec<CoordinateTransformation> {
        vec![
            identity(),
            CoordinateTransformation::translation(vec![1.0, 2.0, 3.0]),
            translation_path(),
            CoordinateTransformation::scale(vec![1.0, 2.0, 3.0]),
            scale_path(),
        ]
    }

    #[test]
    fn serialize_identity() {
        assert_eq!(
            from_str::<Value>(&to_string(&identity()).unwrap()).unwrap(),
            from_str::<Value>(&identity_json()).unwrap()
        );
    }

    #[test]
    fn deserialize_translation_path() {
        assert_eq!(
            from_str::<CoordinateTransformation>(&translation_path_json()).unwrap(),
            translation_path()
        );
    }

    #[test]
    fn dimensionality_of_inline_vectors() {
        assert_eq!(CoordinateTransformation::scale(vec![0.5, 0.5]).dimensionality(), Some(2));
        assert_eq!(scale_path().dimensionality(), None);
        assert_eq!(identity().dimensionality(), None);
    }

    #[test]
    #[should_panic]
    fn deserialize_invalid_translation() {
        from_str::<CoordinateTransformation>(r#"{"type": "translation"}"#).unwrap();
    }

    #[test]
    #[should_panic]
    fn deserialize_untyped_coordinate_transformation() {
        from_str::<CoordinateTransformation>(r#"{"translation": [1.0, 2.0, 3.0]}"#).unwrap();
    }

    #[test]
    fn serialize_coordinate_transformations() {
        assert_eq!(
            from_str::<Value>(&to_string(&coordinate_transformations()).unwrap()).unwrap(),
            from_str::<Value>(&coordinate_transformations_json()).unwrap()
        );
    }

    #[test]
    fn deserialize_coordinate_transformations() {
        assert_eq!(
            from_str::<Vec<CoordinateTransformation>>(&coordinate_transformations_json()).unwrap(),
            coordinate_transformations()
        );
    }
}
