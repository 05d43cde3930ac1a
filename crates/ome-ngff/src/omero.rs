// https://ngff.openmicroscopy.org/0.4/#omero-md
// The "omero" block is transitional rendering metadata. Only the keys listed in the NGFF example document
// are modelled, everything but "channels" is optional in practice.

/// Defines `Omero` and its parts in the invoking version module.
macro_rules! omero_types {
    () => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct Window {
            pub min: f64,
            pub max: f64,
            pub start: f64,
            pub end: f64,
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct Channel {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub active: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub coefficient: Option<f64>,

            // hex RGB, e.g. "0000FF"
            pub color: String,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub family: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub inverted: Option<bool>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub label: Option<String>,

            pub window: Window,
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct RDefs {
            #[serde(rename = "defaultT")]
            #[serde(skip_serializing_if = "Option::is_none")]
            pub default_t: Option<u64>,

            #[serde(rename = "defaultZ")]
            #[serde(skip_serializing_if = "Option::is_none")]
            pub default_z: Option<u64>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub model: Option<String>,
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct Omero {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<u64>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub name: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub version: Option<String>,

            pub channels: Vec<Channel>,

            #[serde(rename = "rdefs")]
            #[serde(skip_serializing_if = "Option::is_none")]
            pub r_defs: Option<RDefs>,
        }
    };
}

pub(crate) use omero_types;

#[cfg(test)]
mod tests {
    use serde_json::{from_str, to_string, Value};
    use crate::v0_4::*;

    fn spec_example_json() -> String {
        r#"{
            "id": 1,
            "name": "example.tif",
            "version": "0.4",
            "channels": [{
                "active": true,
                "coefficient": 1,
                "color": "0000FF",
                "family": "linear",
                "inverted": false,
                "label": "LaminB1",
                "window": {"end": 1500, "max": 65535, "min": 0, "start": 0}
            }],
            "rdefs": {"defaultT": 0, "defaultZ": 118, "model": "color"}
        }"#.to_string()
    }

    fn minimal_json() -> String {
        r#"{"channels": [{"color": "FFFFFF", "window": {"end": 1.0, "max": 1.0, "min": 0.0, "start": 0.0}}]}"#.to_string()
    }

    #[test]
    fn deserialize_spec_example() {
        let omero = from_str::<Omero>(&spec_example_json()).unwrap();
        assert_eq!(omero.channels.len(), 1);
        assert_eq!(omero.channels[0].label.as_deref(), Some("LaminB1"));
        assert_eq!(omero.channels[0].window.end, 1500.0);
        assert_eq!(omero.r_defs.as_ref().and_then(|r| r.default_z), Some(118));
    }

    #[test]
    fn serialize_minimal() {
        let omero = from_str::<Omero>(&minimal_json()).unwrap();
        assert!(omero.r_defs.is_none());
        assert_eq!(
            from_str::<Value>(&to_string(&omero).unwrap()).unwrap(),
            from_str::<Value>(&minimal_json()).unwrap()
        );
    }

    #[test]
    #[should_panic]
    fn deserialize_channel_without_window() {
        from_str::<Omero>(r#"{"channels": [{"color": "FFFFFF"}]}"#).unwrap();
    }
}
