// https://ngff.openmicroscopy.org/0.4/#axes-md

/// Defines `Axis` and its variants in the invoking version module.
///
/// Every version module gets its own nominal axis types, even while their shape is identical
/// across versions. Conversions between versions are spelled out in [`crate::convert`].
macro_rules! axis_types {
    () => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct SpaceAxis {
            pub name: String,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub unit: Option<$crate::unit::SpaceUnit>,
        }

        impl SpaceAxis {
            pub fn new(name: impl Into<String>, unit: Option<$crate::unit::SpaceUnit>) -> Self {
                Self {
                    name: name.into(),
                    unit,
                }
            }
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct TimeAxis {
            pub name: String,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub unit: Option<$crate::unit::TimeUnit>,
        }

        impl TimeAxis {
            pub fn new(name: impl Into<String>, unit: Option<$crate::unit::TimeUnit>) -> Self {
                Self {
                    name: name.into(),
                    unit,
                }
            }
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct ChannelAxis {
            pub name: String,
        }

        impl ChannelAxis {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                }
            }
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct CustomAxis {
            pub name: String,

            #[serde(skip_serializing_if = "Option::is_none")]
            #[serde(rename = "type")]
            pub axis_type: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub unit: Option<String>,
        }

        impl CustomAxis {
            pub fn new(name: impl Into<String>, axis_type: Option<String>, unit: Option<String>) -> Self {
                Self {
                    name: name.into(),
                    axis_type,
                    unit,
                }
            }
        }

        // https://github.com/serde-rs/serde/issues/1799#issuecomment-624978919

        #[derive(::serde::Deserialize)]
        #[serde(tag = "type")]
        #[serde(rename_all = "lowercase")]
        enum TaggedAxis {
            Space(SpaceAxis),
            Time(TimeAxis),
            Channel(ChannelAxis),
        }

        #[derive(::serde::Serialize)]
        #[serde(tag = "type")]
        #[serde(rename_all = "lowercase")]
        enum TaggedAxisRef<'a> {
            Space(&'a SpaceAxis),
            Time(&'a TimeAxis),
            Channel(&'a ChannelAxis),
        }

        #[derive(::serde::Deserialize)]
        #[serde(untagged)]
        enum MaybeTaggedAxis {
            Tagged(TaggedAxis),
            Untagged(CustomAxis),
        }

        #[derive(Clone, Debug, PartialEq, ::serde::Deserialize)]
        #[serde(from = "MaybeTaggedAxis")]
        pub enum Axis {
            Space(SpaceAxis),
            Time(TimeAxis),
            Channel(ChannelAxis),
            Custom(CustomAxis),
        }

        impl Axis {
            pub fn name(&self) -> &str {
                match self {
                    Axis::Space(axis) => &axis.name,
                    Axis::Time(axis) => &axis.name,
                    Axis::Channel(axis) => &axis.name,
                    Axis::Custom(axis) => &axis.name,
                }
            }
        }

        // custom Serialize implementation because otherwise CustomAxis instances without an
        // axis_type get a "type": "custom"
        impl ::serde::Serialize for Axis {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: ::serde::Serializer {
                match self {
                    Axis::Custom(value) => ::serde::Serialize::serialize(value, serializer),
                    Axis::Space(value) => ::serde::Serialize::serialize(&TaggedAxisRef::Space(value), serializer),
                    Axis::Time(value) => ::serde::Serialize::serialize(&TaggedAxisRef::Time(value), serializer),
                    Axis::Channel(value) => ::serde::Serialize::serialize(&TaggedAxisRef::Channel(value), serializer),
                }
            }
        }

        impl From<MaybeTaggedAxis> for Axis {
            fn from(axis: MaybeTaggedAxis) -> Axis {
                match axis {
                    MaybeTaggedAxis::Untagged(axis) => Axis::Custom(axis),
                    MaybeTaggedAxis::Tagged(TaggedAxis::Space(axis)) => Axis::Space(axis),
                    MaybeTaggedAxis::Tagged(TaggedAxis::Time(axis)) => Axis::Time(axis),
                    MaybeTaggedAxis::Tagged(TaggedAxis::Channel(axis)) => Axis::Channel(axis),
                }
            }
        }
    };
}

pub(crate) use axis_types;
