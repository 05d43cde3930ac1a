/// The name a record gets when none is given.
pub const DEFAULT_NAME: &str = "image";

pub(crate) fn convert_all<T: Into<U>, U>(values: Vec<T>) -> Vec<U> {
    values.into_iter().map(Into::into).collect()
}

/// Defines the `Metadata` record of one NGFF version on top of the value types of the
/// `ome_ngff` module with the same name.
macro_rules! metadata_record {
    ($ngff:ident, $version:expr) => {
        pub use ome_ngff::$ngff::{Axis, CoordinateTransformation, Dataset, MethodMetadata, Omero};

        /// The multiscale description of one image.
        ///
        /// Fields are read-only outside of this module, use [`Metadata::new`] and the `with_*`
        /// methods to build a record.
        #[readonly::make]
        #[derive(Clone, Debug, PartialEq)]
        pub struct Metadata {
            /// One entry per array dimension, in array dimension order.
            pub axes: Vec<Axis>,

            /// One entry per resolution level, highest resolution first.
            pub datasets: Vec<Dataset>,

            /// Applied after the transformations of each dataset.
            pub coordinate_transformations: Option<Vec<CoordinateTransformation>>,

            pub omero: Option<Omero>,

            pub name: String,

            /// The downscaling method used to build the pyramid, e.g. `"gaussian"`.
            pub downscaling_type: Option<String>,

            pub metadata: Option<MethodMetadata>,
        }

        impl Metadata {
            pub const VERSION: $crate::supported_versions::NgffVersion = $version;

            pub fn new(
                axes: Vec<Axis>,
                datasets: Vec<Dataset>,
                coordinate_transformations: Option<Vec<CoordinateTransformation>>,
            ) -> Self {
                Self {
                    axes,
                    datasets,
                    coordinate_transformations,
                    omero: None,
                    name: $crate::zarr_metadata::record::DEFAULT_NAME.to_string(),
                    downscaling_type: None,
                    metadata: None,
                }
            }

            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.name = name.into();
                self
            }

            pub fn with_omero(mut self, omero: Option<Omero>) -> Self {
                self.omero = omero;
                self
            }

            pub fn with_type(mut self, downscaling_type: Option<String>) -> Self {
                self.downscaling_type = downscaling_type;
                self
            }

            pub fn with_method_metadata(mut self, metadata: Option<MethodMetadata>) -> Self {
                self.metadata = metadata;
                self
            }

            pub fn version(&self) -> $crate::supported_versions::NgffVersion {
                Self::VERSION
            }

            /// The axis names in axis order.
            pub fn dimension_names(&self) -> Vec<&str> {
                self.axes.iter().map(Axis::name).collect()
            }

            /// Checks the structural rules of a multiscale entry, logging each violation.
            pub fn is_valid(&self) -> bool {
                ome_ngff::$ngff::validation::is_multiscale_valid(
                    &self.axes,
                    self.coordinate_transformations.as_deref(),
                    &self.datasets,
                )
            }
        }
    };
}

pub(crate) use metadata_record;
