use serde::{Serialize, Deserialize};

// https://ngff.openmicroscopy.org/0.4/#axes-md
// Units are the UDUNITS-2 names. The vocabulary is not versioned by NGFF, so all versions share
// these two enums.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceUnit {
    Angstrom,
    Attometer,
    Centimeter,
    Decimeter,
    Exameter,
    Femtometer,
    Foot,
    Gigameter,
    Hectometer,
    Inch,
    Kilometer,
    Megameter,
    Meter,
    Micrometer,
    Mile,
    Millimeter,
    Nanometer,
    Parsec,
    Petameter,
    Picometer,
    Terameter,
    Yard,
    Yoctometer,
    Yottameter,
    Zeptometer,
    Zettameter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Attosecond,
    Centisecond,
    Day,
    Decisecond,
    Exasecond,
    Femtosecond,
    Gigasecond,
    Hectosecond,
    Hour,
    Kilosecond,
    Megasecond,
    Microsecond,
    Millisecond,
    Minute,
    Nanosecond,
    Petasecond,
    Picosecond,
    Second,
    Terasecond,
    Yoctosecond,
    Yottasecond,
    Zeptosecond,
    Zettasecond,
}

#[cfg(test)]
mod tests {
    use serde_json::{from_str, to_string};
    use super::*;

    #[test]
    fn serialize_space_unit_lowercase() {
        assert_eq!(to_string(&SpaceUnit::Micrometer).unwrap(), r#""micrometer""#);
    }

    #[test]
    fn deserialize_nanometer() {
        assert_eq!(from_str::<SpaceUnit>(r#""nanometer""#).unwrap(), SpaceUnit::Nanometer);
    }

    #[test]
    fn deserialize_time_unit() {
        assert_eq!(from_str::<TimeUnit>(r#""millisecond""#).unwrap(), TimeUnit::Millisecond);
    }

    #[test]
    #[should_panic]
    fn deserialize_unknown_unit() {
        from_str::<SpaceUnit>(r#""lightyear""#).unwrap();
    }
}
