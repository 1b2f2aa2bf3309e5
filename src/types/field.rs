//! Defines the columns of an ASOS response and the standard request schemas.

use std::fmt;

/// How a column's raw text is coerced into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, kept as-is (station code, sky cover codes).
    Text,
    /// A `YYYY-MM-DD HH:MM` UTC timestamp.
    Timestamp,
    /// A floating point reading.
    Numeric,
}

/// A column of an ASOS comma-delimited response.
///
/// The first four variants are always present in the response (station code,
/// observation time and, because `latlon=yes` is requested, the station location).
/// All other variants are only returned when requested with a `data=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsosField {
    Station,
    Valid,
    Longitude,
    Latitude,
    /// Air temperature in Fahrenheit.
    Temperature,
    /// Relative humidity in percent.
    RelativeHumidity,
    /// Wind direction in degrees from true north.
    WindDirection,
    /// Wind speed in miles per hour.
    WindSpeed,
    /// Sea level pressure in millibar.
    SeaLevelPressure,
    /// One hour precipitation in millimetres.
    Precipitation,
    /// Visibility in miles.
    Visibility,
    /// Sky cover code (`CLR`, `FEW`, `SCT`, `BKN`, `OVC`, ...) of the given layer.
    SkyCover(SkyLayer),
    /// Sky layer base height in feet of the given layer.
    SkyLevel(SkyLayer),
}

/// One of the three cloud layers the service reports, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyLayer {
    First,
    Second,
    Third,
}

impl SkyLayer {
    pub const ALL: [SkyLayer; 3] = [SkyLayer::First, SkyLayer::Second, SkyLayer::Third];

    /// Position of the layer in per-layer arrays.
    pub fn index(&self) -> usize {
        match self {
            SkyLayer::First => 0,
            SkyLayer::Second => 1,
            SkyLayer::Third => 2,
        }
    }
}

/// Wind direction and speed only.
pub const WIND_ONLY_FIELDS: &[AsosField] = &[AsosField::WindDirection, AsosField::WindSpeed];

/// Every quantity the summary reports on.
pub const FULL_FIELDS: &[AsosField] = &[
    AsosField::Temperature,
    AsosField::RelativeHumidity,
    AsosField::WindDirection,
    AsosField::WindSpeed,
    AsosField::SeaLevelPressure,
    AsosField::Precipitation,
    AsosField::Visibility,
    AsosField::SkyCover(SkyLayer::First),
    AsosField::SkyCover(SkyLayer::Second),
    AsosField::SkyCover(SkyLayer::Third),
    AsosField::SkyLevel(SkyLayer::First),
    AsosField::SkyLevel(SkyLayer::Second),
    AsosField::SkyLevel(SkyLayer::Third),
];

/// Columns that precede the requested data fields in every response.
const LEADING_COLUMNS: [AsosField; 4] = [
    AsosField::Station,
    AsosField::Valid,
    AsosField::Longitude,
    AsosField::Latitude,
];

impl AsosField {
    /// The column name used by the upstream service, both in `data=` parameters
    /// and in the response header.
    pub fn name(&self) -> &'static str {
        match self {
            AsosField::Station => "station",
            AsosField::Valid => "valid",
            AsosField::Longitude => "lon",
            AsosField::Latitude => "lat",
            AsosField::Temperature => "tmpf",
            AsosField::RelativeHumidity => "relh",
            AsosField::WindDirection => "drct",
            AsosField::WindSpeed => "sped",
            AsosField::SeaLevelPressure => "mslp",
            AsosField::Precipitation => "p01m",
            AsosField::Visibility => "vsby",
            AsosField::SkyCover(SkyLayer::First) => "skyc1",
            AsosField::SkyCover(SkyLayer::Second) => "skyc2",
            AsosField::SkyCover(SkyLayer::Third) => "skyc3",
            AsosField::SkyLevel(SkyLayer::First) => "skyl1",
            AsosField::SkyLevel(SkyLayer::Second) => "skyl2",
            AsosField::SkyLevel(SkyLayer::Third) => "skyl3",
        }
    }

    /// Maps a column header back to its field. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<AsosField> {
        let field = match name.trim() {
            "station" => AsosField::Station,
            "valid" => AsosField::Valid,
            "lon" => AsosField::Longitude,
            "lat" => AsosField::Latitude,
            "tmpf" => AsosField::Temperature,
            "relh" => AsosField::RelativeHumidity,
            "drct" => AsosField::WindDirection,
            "sped" => AsosField::WindSpeed,
            "mslp" => AsosField::SeaLevelPressure,
            "p01m" => AsosField::Precipitation,
            "vsby" => AsosField::Visibility,
            "skyc1" => AsosField::SkyCover(SkyLayer::First),
            "skyc2" => AsosField::SkyCover(SkyLayer::Second),
            "skyc3" => AsosField::SkyCover(SkyLayer::Third),
            "skyl1" => AsosField::SkyLevel(SkyLayer::First),
            "skyl2" => AsosField::SkyLevel(SkyLayer::Second),
            "skyl3" => AsosField::SkyLevel(SkyLayer::Third),
            _ => return None,
        };
        Some(field)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            AsosField::Station | AsosField::SkyCover(_) => FieldKind::Text,
            AsosField::Valid => FieldKind::Timestamp,
            _ => FieldKind::Numeric,
        }
    }

    /// Whether the field has to be asked for with a `data=` query parameter.
    pub fn is_requested(&self) -> bool {
        !LEADING_COLUMNS.contains(self)
    }

    /// The full column layout of a response to a request for `requested`.
    pub fn response_schema(requested: &[AsosField]) -> Vec<AsosField> {
        LEADING_COLUMNS
            .iter()
            .copied()
            .chain(requested.iter().copied().filter(AsosField::is_requested))
            .collect()
    }
}

impl fmt::Display for AsosField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
