use crate::config::{PipelineConfig, DEFAULT_MISSING_SENTINEL, DEFAULT_PREAMBLE_LINES};
use crate::types::field::{AsosField, FieldKind};
use crate::types::observation::ObservationRow;
use crate::weather_data::fields::{
    parse_optional_f64, parse_optional_text, parse_optional_timestamp,
};
use log::{debug, warn};

/// Turns a raw comma-delimited ASOS report into observation rows.
#[derive(Debug, Clone)]
pub struct Cleaner {
    preamble_lines: usize,
    missing_sentinel: String,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
            missing_sentinel: DEFAULT_MISSING_SENTINEL.to_string(),
        }
    }
}

/// Cleans `raw` with the upstream's default preamble length and missing-value marker.
pub fn clean(raw: &str, schema: &[AsosField]) -> Vec<ObservationRow> {
    Cleaner::default().clean(raw, schema)
}

impl Cleaner {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            preamble_lines: config.preamble_lines,
            missing_sentinel: config.missing_sentinel.clone(),
        }
    }

    /// Parses every data line of `raw`, whose columns are laid out as `schema`.
    ///
    /// The preamble lines are skipped, as is the column header line
    /// (`station,valid,...`) that follows them. Rows keep the order in which they
    /// were received. An empty vector means the report held no observations.
    pub fn clean(&self, raw: &str, schema: &[AsosField]) -> Vec<ObservationRow> {
        let mut rows = Vec::new();

        for (line_no, line) in raw.lines().enumerate().skip(self.preamble_lines) {
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split(',').collect();
            if is_header(&tokens) {
                self.check_header(&tokens, schema);
                continue;
            }
            match self.parse_row(&tokens, schema) {
                Some(row) => rows.push(row),
                None => debug!(
                    "Dropping line {} without station or timestamp: {:?}",
                    line_no + 1,
                    line
                ),
            }
        }

        rows
    }

    fn check_header(&self, tokens: &[&str], schema: &[AsosField]) {
        let matches = tokens.len() == schema.len()
            && tokens
                .iter()
                .zip(schema)
                .all(|(name, field)| name.trim() == field.name());
        if !matches {
            warn!(
                "Response header {:?} does not match the requested schema {:?}",
                tokens,
                schema.iter().map(AsosField::name).collect::<Vec<_>>()
            );
        }
    }

    fn parse_row(&self, tokens: &[&str], schema: &[AsosField]) -> Option<ObservationRow> {
        let missing = self.missing_sentinel.as_str();
        let station = parse_optional_text(column(tokens, schema, AsosField::Station), missing)?;
        let timestamp =
            parse_optional_timestamp(column(tokens, schema, AsosField::Valid), missing)?;
        let mut row = ObservationRow::new(station, timestamp);

        for (field, raw) in schema.iter().zip(tokens) {
            if field.kind() != FieldKind::Numeric {
                if let AsosField::SkyCover(layer) = field {
                    row.sky_cover[layer.index()] = parse_optional_text(raw, missing);
                }
                continue;
            }
            let number = parse_optional_f64(raw, missing);
            match field {
                AsosField::Longitude => row.longitude = number,
                AsosField::Latitude => row.latitude = number,
                AsosField::WindSpeed => row.wind_speed = number,
                AsosField::WindDirection => row.wind_direction_deg = number,
                AsosField::Temperature => row.temperature = number,
                AsosField::RelativeHumidity => row.relative_humidity = number,
                AsosField::SeaLevelPressure => row.pressure = number,
                AsosField::Precipitation => row.precipitation = number,
                AsosField::Visibility => row.visibility = number,
                AsosField::SkyLevel(layer) => row.sky_level_ft[layer.index()] = number,
                _ => {}
            }
        }

        Some(row)
    }
}

/// The raw text of `field` in this line, empty when the column is absent.
fn column<'a>(tokens: &[&'a str], schema: &[AsosField], field: AsosField) -> &'a str {
    schema
        .iter()
        .position(|f| *f == field)
        .and_then(|i| tokens.get(i).copied())
        .unwrap_or_default()
}

fn is_header(tokens: &[&str]) -> bool {
    tokens
        .first()
        .is_some_and(|first| first.trim() == AsosField::Station.name())
}
