use crate::types::date_window::DateWindow;
use crate::types::field::AsosField;

/// A single station/date-window query against the ASOS request endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AsosRequest<'a> {
    pub station: &'a str,
    pub window: DateWindow,
    /// Requested data fields, in the order their columns should be returned.
    pub fields: &'a [AsosField],
}

impl<'a> AsosRequest<'a> {
    pub fn new(station: &'a str, window: DateWindow, fields: &'a [AsosField]) -> Self {
        Self {
            station,
            window,
            fields,
        }
    }

    /// Builds the full request URI below `service_url` (which ends in `?`).
    ///
    /// Output is always comma-delimited, in UTC, with station coordinates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use mesonet_wind::{AsosRequest, DateWindow, WIND_ONLY_FIELDS};
    ///
    /// let day = NaiveDate::from_ymd_opt(2023, 8, 9).unwrap();
    /// let request = AsosRequest::new("OAK", DateWindow::single_day(day), WIND_ONLY_FIELDS);
    /// assert_eq!(
    ///     request.uri("https://example.org/asos.py?"),
    ///     "https://example.org/asos.py?data=drct&data=sped&tz=Etc/UTC&format=comma&latlon=yes\
    ///      &year1=2023&month1=08&day1=09&year2=2023&month2=08&day2=09&station=OAK"
    /// );
    /// ```
    pub fn uri(&self, service_url: &str) -> String {
        let mut uri = String::from(service_url);
        for field in self.fields.iter().filter(|f| f.is_requested()) {
            uri.push_str("data=");
            uri.push_str(field.name());
            uri.push('&');
        }
        uri.push_str("tz=Etc/UTC&format=comma&latlon=yes&");
        uri.push_str(
            &self
                .window
                .start
                .format("year1=%Y&month1=%m&day1=%d&")
                .to_string(),
        );
        uri.push_str(
            &self
                .window
                .end
                .format("year2=%Y&month2=%m&day2=%d&")
                .to_string(),
        );
        uri.push_str("station=");
        uri.push_str(self.station);
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field::FULL_FIELDS;
    use chrono::NaiveDate;

    #[test]
    fn test_full_field_request_lists_every_field_in_order() {
        let start = NaiveDate::from_ymd_opt(2021, 2, 14).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 2, 16).unwrap();
        let request = AsosRequest::new("ILM", DateWindow::new(start, end), FULL_FIELDS);
        let uri = request.uri("http://host/asos.py?");

        let (_, query) = uri.split_once('?').unwrap();
        let data: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.strip_prefix("data="))
            .collect();
        assert_eq!(
            data,
            [
                "tmpf", "relh", "drct", "sped", "mslp", "p01m", "vsby", "skyc1", "skyc2", "skyc3",
                "skyl1", "skyl2", "skyl3"
            ]
        );
        assert!(uri.starts_with("http://host/asos.py?data=tmpf&"));
        assert!(uri.contains("&year1=2021&month1=02&day1=14&"));
        assert!(uri.contains("&year2=2021&month2=02&day2=16&"));
        assert!(uri.ends_with("&station=ILM"));
    }

    #[test]
    fn test_leading_columns_are_never_requested() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let fields = [AsosField::Station, AsosField::Latitude, AsosField::WindSpeed];
        let uri = AsosRequest::new("OAK", DateWindow::single_day(day), &fields).uri("x?");
        assert!(uri.starts_with("x?data=sped&tz=Etc/UTC&"));
        assert_eq!(uri.matches("data=").count(), 1);
    }
}
