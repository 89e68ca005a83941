//! Customer record as served by the list endpoint.
//!
//! Customers are read-only and owned by the server. The wire names
//! (`s_no`, `name_of_customer`, `mobile_number`, `dob`) are mapped onto Rust
//! field names with serde renames.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::fmt::Write;

/// Placeholder rendered for a missing or unparseable date of birth.
pub const MISSING_DATE: &str = "-";

/// One customer row of a listing page.
///
/// `serial_number` is stable within a listing and is used as the render key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    /// Server-assigned serial number (`s_no`). Required.
    #[serde(rename = "s_no")]
    pub serial_number: u64,
    #[serde(rename = "name_of_customer", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Phone number as text; numeric JSON values are converted.
    #[serde(default, deserialize_with = "string_or_number")]
    pub mobile_number: String,
    /// Calendar date of birth, `None` when missing or unparseable.
    #[serde(rename = "dob", default, deserialize_with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
}

impl Customer {
    /// Formats the date of birth with a chrono strftime pattern.
    ///
    /// # Parameters
    ///
    /// * `pattern` - chrono `strftime` pattern, e.g. `%m/%d/%Y`
    ///
    /// # Returns
    ///
    /// The formatted date, or [`MISSING_DATE`] when the date is absent or the
    /// pattern cannot be rendered for a calendar date.
    #[must_use]
    pub fn formatted_dob(&self, pattern: &str) -> String {
        self.date_of_birth
            .and_then(|date| format_date(date, pattern))
            .unwrap_or_else(|| MISSING_DATE.to_string())
    }
}

/// Renders `date` with `pattern`, or `None` if the pattern does not apply.
///
/// Time and zone specifiers (`%H`, `%z`, ...) parse fine but have nothing to
/// render for a `NaiveDate`; chrono reports that as a formatting error.
#[must_use]
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Parses `dob` as an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
///
/// Anything else becomes `None` so a single bad row does not fail the page.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let parsed = raw.as_deref().and_then(parse_date);
    if parsed.is_none() {
        if let Some(raw) = raw {
            tracing::debug!(dob = %raw, "unparseable date of birth");
        }
    }
    Ok(parsed)
}

/// Accepts phone numbers stored either as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Customer {
        serde_json::from_str(json).expect("customer should decode")
    }

    #[test]
    fn decodes_wire_names() {
        let customer = decode(
            r#"{"s_no":7,"name_of_customer":"Anna Lee","email":"anna@example.com",
                "mobile_number":"5550100","dob":"1990-05-12T00:00:00.000Z"}"#,
        );

        assert_eq!(customer.serial_number, 7);
        assert_eq!(customer.name, "Anna Lee");
        assert_eq!(customer.email, "anna@example.com");
        assert_eq!(customer.mobile_number, "5550100");
        assert_eq!(customer.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 12));
    }

    #[test]
    fn accepts_numeric_mobile_and_plain_date() {
        let customer = decode(
            r#"{"s_no":1,"name_of_customer":"Bo","email":"bo@example.com",
                "mobile_number":9876543210,"dob":"2001-12-31"}"#,
        );

        assert_eq!(customer.mobile_number, "9876543210");
        assert_eq!(customer.formatted_dob("%m/%d/%Y"), "12/31/2001");
    }

    #[test]
    fn bad_or_missing_dob_renders_placeholder() {
        let garbled = decode(r#"{"s_no":2,"name_of_customer":"C","dob":"yesterday"}"#);
        let missing = decode(r#"{"s_no":3,"name_of_customer":"D","dob":null}"#);

        assert_eq!(garbled.date_of_birth, None);
        assert_eq!(garbled.formatted_dob("%d.%m.%Y"), MISSING_DATE);
        assert_eq!(missing.formatted_dob("%d.%m.%Y"), MISSING_DATE);
    }

    #[test]
    fn time_specifiers_fall_back_to_placeholder() {
        let customer = decode(r#"{"s_no":4,"name_of_customer":"F","dob":"1990-05-12"}"#);

        assert_eq!(customer.formatted_dob("%d/%m/%Y %H:%M"), MISSING_DATE);
        assert_eq!(customer.formatted_dob("%d/%m/%Y"), "12/05/1990");
    }

    #[test]
    fn format_date_rejects_zone_and_malformed_patterns() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 31).expect("date");

        assert_eq!(format_date(date, "%Y-%m-%d").as_deref(), Some("2000-01-31"));
        assert_eq!(format_date(date, "%z"), None);
        assert_eq!(format_date(date, "%Q %"), None);
    }

    #[test]
    fn offset_timestamps_keep_their_calendar_date() {
        assert_eq!(
            parse_date("1985-01-02T23:30:00+05:30"),
            NaiveDate::from_ymd_opt(1985, 1, 2)
        );
    }

    #[test]
    fn missing_serial_number_is_malformed() {
        let result = serde_json::from_str::<Customer>(r#"{"name_of_customer":"E"}"#);
        assert!(result.is_err());
    }
}
