//! Run parameter and identifier types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::region::RegionSet;
use crate::error::ValidationError;

/// Validated parameters for one survey-processing run
///
/// Constructed only through [`RunRequest::parse`]; the region is stored
/// normalized to upper case. Consumed once per trigger call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub date: NaiveDate,
    pub region: String,
}

impl RunRequest {
    /// Validate a raw date and region into a run request
    ///
    /// The date must be exactly `YYYY-MM-DD` and name a real calendar day.
    /// The region must belong to `regions`, case-insensitively.
    ///
    /// # Arguments
    /// * `date` - Processing date, `YYYY-MM-DD`
    /// * `region` - Region code (e.g. "EU", "us")
    /// * `regions` - The configured set of valid region codes
    pub fn parse(date: &str, region: &str, regions: &RegionSet) -> Result<Self, ValidationError> {
        let date = parse_iso_date(date)?;

        let region = regions.normalize(region).ok_or_else(|| {
            ValidationError::new(
                "region",
                format!(
                    "unknown region {:?}, expected one of: {}",
                    region,
                    regions.codes().join(", ")
                ),
            )
        })?;

        Ok(Self { date, region })
    }
}

/// Parse a date in strict `YYYY-MM-DD` form
///
/// chrono's numeric specifiers accept unpadded fields and short years, so the
/// shape is checked before the calendar parse.
fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(ValidationError::new(
            "date",
            format!("{raw:?} is not in YYYY-MM-DD form"),
        ));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ValidationError::new("date", format!("{raw:?} is not a valid calendar date"))
    })
}

/// Identifier of one run, issued by the remote control plane
///
/// Opaque to this system: the wire value may arrive as an integer or a
/// string, both normalize to the same string form. It has no meaning until
/// the control plane returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Create a run id from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a successful trigger call
///
/// Fresh per invocation: two identical trigger calls produce two
/// submissions with distinct run ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSubmission {
    pub run_id: RunId,
    /// Dashboard URL for tracking the run
    pub run_url: String,
}
