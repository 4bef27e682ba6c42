//! Demand series handling for forecasting

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Label of a single period in a demand table.
///
/// Numeric labels (week numbers, years) extrapolate by adding one; anything
/// else extrapolates to a synthetic `"After <label>"` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodLabel {
    /// A numeric period such as `12` or `2024`
    Numeric(f64),
    /// An opaque period such as `"Jan"` or `"Q3-2024"`
    Text(String),
}

impl PeriodLabel {
    /// Parse a raw table cell, preferring a numeric label
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => PeriodLabel::Numeric(value),
            _ => PeriodLabel::Text(trimmed.to_string()),
        }
    }

    /// Label of the period immediately following this one
    pub fn next(&self) -> Self {
        match self {
            PeriodLabel::Numeric(value) => PeriodLabel::Numeric(value + 1.0),
            PeriodLabel::Text(text) => PeriodLabel::Text(format!("After {}", text)),
        }
    }

    /// Whether the label supports `+1` extrapolation
    pub fn is_numeric(&self) -> bool {
        matches!(self, PeriodLabel::Numeric(_))
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodLabel::Numeric(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            PeriodLabel::Numeric(value) => write!(f, "{}", value),
            PeriodLabel::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for PeriodLabel {
    fn from(value: i64) -> Self {
        PeriodLabel::Numeric(value as f64)
    }
}

impl From<f64> for PeriodLabel {
    fn from(value: f64) -> Self {
        PeriodLabel::Numeric(value)
    }
}

impl From<&str> for PeriodLabel {
    fn from(value: &str) -> Self {
        PeriodLabel::Text(value.to_string())
    }
}

impl From<String> for PeriodLabel {
    fn from(value: String) -> Self {
        PeriodLabel::Text(value)
    }
}

/// Granularity of a demand table, which decides its period column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodKind {
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl PeriodKind {
    /// All period kinds, in display order
    pub const ALL: [PeriodKind; 5] = [
        PeriodKind::Weekly,
        PeriodKind::Monthly,
        PeriodKind::Quarterly,
        PeriodKind::SemiAnnual,
        PeriodKind::Annual,
    ];

    /// Header of the period column in tables of this granularity
    pub fn column_name(&self) -> &'static str {
        match self {
            PeriodKind::Weekly => "Week",
            PeriodKind::Monthly => "Month",
            PeriodKind::Quarterly => "Quarter",
            PeriodKind::SemiAnnual => "Half",
            PeriodKind::Annual => "Year",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodKind::Weekly => "Weekly",
            PeriodKind::Monthly => "Monthly",
            PeriodKind::Quarterly => "Quarterly",
            PeriodKind::SemiAnnual => "Semi-Annual",
            PeriodKind::Annual => "Annual",
        };
        f.write_str(name)
    }
}

/// Column selection for loading a demand table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    /// Period column header; the first column is used when `None`
    pub period: Option<String>,
    /// Demand column header
    pub demand: String,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self {
            period: None,
            demand: "Demand".to_string(),
        }
    }
}

impl TableColumns {
    /// Columns for a table of the given granularity
    pub fn for_period(kind: PeriodKind) -> Self {
        Self {
            period: Some(kind.column_name().to_string()),
            ..Self::default()
        }
    }
}

/// Ordered sequence of (period, demand) observations.
///
/// Always holds at least one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandSeries {
    periods: Vec<PeriodLabel>,
    values: Vec<f64>,
}

impl DemandSeries {
    /// Create a demand series from aligned period labels and demand values
    pub fn new(periods: Vec<PeriodLabel>, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Demand series must contain at least one period".to_string(),
            ));
        }

        if periods.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Period labels ({}) don't match demand values ({})",
                periods.len(),
                values.len()
            )));
        }

        Ok(Self { periods, values })
    }

    /// Create a demand series labelled 1..=n
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let periods = (1..=values.len() as i64).map(PeriodLabel::from).collect();
        Self::new(periods, values)
    }

    /// Load a demand table from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P, columns: &TableColumns) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading demand table from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, columns)
    }

    /// Load a demand table from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R, columns: &TableColumns) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let period_idx = match &columns.period {
            Some(name) => find_column(&headers, name)?,
            None if !headers.is_empty() => 0,
            None => {
                return Err(ForecastError::DataError(
                    "Demand table has no columns".to_string(),
                ))
            }
        };
        let demand_idx = find_column(&headers, &columns.demand)?;

        let mut periods = Vec::new();
        let mut values = Vec::new();

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let line = row + 2;

            let period_cell = record.get(period_idx).unwrap_or("");
            if period_cell.is_empty() {
                return Err(ForecastError::DataError(format!(
                    "Missing period label on line {}",
                    line
                )));
            }

            let demand_cell = record.get(demand_idx).unwrap_or("");
            let demand = if demand_cell.is_empty() {
                warn!("Blank demand on line {}, treating it as 0", line);
                0.0
            } else {
                parse_demand(demand_cell, line)?
            };

            periods.push(PeriodLabel::parse(period_cell));
            values.push(demand);
        }

        debug!("Loaded {} demand periods", values.len());
        Self::new(periods, values)
    }

    /// Number of periods
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Demand values in period order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Period labels in period order
    pub fn periods(&self) -> &[PeriodLabel] {
        &self.periods
    }

    /// Label of the last observed period
    pub fn last_period(&self) -> &PeriodLabel {
        &self.periods[self.periods.len() - 1]
    }

    /// Label of the period following the series
    pub fn next_period(&self) -> PeriodLabel {
        self.last_period().next()
    }

    /// Iterate over (period, demand) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&PeriodLabel, f64)> + '_ {
        self.periods.iter().zip(self.values.iter().copied())
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
        .ok_or_else(|| ForecastError::DataError(format!("Column '{}' not found in table", name)))
}

fn parse_demand(cell: &str, line: usize) -> Result<f64> {
    let value: f64 = cell.parse().map_err(|_| {
        ForecastError::DataError(format!("Non-numeric demand '{}' on line {}", cell, line))
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ForecastError::DataError(format!(
            "Demand must be a finite non-negative number, got {} on line {}",
            value, line
        )));
    }

    Ok(value)
}
