//! Error types for the line chart visual.
//!
//! Table and settings faults are typed so the visual can turn them into an
//! empty frame plus a host warning instead of failing the update.

use thiserror::Error;

/// Result type alias for visual operations.
pub type Result<T> = std::result::Result<T, VisualError>;

/// Errors that can occur while preparing or rendering the chart.
#[derive(Debug, Error)]
pub enum VisualError {
    /// The update carried no data view at all.
    #[error("no data view supplied by the host")]
    NoDataView,

    /// The categorical data view has no category (axis) column.
    #[error("the axis field is missing")]
    MissingCategories,

    /// The categorical data view has no measure (values) column.
    #[error("the values field is missing")]
    MissingValues,

    /// Both columns are present but hold no rows.
    #[error("the table has no rows to plot")]
    EmptyTable,

    /// A category cell is neither a number nor a date.
    #[error("axis value at row {index} is not a number or date: {value}")]
    InvalidCategory { index: usize, value: String },

    /// A value cell is not a finite number.
    #[error("value at row {index} is not a finite number: {value}")]
    InvalidValue { index: usize, value: String },

    /// Persisted formatting objects could not be read into typed settings.
    #[error("invalid formatting settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// The drawing backend refused a primitive.
    #[error("render error: {0}")]
    Render(String),
}

impl VisualError {
    /// Create an InvalidCategory error.
    pub fn invalid_category(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            index,
            value: value.into(),
        }
    }

    /// Create an InvalidValue error.
    pub fn invalid_value(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            index,
            value: value.into(),
        }
    }

    /// Short title shown next to the host's warning icon.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoDataView | Self::MissingCategories | Self::MissingValues => {
                "Missing fields"
            }
            Self::EmptyTable => "No data",
            Self::InvalidCategory { .. } | Self::InvalidValue { .. } => "Unsupported data",
            Self::InvalidSettings(_) => "Formatting reset",
            Self::Render(_) => "Render failed",
        }
    }
}
