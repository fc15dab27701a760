use core::fmt;

/// Rejected construction options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A per-item size (`item_extent`, `row_height`, `column_width`) was zero, negative, NaN or
    /// infinite.
    NonPositiveExtent { name: &'static str, value: f64 },
    /// A grid was configured with zero columns.
    ZeroColumns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveExtent { name, value } => {
                write!(f, "`{name}` must be finite and greater than zero (got {value})")
            }
            Self::ZeroColumns => f.write_str("a grid needs at least one column"),
        }
    }
}

impl core::error::Error for ConfigError {}

pub(crate) fn check_extent(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveExtent { name, value })
    }
}
