use std::fmt;

/// Errors raised when ranking input cannot produce meaningful shares
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    NegativeValue { entity: String, value: f64 },
    NonFiniteValue { entity: String, value: f64 },
    /// Threshold must lie in (0, 1]
    InvalidThreshold(f64),
    /// Values are individually finite but their sum overflows
    NonFiniteTotal,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::NegativeValue { entity, value } => {
                write!(f, "entity {entity:?} has negative value {value}")
            }
            InvalidInputError::NonFiniteValue { entity, value } => {
                write!(f, "entity {entity:?} has non-finite value {value}")
            }
            InvalidInputError::InvalidThreshold(threshold) => {
                write!(f, "threshold {threshold} is outside (0, 1]")
            }
            InvalidInputError::NonFiniteTotal => {
                write!(f, "contribution values sum to a non-finite total")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Errors related to dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Threshold(InvalidInputError),
    ZeroTopN,
    InvertedYearRange { from_year: i16, to_year: i16 },
    YearOutOfRange { year: i16, first: i16, last: i16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Threshold(e) => write!(f, "{e}"),
            ConfigError::ZeroTopN => write!(f, "top_n must be at least 1"),
            ConfigError::InvertedYearRange { from_year, to_year } => {
                write!(f, "GDP year range {from_year}..={to_year} is inverted")
            }
            ConfigError::YearOutOfRange { year, first, last } => {
                write!(f, "GDP year {year} is outside {first}..={last}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Threshold(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidInputError> for ConfigError {
    fn from(err: InvalidInputError) -> Self {
        ConfigError::Threshold(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    Input(InvalidInputError),
    Config(ConfigError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Input(e) => write!(f, "invalid ranking input: {e}"),
            DashboardError::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Input(e) => Some(e),
            DashboardError::Config(e) => Some(e),
        }
    }
}

impl From<InvalidInputError> for DashboardError {
    fn from(err: InvalidInputError) -> Self {
        DashboardError::Input(err)
    }
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
