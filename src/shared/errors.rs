/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::error::Error;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A single problem found while validating a ride request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorIssue {
    PickupOutOfRange(i32),
    DestinationOutOfRange(i32),
    SameFloor(i32),
}

impl fmt::Display for FloorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FloorIssue::PickupOutOfRange(floor) => {
                write!(f, "pickup floor {} is out of range", floor)
            }
            FloorIssue::DestinationOutOfRange(floor) => {
                write!(f, "destination floor {} is out of range", floor)
            }
            FloorIssue::SameFloor(floor) => {
                write!(f, "start and end floors must be different (both {})", floor)
            }
        }
    }
}

/// Every problem found in a ride request, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub n_floors: i32,
    pub issues: Vec<FloorIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ride request (floors are 1..={}): ", self.n_floors)?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Why a ride request was refused. No variant leaves any car modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideError {
    /// The clock is stopped.
    NotRunning,
    /// Bad floor range or equal floors.
    Validation(ValidationError),
    /// No idle car right now. Retry later.
    CarBusy,
}

impl RideError {
    /// Stable tag used by the console when reporting the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            RideError::NotRunning => "not_running",
            RideError::Validation(_) => "validation",
            RideError::CarBusy => "busy",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, RideError::CarBusy)
    }
}

impl fmt::Display for RideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideError::NotRunning => write!(f, "Simulation has not been started."),
            RideError::Validation(e) => write!(f, "{}", e),
            RideError::CarBusy => write!(f, "All cars are busy. Please try again later."),
        }
    }
}

impl Error for RideError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RideError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for RideError {
    fn from(e: ValidationError) -> Self {
        RideError::Validation(e)
    }
}

/// The error type for loading `config.toml`.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration file: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
