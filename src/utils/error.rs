use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroceryError {
    #[error("Invalid {facet} value '{value}'{}", row_suffix(.row))]
    InvalidCategory {
        facet: &'static str,
        value: String,
        row: Option<u64>,
    },

    #[error("Invalid price '{value}'{}", row_suffix(.row))]
    InvalidNumber { value: String, row: Option<u64> },

    #[error("Missing column '{column}'{}", row_suffix(.row))]
    MissingColumn {
        column: &'static str,
        row: Option<u64>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GroceryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

fn row_suffix(row: &Option<u64>) -> String {
    match row {
        Some(row) => format!(" at row {}", row),
        None => String::new(),
    }
}

impl From<csv::Error> for GroceryError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return GroceryError::CsvError(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => GroceryError::IoError(io),
            other => GroceryError::IoError(std::io::Error::other(format!("{:?}", other))),
        }
    }
}

impl GroceryError {
    /// Attaches a data row number to row-level parse failures.
    ///
    /// Errors that already carry a row, or that are not row-level, pass
    /// through unchanged.
    pub fn at_row(self, line: u64) -> Self {
        match self {
            GroceryError::InvalidCategory {
                facet,
                value,
                row: None,
            } => GroceryError::InvalidCategory {
                facet,
                value,
                row: Some(line),
            },
            GroceryError::InvalidNumber { value, row: None } => GroceryError::InvalidNumber {
                value,
                row: Some(line),
            },
            GroceryError::MissingColumn { column, row: None } => GroceryError::MissingColumn {
                column,
                row: Some(line),
            },
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GroceryError::InvalidCategory { .. }
            | GroceryError::InvalidNumber { .. }
            | GroceryError::MissingColumn { .. }
            | GroceryError::CsvError(_)
            | GroceryError::SerializationError(_) => ErrorCategory::Data,
            GroceryError::IoError(_) => ErrorCategory::Io,
            GroceryError::ConfigError { .. }
            | GroceryError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GroceryError::InvalidCategory { .. }
            | GroceryError::InvalidNumber { .. }
            | GroceryError::MissingColumn { .. }
            | GroceryError::CsvError(_) => format!("Grocery list could not be loaded: {}", self),
            GroceryError::IoError(e) => format!("File access failed: {}", e),
            GroceryError::SerializationError(e) => format!("Could not render output: {}", e),
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GroceryError::InvalidCategory { .. } => {
                "Use one of the listed symbols for this column, e.g. weekly, needed, dairy, pantry"
            }
            GroceryError::InvalidNumber { .. } => "Write the price as a plain decimal number such as 3.5",
            GroceryError::MissingColumn { .. } => {
                "Make sure the header is name,price,priority,supply,grocer_area,kitchen_area and every row has six fields"
            }
            GroceryError::CsvError(_) => "Check that the file is UTF-8 comma separated text",
            GroceryError::IoError(_) => "Check that the data directory exists and is writable",
            GroceryError::SerializationError(_) => "Retry without --json",
            _ => "Check the configuration file and command line flags",
        }
    }
}
