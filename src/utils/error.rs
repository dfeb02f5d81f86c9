use thiserror::Error;

#[derive(Error, Debug)]
pub enum FranchiseError {
    #[error("Franchise not found")]
    FranchiseNotFound,

    #[error("Branch not found in this franchise")]
    BranchNotFound,

    #[error("Product not found in this branch")]
    ProductNotFound,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FranchiseError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        FranchiseError::Storage {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FranchiseError::FranchiseNotFound
            | FranchiseError::BranchNotFound
            | FranchiseError::ProductNotFound => ErrorCategory::Domain,
            FranchiseError::Storage { .. }
            | FranchiseError::SerializationError(_)
            | FranchiseError::IoError(_) => ErrorCategory::Storage,
            FranchiseError::ConfigError { .. }
            | FranchiseError::InvalidConfigValueError { .. }
            | FranchiseError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// 穩定的機器可讀錯誤碼，HTTP 回應的 `code` 欄位
    pub fn error_code(&self) -> &'static str {
        match self {
            FranchiseError::FranchiseNotFound => "FRANCHISE_NOT_FOUND",
            FranchiseError::BranchNotFound => "BRANCH_NOT_FOUND",
            FranchiseError::ProductNotFound => "PRODUCT_NOT_FOUND",
            FranchiseError::Storage { .. }
            | FranchiseError::IoError(_)
            | FranchiseError::SerializationError(_) => "STORAGE_ERROR",
            FranchiseError::ConfigError { .. }
            | FranchiseError::InvalidConfigValueError { .. }
            | FranchiseError::MissingConfigError { .. } => "CONFIG_ERROR",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FranchiseError::FranchiseNotFound
            | FranchiseError::BranchNotFound
            | FranchiseError::ProductNotFound => self.to_string(),
            FranchiseError::Storage { .. } | FranchiseError::IoError(_) => {
                "The document store could not complete the request".to_string()
            }
            FranchiseError::SerializationError(_) => {
                "A stored franchise document could not be decoded".to_string()
            }
            FranchiseError::ConfigError { message } => format!("Invalid configuration: {}", message),
            FranchiseError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
            FranchiseError::MissingConfigError { field } => {
                format!("Missing required configuration: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FranchiseError::FranchiseNotFound => "Check the franchise id or list franchises first",
            FranchiseError::BranchNotFound => "List the franchise's branches to find a valid branch id",
            FranchiseError::ProductNotFound => "Check the product id within the given branch",
            FranchiseError::Storage { .. } | FranchiseError::IoError(_) => {
                "Verify the data path is writable and not locked by another process"
            }
            FranchiseError::SerializationError(_) => {
                "The stored document may be corrupted; restore it from a backup"
            }
            FranchiseError::ConfigError { .. }
            | FranchiseError::InvalidConfigValueError { .. }
            | FranchiseError::MissingConfigError { .. } => {
                "Fix the configuration file or command line arguments and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FranchiseError>;
