//! Error types for npm operations.
//!
//! Errors are categorized from npm's stderr so the caller can give useful
//! feedback. Categories do not drive retries: the scaffolding flow is
//! strictly sequential and never retries a subprocess.

use std::path::PathBuf;
use thiserror::Error;

/// Categories of npm errors for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Registry unreachable, DNS failure, timeout
    Network,
    /// Package does not exist in the registry
    NotFound,
    /// Dependency tree could not be resolved
    Conflict,
    /// Filesystem or cache permission problem
    Permission,
    /// npm itself is not installed
    NpmNotFound,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// User-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network connectivity issue",
            Self::NotFound => "Package not found",
            Self::Conflict => "Dependency conflict",
            Self::Permission => "Permission denied",
            Self::NpmNotFound => "npm not installed",
            Self::Other => "Unexpected error",
        }
    }

    /// Actionable advice for resolving this error category.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Network => "Check your internet connection and try again",
            Self::NotFound => "Verify the package name and registry configuration",
            Self::Conflict => "Inspect the dependency tree with `npm ls` and pin versions",
            Self::Permission => "Check ownership of the project and npm cache directories",
            Self::NpmNotFound => "Install Node.js (which ships npm) from https://nodejs.org",
            Self::Other => "Check the error details for more information",
        }
    }
}

/// Errors that can occur during npm operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-related error (registry, DNS, timeout)
    #[error("network error: {message}")]
    Network {
        /// Detailed error message from the failed network operation
        message: String,
    },

    /// Package not found in the registry
    #[error("package not found: {name}")]
    NotFound {
        /// Name of the package that could not be found
        name: String,
    },

    /// Dependency resolution conflict
    #[error("dependency conflict: {message}")]
    Conflict {
        /// Description of the conflict
        message: String,
    },

    /// Permission denied
    #[error("permission denied: {message}")]
    Permission {
        /// Details about what permission was denied
        message: String,
    },

    /// npm is not installed or not found in PATH
    #[error("npm not found. Install Node.js from https://nodejs.org")]
    NpmNotFound,

    /// package.json not found at the expected location
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Command execution failed
    #[error("command failed: {message}")]
    CommandFailed {
        /// Description of what command failed
        message: String,
        /// Standard error output from the failed command
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the error category for user messaging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Network { .. } => ErrorCategory::Network,
            Error::NotFound { .. } => ErrorCategory::NotFound,
            Error::Conflict { .. } => ErrorCategory::Conflict,
            Error::Permission { .. } => ErrorCategory::Permission,
            Error::NpmNotFound => ErrorCategory::NpmNotFound,
            _ => ErrorCategory::Other,
        }
    }

    /// Create an error from npm command output.
    ///
    /// Analyzes stderr (npm error codes and phrasing) to categorize the
    /// error appropriately.
    pub fn from_npm_output(stderr: &str, package_name: Option<&str>) -> Self {
        let stderr_lower = stderr.to_lowercase();

        // Network errors
        if stderr_lower.contains("enotfound")
            || stderr_lower.contains("etimedout")
            || stderr_lower.contains("econnreset")
            || stderr_lower.contains("econnrefused")
            || stderr_lower.contains("eai_again")
            || stderr_lower.contains("network")
            || stderr_lower.contains("socket hang up")
        {
            return Error::Network {
                message: stderr.trim().to_string(),
            };
        }

        // Not found errors
        if stderr_lower.contains("e404")
            || stderr_lower.contains("404 not found")
            || stderr_lower.contains("is not in this registry")
        {
            return Error::NotFound {
                name: package_name.unwrap_or("unknown").to_string(),
            };
        }

        // Resolution conflicts
        if stderr_lower.contains("eresolve")
            || stderr_lower.contains("unable to resolve dependency tree")
            || stderr_lower.contains("conflicting peer dependency")
        {
            return Error::Conflict {
                message: stderr.trim().to_string(),
            };
        }

        // Permission errors
        if stderr_lower.contains("eacces")
            || stderr_lower.contains("eperm")
            || stderr_lower.contains("permission denied")
            || stderr_lower.contains("operation not permitted")
        {
            return Error::Permission {
                message: stderr.trim().to_string(),
            };
        }

        // Default to command failed
        Error::CommandFailed {
            message: format!(
                "npm command failed{}",
                package_name
                    .map(|n| format!(" for {n}"))
                    .unwrap_or_default()
            ),
            stderr: stderr.trim().to_string(),
        }
    }
}

/// Result type for npm operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_npm_output_network() {
        let err = Error::from_npm_output(
            "npm ERR! code ENOTFOUND\nnpm ERR! network request to https://registry.npmjs.org failed",
            Some("axios"),
        );
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_from_npm_output_not_found() {
        let err = Error::from_npm_output(
            "npm ERR! code E404\nnpm ERR! 404 Not Found - GET https://registry.npmjs.org/left-padd",
            Some("left-padd"),
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("left-padd"));
    }

    #[test]
    fn test_from_npm_output_conflict() {
        let err = Error::from_npm_output(
            "npm ERR! code ERESOLVE\nnpm ERR! ERESOLVE unable to resolve dependency tree",
            None,
        );
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn test_from_npm_output_permission() {
        let err = Error::from_npm_output(
            "npm ERR! code EACCES\nnpm ERR! syscall mkdir\nnpm ERR! Error: EACCES: permission denied",
            None,
        );
        assert_eq!(err.category(), ErrorCategory::Permission);
    }

    #[test]
    fn test_from_npm_output_unknown_is_command_failed() {
        let err = Error::from_npm_output("npm ERR! something exotic happened", Some("axios"));
        assert_eq!(err.category(), ErrorCategory::Other);
        match err {
            Error::CommandFailed { message, .. } => assert!(message.contains("axios")),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_category_messaging_is_total() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::NotFound,
            ErrorCategory::Conflict,
            ErrorCategory::Permission,
            ErrorCategory::NpmNotFound,
            ErrorCategory::Other,
        ] {
            assert!(!category.description().is_empty());
            assert!(!category.advice().is_empty());
        }
    }
}
