//! Exit codes for the `filez` command line tool
//!
//! These codes follow the BSD sysexits.h conventions where possible so
//! that scripts can tell configuration mistakes from remote failures.

/// Exit codes returned by the `filez` binary
///
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Filez specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilezExitCode {
    /// Command line usage error (64) - Bad argument or parameter combination
    UsageError = 64,

    /// Data format error (65) - Output could not be produced
    DataError = 65,

    /// Service unavailable (69) - The Filez host could not be reached
    Unavailable = 69,

    /// Internal software error (70) - Unexpected failure
    SoftwareError = 70,

    /// Input/output error (74) - Local file could not be read or written
    IoError = 74,

    /// Configuration error (78) - Missing or unreadable credentials
    ConfigError = 78,

    /// Authentication error (100) - Token exchange failed or no token held
    AuthError = 100,

    /// API error (102) - Remote API returned a non-200 status
    ApiError = 102,
}

impl FilezExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            FilezExitCode::UsageError => "Command line usage error",
            FilezExitCode::DataError => "Data format error",
            FilezExitCode::Unavailable => "Service unavailable",
            FilezExitCode::SoftwareError => "Internal software error",
            FilezExitCode::IoError => "Input/output error",
            FilezExitCode::ConfigError => "Configuration error",
            FilezExitCode::AuthError => "Authentication error",
            FilezExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<FilezExitCode> for i32 {
    fn from(code: FilezExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sysexits() {
        assert_eq!(FilezExitCode::UsageError.code(), 64);
        assert_eq!(FilezExitCode::ConfigError.code(), 78);
        assert_eq!(i32::from(FilezExitCode::ApiError), 102);
    }
}
