//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts or enable forking for every proptest suite in
//! the workspace without touching the suites themselves.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const SENTIERO_PBT_CASES_ENV_KEY: &str = "SENTIERO_PBT_CASES";
/// Environment variable enabling forked proptest execution.
pub const SENTIERO_PBT_FORK_ENV_KEY: &str = "SENTIERO_PBT_FORK";

/// Why an override was ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count did not parse as an unsigned integer.
    #[error("expected a positive integer, got {raw:?}")]
    NotANumber {
        /// Value as read from the environment.
        raw: String,
    },
    /// Zero cases would silently disable the property.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {raw:?}")]
    NotABool {
        /// Value as read from the environment.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
///
/// # Examples
/// ```
/// use sentiero_test_support::ci::property_test_profile::ProptestRunProfile;
///
/// let profile = ProptestRunProfile::load(64, false);
/// assert!(profile.cases() > 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, keeping the defaults for any
    /// variable that is unset or invalid.
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(SENTIERO_PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(SENTIERO_PBT_FORK_ENV_KEY, default_fork, parse_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test profile override");
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`ProfileOverrideError::NotANumber`] or
/// [`ProfileOverrideError::ZeroCases`].
pub fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ProfileOverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(ProfileOverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

/// Parses a boolean fork flag.
///
/// # Errors
/// Returns [`ProfileOverrideError::NotABool`] for unrecognised spellings.
pub fn parse_fork(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
