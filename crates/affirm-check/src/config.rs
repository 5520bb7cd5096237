//! Report formatting configuration.
//!
//! The free-function facades always use [`CheckConfig::default`]. Hosts that
//! want different line endings, or terse fault diagnostics, build a
//! [`Checker`](crate::Checker) with their own config.
//!
//! [`CheckConfig::from_env`] reads:
//! - `AFFIRM_LINE_SEPARATOR`: `lf` or `crlf` (default: `lf`)
//! - `AFFIRM_FAULT_TRACE`: `0`/`false` to omit fault traces (default: on)

use serde::{Deserialize, Serialize};

/// Environment variable selecting the report line separator.
pub const LINE_SEPARATOR_ENV: &str = "AFFIRM_LINE_SEPARATOR";

/// Environment variable toggling trace text in fault diagnostics.
pub const FAULT_TRACE_ENV: &str = "AFFIRM_FAULT_TRACE";

/// Line terminator used between report lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }

    /// Parses `lf` / `crlf` (case-insensitive).
    pub fn parse(name: &str) -> Option<LineSeparator> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lf" => Some(LineSeparator::Lf),
            "crlf" => Some(LineSeparator::CrLf),
            _ => None,
        }
    }
}

/// Formatting options for violation reports and fault diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Separator terminating every report line.
    pub line_separator: LineSeparator,
    /// Whether recoverable fault diagnostics include the captured trace.
    pub include_fault_trace: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CheckConfig {
    /// The configuration used by the facades.
    pub const DEFAULT: CheckConfig = CheckConfig {
        line_separator: LineSeparator::Lf,
        include_fault_trace: true,
    };

    /// Builds a config from `AFFIRM_*` environment variables.
    ///
    /// Unset or unrecognised values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::DEFAULT;

        if let Some(sep) = lookup(LINE_SEPARATOR_ENV).as_deref().and_then(LineSeparator::parse) {
            config.line_separator = sep;
        }

        if let Some(flag) = lookup(FAULT_TRACE_ENV) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => config.include_fault_trace = false,
                "1" | "true" | "on" | "yes" => config.include_fault_trace = true,
                _ => {}
            }
        }

        config
    }
}
