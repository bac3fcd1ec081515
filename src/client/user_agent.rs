//! User-agent string assembly.
//!
//! Every session identifies itself with a user-agent embedding the SDK
//! name, the Rust toolchain version the crate targets, the operating
//! system, the machine architecture and the process locale:
//!
//! ```text
//! Mozilla/4.0 (compatible; MoipRustSDK/0.1.0; Rust/1.70; linux; x86_64; en_US.UTF-8)
//! ```
//!
//! When OS information is unavailable a degraded form omits the
//! machine-specific fields. The formatter is a pure function over its
//! inputs; the environment is sampled separately in [`default_user_agent`]
//! so the formatting rules stay testable without touching global state.

use std::env;

/// SDK identification token, e.g. `MoipRustSDK/0.1.0`.
pub const CLIENT_NAME: &str = concat!("MoipRustSDK/", env!("CARGO_PKG_VERSION"));

/// Rust toolchain version the crate targets, from Cargo.toml.
pub const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Operating system identification for the full user-agent form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsInfo {
    /// Kernel/OS name, e.g. `linux`.
    pub sysname: String,
    /// Machine architecture, e.g. `x86_64`.
    pub machine: String,
}

/// Formats a user-agent string from its parts.
///
/// With OS information available the full form is produced; without it,
/// the machine-specific fields are omitted. Both forms always contain the
/// client-name token and the Rust version token.
#[must_use]
pub fn build_user_agent(
    client_name: &str,
    rust_version: &str,
    os: Option<&OsInfo>,
    locale: &str,
) -> String {
    os.map_or_else(
        || format!("Mozilla/4.0 (compatible; {client_name}; Rust/{rust_version}; {locale})"),
        |os| {
            format!(
                "Mozilla/4.0 (compatible; {client_name}; Rust/{rust_version}; {}; {}; {locale})",
                os.sysname, os.machine
            )
        },
    )
}

/// Builds the user-agent for the current process.
#[must_use]
pub fn default_user_agent() -> String {
    build_user_agent(CLIENT_NAME, RUST_VERSION, Some(&os_info()), &locale())
}

/// Samples OS identification from the compile-time target constants.
fn os_info() -> OsInfo {
    OsInfo {
        sysname: env::consts::OS.to_string(),
        machine: env::consts::ARCH.to_string(),
    }
}

/// Samples the process locale, falling back to the POSIX default.
fn locale() -> String {
    env::var("LC_ALL")
        .or_else(|_| env::var("LANG"))
        .unwrap_or_else(|_| "C".to_string())
}
