//! Process-wide logging setup shared by the dashkit binaries.

pub mod tracing;

pub use self::tracing::LogFormat;
