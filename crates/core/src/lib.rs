//! Core for the salut project.
//!
//! Pure, HTTP-free building blocks: the read-only user directory, the
//! locale and timezone fallback chains, and locale-aware time formatting.
//! The web crate wires these into request handling; nothing in here does
//! I/O or holds mutable state.

pub mod clock;
pub mod directory;
pub mod locale;
pub mod settings;
pub mod timezone;

pub use directory::{UserDirectory, UserRecord};
pub use settings::{Settings, SettingsError};
