//! # Techscan Core
//!
//! Directory walking and marker-file classification for the techscan server.
//!
//! The crate exposes a single capability trait, [`TechScanner`], whose one
//! operation turns a directory path into a [`ScanResult`]: a timestamp, a
//! count of files visited, and the list of [`DetectedItem`]s whose filenames
//! matched a known technology marker. The production implementation,
//! [`WalkingScanner`], performs a recursive filesystem walk; nothing here
//! opens file contents or touches the network.

pub mod error;
pub mod model;
pub mod scanner;

pub use error::{Result, ScanError};
pub use model::{DetectedItem, ScanRequest, ScanResult, TechKind};
pub use scanner::{TechScanner, WalkingScanner};
