//! # Core Module
//!
//! The organizing engine, independent of how it is configured or invoked.
//!
//! ## Modules
//! - `profile` - Profile options, defaults and validation
//! - `scanner` - Lists candidate files in a source directory
//! - `date` - Works out a file's effective date
//! - `mover` - Moves a dated file into the target tree without clobbering
//! - `runner` - Drives profiles end to end and reports the outcome

pub mod date;
pub mod mover;
pub mod profile;
pub mod runner;
pub mod scanner;

// Re-export commonly used types
pub use date::{DateResolver, DateSource, ExifField, ResolvedDate};
pub use mover::{CollisionSafeMover, TargetMask};
pub use profile::{Profile, ProfileOverrides, ProfileSet};
pub use runner::{MediaOrganizer, ProfileReport, ProfileRunner, RunReport};
pub use scanner::{CandidateFile, PathClassifier};
