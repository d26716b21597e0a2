//! Profile configuration and validation.
//!
//! A [`Profile`] is plain data with documented defaults. [`validate`] checks
//! it against the filesystem and compiles its masks into a
//! [`ValidatedProfile`], which is what the rest of the engine consumes.

mod types;
mod validate;

pub use types::{Profile, ProfileOverrides, ProfileSet};
pub use validate::{validate, ValidatedProfile};
