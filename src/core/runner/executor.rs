//! Single-profile execution.

use super::report::{MovedFile, ProfileReport, ProfileStatus};
use crate::core::date::{DateResolver, ResolvedDate};
use crate::core::mover::CollisionSafeMover;
use crate::core::profile::{validate, Profile, ValidatedProfile};
use crate::error::{MoveError, SkipReason};
use crate::events::{Event, EventSender, ProfileEvent};
use crate::logging::LogSink;
use std::fs::{self, File};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs one profile: validate, scan, then date and move each file.
///
/// Nothing that goes wrong with a single file stops the profile, and nothing
/// that goes wrong with the profile escapes as an error; both end up in the
/// returned [`ProfileReport`] and the log.
pub struct ProfileRunner<'a, L: LogSink + ?Sized> {
    log: &'a L,
    events: &'a EventSender,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, L: LogSink + ?Sized> ProfileRunner<'a, L> {
    pub fn new(log: &'a L, events: &'a EventSender) -> Self {
        Self {
            log,
            events,
            cancel: None,
        }
    }

    /// Stop between files once `flag` is set
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn run(&self, name: &str, profile: &Profile) -> ProfileReport {
        self.log.info(&format!("Processing profile: {}", name));
        self.events.send(Event::Profile(ProfileEvent::Started {
            name: name.to_string(),
        }));

        let report = match validate(profile) {
            Ok(validated) => self.process(name, &validated),
            Err(e) => {
                let reason = e.to_string();
                self.log
                    .error(&format!("Profile {} is invalid: {}", name, reason));
                self.events.send(Event::Profile(ProfileEvent::Invalid {
                    name: name.to_string(),
                    reason: reason.clone(),
                }));
                ProfileReport::invalid(name, reason)
            }
        };

        self.events
            .send(Event::Profile(ProfileEvent::Completed(report.clone())));
        report
    }

    fn process(&self, name: &str, profile: &ValidatedProfile) -> ProfileReport {
        let mut report = ProfileReport::new(name);

        let scan = profile.classifier().classify(&profile.source_directory);
        for error in &scan.errors {
            self.log.warn(&error.to_string());
        }
        report.scan_errors = scan.errors.len();
        report.files_found = scan.files.len();

        self.log
            .debug(&format!("{} file(s) found.", report.files_found));
        self.events.send(Event::Profile(ProfileEvent::FilesFound {
            name: name.to_string(),
            count: report.files_found,
        }));

        let resolver = DateResolver::new(&profile.strategies);
        let mover = CollisionSafeMover::new(
            &profile.target_directory,
            &profile.target_mask,
            profile.overwrite,
        );

        for file in &scan.files {
            if self.cancelled() {
                self.log.warn(&format!(
                    "Profile {} cancelled after {} of {} file(s)",
                    name, report.attempted, report.files_found
                ));
                report.status = ProfileStatus::Cancelled;
                break;
            }

            report.attempted += 1;
            let path = file.path();
            self.log.info(&format!("Processing: {}", path.display()));

            let resolved = match self.resolve(&resolver, path) {
                Ok(resolved) => resolved,
                Err(reason) => {
                    self.log.warn(&reason.to_string());
                    self.events.send(Event::Profile(ProfileEvent::FileSkipped {
                        path: path.to_path_buf(),
                        reason: reason.to_string(),
                    }));
                    report.skipped += 1;
                    continue;
                }
            };

            match mover.relocate(path, resolved.date) {
                Ok(destination) => {
                    if destination == path {
                        self.log
                            .info(&format!("{} is already in place", path.display()));
                    } else {
                        self.log.info(&format!(
                            "{} moved to {}",
                            path.display(),
                            destination.display()
                        ));
                    }
                    self.events.send(Event::Profile(ProfileEvent::FileMoved {
                        from: path.to_path_buf(),
                        to: destination.clone(),
                        date: resolved.date,
                        source: resolved.source,
                    }));
                    report.moved += 1;
                    report.moves.push(MovedFile {
                        from: path.to_path_buf(),
                        to: destination,
                        date: resolved.date,
                        source: resolved.source,
                    });
                }
                Err(e) => {
                    if matches!(e, MoveError::CollisionsExhausted { .. }) {
                        self.log.warn(&e.to_string());
                    } else {
                        self.log.error(&e.to_string());
                    }
                    self.events.send(Event::Profile(ProfileEvent::MoveFailed {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }));
                    report.failed += 1;
                }
            }
        }

        self.log.info(&format!(
            "Moved {} of {} file(s)",
            report.moved, report.attempted
        ));
        report
    }

    /// Readability check followed by date resolution
    fn resolve(&self, resolver: &DateResolver<'_>, path: &Path) -> Result<ResolvedDate, SkipReason> {
        check_readable(path)?;

        let resolved = resolver
            .resolve(path)
            .ok_or_else(|| SkipReason::DateUndetermined {
                path: path.to_path_buf(),
            })?;

        self.log.debug(&format!(
            "Date retrieved from {}: {}",
            resolved.source, resolved.date
        ));
        Ok(resolved)
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// A candidate must still be a regular file we can open
fn check_readable(path: &Path) -> Result<(), SkipReason> {
    let unreadable = |reason: String| SkipReason::Unreadable {
        path: path.to_path_buf(),
        reason,
    };

    let meta = fs::symlink_metadata(path).map_err(|e| unreadable(e.to_string()))?;
    if !meta.file_type().is_file() {
        return Err(unreadable("not a regular file".to_string()));
    }
    File::open(path).map_err(|e| unreadable(e.to_string()))?;
    Ok(())
}
