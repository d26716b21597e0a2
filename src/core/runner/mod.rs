//! # Runner Module
//!
//! Drives profiles end to end.
//!
//! ## Per profile
//! `VALIDATE -> SCAN -> (PROCESS-EACH-FILE)* -> REPORT`
//!
//! A validation failure ends the profile straight away with an error-level
//! log and nothing moved. Each file then goes through a readability check,
//! date resolution and the move; a file that fails any step is logged and
//! left where it is.
//!
//! ## Across profiles
//! Profiles run one after another in the order given. A failing profile
//! never stops the ones after it. The only thing they share is the log sink.
//!
//! ## Example
//! ```rust,ignore
//! use media_organizer::core::profile::{Profile, ProfileSet};
//! use media_organizer::core::runner::MediaOrganizer;
//! use media_organizer::logging::TracingSink;
//!
//! let profiles = ProfileSet::new()
//!     .with("camera", Profile::new("/Users/me/Incoming", "/Users/me/Photos"));
//!
//! let report = MediaOrganizer::new(profiles, TracingSink::default()).organize();
//! println!("{} file(s) moved", report.total_moved());
//! ```

mod executor;
mod report;

pub use executor::ProfileRunner;
pub use report::{MovedFile, ProfileReport, ProfileStatus, RunReport};

use crate::core::profile::ProfileSet;
use crate::error::OrganizerError;
use crate::events::{null_sender, Event, EventSender, RunEvent};
use crate::logging::LogSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runs a set of named profiles against one log sink
pub struct MediaOrganizer<L: LogSink> {
    profiles: ProfileSet,
    log: L,
    events: EventSender,
    cancel: Option<Arc<AtomicBool>>,
}

impl<L: LogSink> MediaOrganizer<L> {
    pub fn new(profiles: ProfileSet, log: L) -> Self {
        Self {
            profiles,
            log,
            events: null_sender(),
            cancel: None,
        }
    }

    /// Report progress on `sender` as well as the log
    pub fn with_events(mut self, sender: EventSender) -> Self {
        self.events = sender;
        self
    }

    /// Stop between files once `flag` is set. Profiles not yet started are
    /// reported as cancelled.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Run every configured profile
    pub fn organize(&self) -> RunReport {
        self.organize_profiles(&self.profiles)
    }

    /// Run `profiles` instead of the configured set, with the same sink,
    /// events and cancel flag
    pub fn organize_profiles(&self, profiles: &ProfileSet) -> RunReport {
        self.events.send(Event::Run(RunEvent::Started {
            profiles: profiles.len(),
        }));

        let mut runner = ProfileRunner::new(&self.log, &self.events);
        if let Some(flag) = self.cancel.as_deref() {
            runner = runner.with_cancel_flag(flag);
        }

        let mut report = RunReport::default();
        for (name, profile) in profiles.iter() {
            if self.cancelled() {
                self.log
                    .warn(&format!("{}: {}", name, OrganizerError::Cancelled));
                report.profiles.push(ProfileReport::cancelled(name));
                continue;
            }
            report.profiles.push(runner.run(name, profile));
        }

        self.events.send(Event::Run(RunEvent::Completed(report.clone())));
        report
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
