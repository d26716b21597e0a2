//! # Events Module
//!
//! Progress reporting for UIs that want more than log lines.
//!
//! ## Design
//! The organizer pushes [`Event`]s into a crossbeam channel. A UI thread
//! drains the receiver; nobody listening is fine.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Profile(ProfileEvent::FileMoved { to, .. }) = event {
//!             println!("-> {}", to.display());
//!         }
//!     }
//! });
//!
//! MediaOrganizer::new(profiles, TracingSink::default())
//!     .with_events(sender)
//!     .organize();
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
