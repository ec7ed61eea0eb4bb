//! Deferred callbacks on a virtual timeline.
//!
//! Reproduces the "callbacks scheduled inside a loop" illustration without
//! real timers: callbacks fire ordered by delay, and by scheduling order when
//! delays are equal. Each callback sees only what it captured when it was
//! scheduled.
//!
//! # Example
//!
//! ```rust
//! use kata::deferred::Timeline;
//! use std::time::Duration;
//!
//! let mut timeline = Timeline::new();
//! for i in 0..3 {
//!     timeline.schedule(Duration::from_secs(1), move || i);
//! }
//!
//! assert_eq!(timeline.run(), vec![0, 1, 2]);
//! ```

mod timeline;

pub use timeline::{TaskId, Timeline};
