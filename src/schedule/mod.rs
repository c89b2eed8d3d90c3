//! Pacing timers for the turn loop.
//!
//! Opponent "thinking" and the pause before each draw are cosmetic delays.
//! They run through a `Scheduler` on a logical clock instead of wall-clock
//! timers, so a reset can cancel them and tests can step time explicitly.

pub mod queue;

pub use queue::{ScheduledTask, Scheduler, TaskId};
