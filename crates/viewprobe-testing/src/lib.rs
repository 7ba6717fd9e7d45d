//! Testing utilities and harness for Viewprobe
//!
//! [`LayoutRobot`] plays the part of a host framework's measurement source:
//! it owns a reconciled modifier chain and delivers layout snapshots to it,
//! one per simulated pass. [`GeometryRecorder`] captures what the callbacks
//! observe so tests can assert on the exact event sequence.

pub mod recorder;
pub mod robot;

pub use recorder::{GeometryEvent, GeometryRecorder};
pub use robot::LayoutRobot;

pub mod prelude {
    pub use crate::recorder::{GeometryEvent, GeometryRecorder};
    pub use crate::robot::LayoutRobot;
}
