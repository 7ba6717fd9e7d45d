//! Layout robot: a simulated measurement source.
//!
//! The robot drives geometry observers the way a real host would, but
//! headless and layout-only: it holds the current viewport size and
//! safe-area insets, and each call to [`LayoutRobot::layout_pass`] delivers
//! them as one snapshot to every observer attached through the modifier.
//!
//! # Example
//!
//! ```
//! use viewprobe_testing::{GeometryRecorder, LayoutRobot};
//! use viewprobe_ui::Modifier;
//!
//! let recorder = GeometryRecorder::new();
//! let modifier = Modifier::empty().on_appear(recorder.record_appear());
//!
//! let mut robot = LayoutRobot::new(&modifier, 800.0, 600.0);
//! robot.layout_pass();
//!
//! assert_eq!(recorder.len(), 1);
//! ```

use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};
use viewprobe_ui::{Modifier, ModifierChainHandle};

/// Programmatic control over a simulated view and its layout passes.
pub struct LayoutRobot {
    handle: ModifierChainHandle,
    size: Size,
    insets: EdgeInsets,
    passes: u32,
}

impl LayoutRobot {
    /// Attaches `modifier` with the given initial viewport.
    ///
    /// Attach happens immediately; snapshots start flowing on the first
    /// explicit layout pass, so tests control exactly when the initial
    /// layout is observed.
    pub fn new(modifier: &Modifier, width: f32, height: f32) -> Self {
        let mut handle = ModifierChainHandle::new();
        handle.update(modifier);
        Self {
            handle,
            size: Size::new(width, height),
            insets: EdgeInsets::ZERO,
            passes: 0,
        }
    }

    /// Delivers the current geometry as one layout pass.
    ///
    /// Calling this repeatedly without changing geometry simulates a host
    /// that re-runs layout without anything moving.
    pub fn layout_pass(&mut self) {
        let snapshot = self.snapshot();
        log::debug!("robot layout pass {}: {:?}", self.passes + 1, snapshot);
        self.handle.dispatch_layout_pass(&snapshot);
        self.passes += 1;
    }

    /// Resizes the viewport (simulates window resize) and runs a pass.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        self.layout_pass();
    }

    /// Changes the safe-area insets and runs a pass.
    pub fn set_safe_area(&mut self, insets: EdgeInsets) {
        self.insets = insets;
        self.layout_pass();
    }

    /// Re-reconciles the chain against a new modifier, as a recomposition would.
    pub fn update_modifier(&mut self, modifier: &Modifier) {
        self.handle.update(modifier);
    }

    /// Snapshot the next layout pass would deliver.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(self.size, self.insets)
    }

    /// Number of passes delivered so far.
    pub fn pass_count(&self) -> u32 {
        self.passes
    }

    pub fn handle(&self) -> &ModifierChainHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut ModifierChainHandle {
        &mut self.handle
    }
}
