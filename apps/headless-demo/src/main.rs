//! Headless Viewprobe demo.
//!
//! Attaches a geometry observer to a simulated view and walks it through a
//! scripted sequence of layout passes: first layout, a safe-area change, a
//! rotation, a redundant pass, and a rotation back. Run with
//! `RUST_LOG=trace` to also see the observer's internal dispatch notes.

use env_logger::Env;

use viewprobe_geometry::{EdgeInsets, LayoutSnapshot, Size};
use viewprobe_ui::{GeometryCallbacks, Modifier, ModifierChainHandle};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let callbacks = GeometryCallbacks::new()
        .on_appear(|snapshot| {
            log::info!(
                "appeared: size {:?}, safe area {:?}",
                snapshot.size(),
                snapshot.safe_area_insets()
            );
        })
        .on_size_change_values(|old, new| {
            log::info!("size changed: {:?} -> {:?}", old, new);
        })
        .on_insets_change_values(|old, new| {
            log::info!("safe area changed: {:?} -> {:?}", old, new);
        });
    let modifier = Modifier::empty().observe_geometry(callbacks);
    log::info!("attaching {:?}", modifier);

    let mut handle = ModifierChainHandle::new();
    handle.update(&modifier);

    let portrait = Size::new(390.0, 844.0);
    let landscape = Size::new(844.0, 390.0);
    let notch = EdgeInsets::from_components(47.0, 0.0, 34.0, 0.0);

    handle.dispatch_layout_pass(&LayoutSnapshot::new(portrait, EdgeInsets::ZERO));
    handle.dispatch_layout_pass(&LayoutSnapshot::new(portrait, notch));
    handle.dispatch_layout_pass(&LayoutSnapshot::new(landscape, notch));
    // Unchanged geometry: the observer stays silent for this pass.
    handle.dispatch_layout_pass(&LayoutSnapshot::new(landscape, notch));
    handle.dispatch_layout_pass(&LayoutSnapshot::new(portrait, notch));
}
