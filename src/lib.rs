//! Two-panel vertical split with a draggable handle that snaps to either
//! edge when released close to it.
//!
//! [`split_controller::SplitController`] holds the drag state machine and
//! geometry and has no UI dependency. [`split_view::SplitView`] wires it into
//! egui.

pub mod config;
pub mod panels;
pub mod split_controller;
pub mod split_view;
pub mod spring;
pub mod visibility;

pub use split_controller::{snap_target, DragState, SplitConfig, SplitController};
pub use split_view::SplitView;
pub use spring::Spring;
