//! Turns plane queries into plain gizmo draw commands, once per frame.
//!
//! Nothing here renders. A host calls [`update_and_render`] with the current [`Scene`] and
//! forwards the emitted [`DrawCommand`]s to whatever draws debug geometry.

mod command;
mod config;
mod frame;
pub mod labels;
mod probe;
mod scene;

pub use command::*;
pub use config::*;
pub use frame::*;
pub use probe::*;
pub use scene::*;
