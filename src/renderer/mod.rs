//! Render-side view of the simulation
//!
//! The simulation never draws. After each tick the host captures a
//! `RenderSnapshot` and turns it into line geometry for whatever backend it
//! drives.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use snapshot::{GAME_OVER_TEXT, Hud, RenderSnapshot};
pub use vertex::LineVertex;
