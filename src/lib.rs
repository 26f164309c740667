//! canvas-rs: client engine for a collaborative hierarchical pixel canvas.
//!
//! Users navigate a 729x729 shared canvas by drilling into nested 3x3
//! sections down to single pixels, and paint at the deepest levels. This
//! crate owns the coordinate math, the level/zoom/history state machine,
//! optimistic paint batching, and realtime refresh throttling. Rendering and
//! network transport stay on the host side, behind the `CanvasService` seam.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod service;
pub mod telemetry;

pub use api::{CanvasEngine, CanvasEngineConfig};
pub use error::{CanvasError, CanvasResult};
