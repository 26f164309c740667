mod engine;
mod engine_config;
mod engine_core;
mod engine_snapshot;
mod navigation_controller;
mod paint_controller;
mod refresh_scheduler;
mod validation;

pub use engine::CanvasEngine;
pub use engine_config::CanvasEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use refresh_scheduler::{DEFAULT_REFRESH_THRESHOLD_MS, RefreshThrottle, ThrottleDecision};
