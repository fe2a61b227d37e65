pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default};
pub use run::{run, run_cli};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{resolve_settings, wire_dependencies, Overrides, Settings};
