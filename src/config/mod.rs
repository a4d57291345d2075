pub mod settings;

pub use settings::{Config, DemoConfig, OutputConfig, OutputFormat};
