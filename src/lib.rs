pub mod config;
pub mod core;
pub mod domain;
pub mod exercises;
pub mod lessons;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::LessonConfig;
pub use core::runner::{LessonRunner, LessonSelection};
pub use utils::error::{LessonError, Result};
