pub mod runner;

pub use crate::domain::model::{LessonResult, Transcript};
pub use crate::domain::ports::Lesson;
pub use crate::utils::error::Result;
