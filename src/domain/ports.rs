use crate::domain::model::Transcript;
use crate::utils::error::Result;

/// One self-contained demonstration unit.
pub trait Lesson: Send + Sync {
    /// Short selector used by `--only` / `--skip`.
    fn name(&self) -> &str;

    fn title(&self) -> &str;

    /// Writes the lesson's output. Must be deterministic.
    fn run(&self, out: &mut Transcript) -> Result<()>;
}
