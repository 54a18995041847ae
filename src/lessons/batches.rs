use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use std::ops::RangeInclusive;

/// A batch goes on the stove every 15 minutes; four make a shift.
pub const SHIFT_BATCHES: RangeInclusive<u32> = 1..=4;

pub struct Batches;

impl Lesson for Batches {
    fn name(&self) -> &str {
        "batches"
    }

    fn title(&self) -> &str {
        "Loops: batch chai"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        for batch in SHIFT_BATCHES {
            out.line(format!("preparing chai for batch #{}", batch));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_batches_in_order() {
        let mut out = Transcript::new();
        Batches.run(&mut out).unwrap();

        assert_eq!(
            out.lines(),
            &[
                "preparing chai for batch #1",
                "preparing chai for batch #2",
                "preparing chai for batch #3",
                "preparing chai for batch #4",
            ]
        );
    }
}
