//! The lesson catalogue, in teaching order.

pub mod batches;
pub mod booleans;
pub mod dictionaries;
pub mod floats;
pub mod integers;
pub mod lists;
pub mod sets;
pub mod strings;
pub mod tuples;

use crate::domain::ports::Lesson;

pub fn catalogue() -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(integers::Integers),
        Box::new(booleans::Booleans),
        Box::new(floats::Floats),
        Box::new(strings::Strings),
        Box::new(tuples::Tuples),
        Box::new(lists::Lists),
        Box::new(sets::Sets),
        Box::new(dictionaries::Dictionaries),
        Box::new(batches::Batches),
    ]
}

/// Names accepted by `--only` / `--skip`, in catalogue order.
pub fn lesson_names() -> Vec<&'static str> {
    vec![
        "integers",
        "booleans",
        "floats",
        "strings",
        "tuples",
        "lists",
        "sets",
        "dictionaries",
        "batches",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_catalogue() {
        let from_catalogue: Vec<String> = catalogue().iter().map(|l| l.name().to_string()).collect();
        assert_eq!(from_catalogue, lesson_names());
    }
}
