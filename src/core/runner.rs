use crate::core::{Lesson, LessonResult, Transcript};
use crate::lessons;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::validate_known_names;
use serde_json::{Map, Value};
use std::io::Write;
use std::time::Instant;

/// Which lessons a run includes. Empty `only` means all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonSelection {
    pub only: Vec<String>,
    pub skip: Vec<String>,
}

impl LessonSelection {
    pub fn new(only: Vec<String>, skip: Vec<String>) -> Self {
        Self { only, skip }
    }

    pub fn includes(&self, name: &str) -> bool {
        let wanted = self.only.is_empty() || self.only.iter().any(|n| n == name);
        wanted && !self.skip.iter().any(|n| n == name)
    }

    pub fn check_against(&self, known: &[&str]) -> Result<()> {
        validate_known_names(&self.only, known)?;
        validate_known_names(&self.skip, known)
    }
}

/// Runs lessons one after another, in the order they were added.
pub struct LessonRunner {
    lessons: Vec<Box<dyn Lesson>>,
    selection: LessonSelection,
    execution_id: String,
}

impl LessonRunner {
    pub fn new(execution_id: String) -> Self {
        Self {
            lessons: Vec::new(),
            selection: LessonSelection::default(),
            execution_id,
        }
    }

    /// Runner preloaded with every built-in lesson.
    pub fn with_catalogue(execution_id: String) -> Self {
        let mut runner = Self::new(execution_id);
        for lesson in lessons::catalogue() {
            runner.add_lesson(lesson);
        }
        runner
    }

    pub fn with_selection(mut self, selection: LessonSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn add_lesson(&mut self, lesson: Box<dyn Lesson>) {
        self.lessons.push(lesson);
    }

    pub fn execution_id(&self) -> &str {
        &self.execution_id
    }

    /// Lessons the current selection would run, after checking its names.
    pub fn planned(&self) -> Result<Vec<&dyn Lesson>> {
        let known: Vec<&str> = self.lessons.iter().map(|l| l.name()).collect();
        self.selection.check_against(&known)?;

        Ok(self
            .lessons
            .iter()
            .map(|l| l.as_ref())
            .filter(|l| self.selection.includes(l.name()))
            .collect())
    }

    /// Runs every planned lesson and returns the results without printing.
    pub fn execute_all(&self) -> Result<Vec<LessonResult>> {
        self.execute_into(&mut std::io::sink())
    }

    /// Runs every planned lesson, writing each transcript to `out` as soon
    /// as it finishes. Stops at the first failing lesson.
    pub fn execute_into<W: Write>(&self, out: &mut W) -> Result<Vec<LessonResult>> {
        let planned = self.planned()?;
        let mut results = Vec::with_capacity(planned.len());

        tracing::info!(
            "Starting lesson run {} ({} lessons)",
            self.execution_id,
            planned.len()
        );

        for (position, lesson) in planned.into_iter().enumerate() {
            let result = self.execute_lesson(lesson)?;

            if position > 0 {
                writeln!(out)?;
            }
            out.write_all(result.render().as_bytes())?;

            results.push(result);
        }

        out.flush()?;
        tracing::info!("Lesson run {} finished", self.execution_id);
        Ok(results)
    }

    fn execute_lesson(&self, lesson: &dyn Lesson) -> Result<LessonResult> {
        let start_time = Instant::now();
        let mut transcript = Transcript::new();

        tracing::debug!("Running lesson: {}", lesson.name());
        if let Err(e) = lesson.run(&mut transcript) {
            tracing::error!("Lesson {} failed: {}", lesson.name(), e);
            return Err(LessonError::LessonFailed {
                lesson: lesson.name().to_string(),
                details: e.to_string(),
            });
        }

        let result = LessonResult {
            lesson_name: lesson.name().to_string(),
            title: lesson.title().to_string(),
            lines: transcript.into_lines(),
            duration: start_time.elapsed(),
        };

        tracing::debug!(
            "Lesson finished: {} (lines: {}, duration: {:?})",
            result.lesson_name,
            result.lines.len(),
            result.duration
        );

        Ok(result)
    }

    pub fn execution_summary(results: &[LessonResult]) -> Map<String, Value> {
        let mut summary = Map::new();

        let total_lines: usize = results.iter().map(|r| r.lines.len()).sum();
        let total_duration: std::time::Duration = results.iter().map(|r| r.duration).sum();

        summary.insert("total_lessons".to_string(), Value::from(results.len()));
        summary.insert("total_lines".to_string(), Value::from(total_lines));
        summary.insert(
            "total_duration_ms".to_string(),
            Value::from(total_duration.as_millis() as u64),
        );

        let lesson_names: Vec<Value> = results
            .iter()
            .map(|r| Value::String(r.lesson_name.clone()))
            .collect();
        summary.insert("executed_lessons".to_string(), Value::Array(lesson_names));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct MockLesson {
        name: String,
        lines: Vec<String>,
        fail: bool,
    }

    impl MockLesson {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                lines: vec![format!("hello from {}", name)],
                fail: false,
            }
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }
    }

    impl Lesson for MockLesson {
        fn name(&self) -> &str {
            &self.name
        }

        fn title(&self) -> &str {
            &self.name
        }

        fn run(&self, out: &mut Transcript) -> Result<()> {
            for line in &self.lines {
                out.line(line.clone());
            }
            if self.fail {
                return Err(LessonError::KeyError {
                    key: "missing".to_string(),
                });
            }
            Ok(())
        }
    }

    fn runner_with(names: &[&str]) -> LessonRunner {
        let mut runner = LessonRunner::new("test".to_string());
        for name in names {
            runner.add_lesson(Box::new(MockLesson::new(name)));
        }
        runner
    }

    #[test]
    fn test_runs_in_insertion_order() {
        let runner = runner_with(&["one", "two", "three"]);
        let results = runner.execute_all().unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.lesson_name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(results[1].lines, vec!["hello from two".to_string()]);
    }

    #[test]
    fn test_selection_filters_lessons() {
        let runner = runner_with(&["one", "two", "three"]).with_selection(LessonSelection::new(
            vec!["one".to_string(), "three".to_string()],
            vec!["three".to_string()],
        ));
        let results = runner.execute_all().unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lesson_name, "one");
    }

    #[test]
    fn test_unknown_lesson_in_selection_is_rejected() {
        let runner = runner_with(&["one"])
            .with_selection(LessonSelection::new(vec![], vec!["nine".to_string()]));

        let err = runner.execute_all().unwrap_err();
        assert!(matches!(err, LessonError::UnknownLesson { ref name } if name == "nine"));
    }

    #[test]
    fn test_failure_stops_the_run() {
        let mut runner = runner_with(&["one"]);
        runner.add_lesson(Box::new(MockLesson::new("broken").failing()));
        runner.add_lesson(Box::new(MockLesson::new("never")));

        let mut out = Vec::new();
        let err = runner.execute_into(&mut out).unwrap_err();

        assert!(matches!(err, LessonError::LessonFailed { ref lesson, .. } if lesson == "broken"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("hello from one"));
        assert!(!printed.contains("never"));
    }

    #[test]
    fn test_execute_into_separates_lessons() {
        let runner = runner_with(&["one", "two"]);
        let mut out = Vec::new();
        runner.execute_into(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== one ===\nhello from one\n\n=== two ===\nhello from two\n"
        );
    }

    #[test]
    fn test_execution_summary() {
        let results = vec![
            LessonResult {
                lesson_name: "sets".to_string(),
                title: "Sets".to_string(),
                lines: vec!["a".to_string()],
                duration: Duration::from_millis(100),
            },
            LessonResult {
                lesson_name: "lists".to_string(),
                title: "Lists".to_string(),
                lines: vec!["b".to_string(), "c".to_string()],
                duration: Duration::from_millis(200),
            },
        ];

        let summary = LessonRunner::execution_summary(&results);

        assert_eq!(summary["total_lessons"], Value::from(2));
        assert_eq!(summary["total_lines"], Value::from(3));
        assert_eq!(summary["total_duration_ms"], Value::from(300));
        let executed = summary["executed_lessons"].as_array().unwrap();
        assert_eq!(executed, &vec![Value::from("sets"), Value::from("lists")]);
    }

    #[test]
    fn test_catalogue_runner_plans_every_lesson() {
        let runner = LessonRunner::with_catalogue("test".to_string());
        assert_eq!(runner.planned().unwrap().len(), lessons::lesson_names().len());
        assert_eq!(runner.execution_id(), "test");
    }
}
