use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;

pub struct Booleans;

impl Lesson for Booleans {
    fn name(&self) -> &str {
        "booleans"
    }

    fn title(&self) -> &str {
        "Booleans: true/false values"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let is_boiling = true;
        let stir_count = 5;
        // bool never adds to a number implicitly; `i32::from` makes it 0 or 1
        out.line(format!(
            "Total actions: {}",
            stir_count + i32::from(is_boiling)
        ));

        out.section("Truthiness is explicit");
        for milk_present in [0, 1, 11] {
            out.line(format!(
                "Is there milk ({})? {}",
                milk_present,
                milk_present != 0
            ));
        }
        let milk_label = "Hitesh";
        out.line(format!(
            "Is there milk ({:?})? {}",
            milk_label,
            !milk_label.is_empty()
        ));
        let no_milk: Option<&str> = None;
        out.line(format!("Is there milk (None)? {}", no_milk.is_some()));

        out.section("Logical operations");
        let water_hot = true;
        let mut tea_added = false;
        out.line(format!("Can serve chai: {}", water_hot && tea_added));
        tea_added = true;
        out.line(format!("Can serve chai: {}", water_hot && tea_added));

        let has_tea = false;
        let has_coffee = true;
        out.line(format!("Can serve beverage: {}", has_tea || has_coffee));

        let is_raining = true;
        out.line(format!("Can go outside: {}", !is_raining));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_lines() {
        let mut out = Transcript::new();
        Booleans.run(&mut out).unwrap();

        assert!(out.contains("Total actions: 6"));
        assert!(out.contains("Is there milk (0)? false"));
        assert!(out.contains("Is there milk (11)? true"));
        assert!(out.contains("Is there milk (\"Hitesh\")? true"));
        assert!(out.contains("Is there milk (None)? false"));
        assert!(out.contains("Can serve beverage: true"));
        assert!(out.contains("Can go outside: false"));

        let serve: Vec<&String> = out
            .lines()
            .iter()
            .filter(|l| l.starts_with("Can serve chai"))
            .collect();
        assert_eq!(serve, ["Can serve chai: false", "Can serve chai: true"]);
    }
}
