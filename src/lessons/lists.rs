use crate::domain::containers::remove_value;
use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;

pub struct Lists;

impl Lesson for Lists {
    fn name(&self) -> &str {
        "lists"
    }

    fn title(&self) -> &str {
        "Lists: growable sequences"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut ingredients = vec!["water", "milk", "black tea"];
        out.line(format!("Ingredients are: {:?}", ingredients));

        ingredients.push("sugar");
        out.line(format!("After push: {:?}", ingredients));

        remove_value(&mut ingredients, &"water")?;
        out.line(format!("After remove: {:?}", ingredients));

        let mut chai_ingredients = vec!["water", "milk"];
        let spice_options = ["ginger", "cardamom"];
        chai_ingredients.extend(spice_options);
        out.line(format!("Chai: {:?}", chai_ingredients));

        chai_ingredients.insert(2, "black tea");
        out.line(format!("After insert: {:?}", chai_ingredients));

        let last_added = chai_ingredients.pop();
        out.line(format!("Last added: {:?}", last_added));
        out.line(format!("After pop: {:?}", chai_ingredients));

        chai_ingredients.reverse();
        out.line(format!("After reverse: {:?}", chai_ingredients));

        chai_ingredients.sort_unstable();
        out.line(format!("After sort: {:?}", chai_ingredients));

        let sugar_levels = [1, 2, 3, 4, 5];
        out.line(format!(
            "Maximum sugar level: {:?}",
            sugar_levels.iter().max()
        ));
        out.line(format!(
            "Minimum sugar level: {:?}",
            sugar_levels.iter().min()
        ));
        let empty: [i32; 0] = [];
        out.line(format!("Maximum of nothing: {:?}", empty.iter().max()));

        out.section("Combining");
        let base_liquid = ["water", "milk"];
        let extra_flavor = ["ginger"];
        let liquid_mix = [base_liquid.as_slice(), extra_flavor.as_slice()].concat();
        out.line(format!("Liquid mix: {:?}", liquid_mix));

        let strong_brew = ["black tea", "water"].repeat(3);
        out.line(format!("Strong brew: {:?}", strong_brew));

        out.section("Byte buffers");
        let raw_spice_data = b"cinnamon".to_vec();
        out.line(format!("Bytes: b\"{}\"", raw_spice_data.escape_ascii()));
        let raw_spice_data = replace_bytes(&raw_spice_data, b"cinna", b"cardamom");
        out.line(format!("After replace: b\"{}\"", raw_spice_data.escape_ascii()));

        match remove_value(&mut chai_ingredients, &"saffron") {
            Ok(_) => out.line("Removed saffron"),
            Err(e) => out.line(format!("Removing saffron fails: {}", e)),
        }

        Ok(())
    }
}

/// Replaces every non-overlapping occurrence of `from` with `to`.
fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    if from.is_empty() {
        return haystack.to_vec();
    }

    let mut result = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        result.extend_from_slice(&rest[..pos]);
        result.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    result.extend_from_slice(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_sequence() {
        let mut out = Transcript::new();
        Lists.run(&mut out).unwrap();

        assert!(out.contains(r#"After remove: ["milk", "black tea", "sugar"]"#));
        assert!(out.contains(r#"After insert: ["water", "milk", "black tea", "ginger", "cardamom"]"#));
        assert!(out.contains(r#"Last added: Some("cardamom")"#));
        assert!(out.contains(r#"After reverse: ["ginger", "black tea", "milk", "water"]"#));
        assert!(out.contains(r#"After sort: ["black tea", "ginger", "milk", "water"]"#));
        assert!(out.contains("Maximum sugar level: Some(5)"));
        assert!(out.contains("Maximum of nothing: None"));
        assert!(out.contains(r#"Liquid mix: ["water", "milk", "ginger"]"#));
        assert!(out.contains(r#"After replace: b"cardamommon""#));
        assert!(out.contains(r#"Removing saffron fails: Key not found: "saffron""#));
    }

    #[test]
    fn test_replace_bytes() {
        assert_eq!(replace_bytes(b"cinnamon", b"cinna", b"cardamom"), b"cardamommon");
        assert_eq!(replace_bytes(b"aXaXa", b"X", b"--"), b"a--a--a");
        assert_eq!(replace_bytes(b"tea", b"milk", b"x"), b"tea");
        assert_eq!(replace_bytes(b"tea", b"", b"x"), b"tea");
    }
}
