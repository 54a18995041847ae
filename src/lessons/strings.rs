use crate::domain::containers::{at, tail};
use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;

pub struct Strings;

impl Lesson for Strings {
    fn name(&self) -> &str {
        "strings"
    }

    fn title(&self) -> &str {
        "Strings: immutable text"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let chai_type = "Ginger Chai";
        let customer_name = "Priya";
        out.line(format!("Order for {}: {} please!", customer_name, chai_type));

        out.section("Slicing");
        // byte ranges; fine here because the text is ASCII
        let chai_description = "Aromatic and bold";
        out.line(format!("First word: {}", &chai_description[0..8]));
        out.line(format!("First word (open start): {}", &chai_description[..8]));

        let every_other: String = chai_description[..8].chars().step_by(2).collect();
        out.line(format!("Every 2nd character: {}", every_other));
        // index 12 is the space before "bold"; start past it
        out.line(format!("Last word: {}", &chai_description[13..]));

        let chai_description = "Aromatic and bold more";
        out.line(format!(
            "Last word with more text: {}",
            &chai_description[13..]
        ));

        let chai_description = "Aromatic and bold";
        let reversed_chai: String = chai_description.chars().rev().collect();
        out.line(format!("Reversed string: {}", reversed_chai));

        out.section("Encoding");
        let label_text = "Chai é special";
        let encoded_label = label_text.as_bytes().to_vec();
        out.line(format!(
            "Encoded label: b\"{}\" ({} bytes for {} chars)",
            encoded_label.escape_ascii(),
            encoded_label.len(),
            label_text.chars().count()
        ));
        let decoded_label = String::from_utf8(encoded_label)?;
        out.line(format!("Decoded label: {}", decoded_label));

        out.section("Negative indexing");
        let chai: Vec<char> = "Masala Chai".chars().collect();
        out.line(format!("Last character: {}", at(&chai, -1)?));
        out.line(format!("Second last: {}", at(&chai, -2)?));
        out.line(format!(
            "Last 4 chars: {}",
            tail(&chai, 4).iter().collect::<String>()
        ));
        match at(&chai, -20) {
            Ok(c) => out.line(format!("chai[-20]: {}", c)),
            Err(e) => out.line(format!("chai[-20] fails: {}", e)),
        }

        out.section("Immutability");
        // `original[0] = 'C'` does not compile: str has no IndexMut
        let original = "Tea";
        let new_string = original.to_owned() + " Time";
        out.line(format!("Original: {}", original));
        out.line(format!("New string: {}", new_string));
        out.line(format!(
            "Separate buffers: {}",
            original.as_ptr() != new_string.as_ptr()
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slicing_and_reversal() {
        let mut out = Transcript::new();
        Strings.run(&mut out).unwrap();

        assert!(out.contains("First word: Aromatic"));
        assert!(out.contains("Every 2nd character: Aoai"));
        assert!(out.contains("Last word: bold"));
        assert!(out.contains("Last word with more text: bold more"));
        assert!(out.contains("Reversed string: dlob dna citamorA"));
    }

    #[test]
    fn test_encoding_round_trip_and_indexing() {
        let mut out = Transcript::new();
        Strings.run(&mut out).unwrap();

        assert!(out.contains(r#"Encoded label: b"Chai \xc3\xa9 special" (15 bytes for 14 chars)"#));
        assert!(out.contains("Decoded label: Chai é special"));
        assert!(out.contains("Last character: i"));
        assert!(out.contains("Second last: a"));
        assert!(out.contains("Last 4 chars: Chai"));
        assert!(out.contains("chai[-20] fails: Index -20 out of range for length 11"));
        assert!(out.contains("Separate buffers: true"));
    }
}
