use crate::domain::containers::{discard_member, remove_member};
use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use std::collections::BTreeSet;

pub struct Sets;

impl Lesson for Sets {
    fn name(&self) -> &str {
        "sets"
    }

    fn title(&self) -> &str {
        "Sets: unique members"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        // BTreeSet keeps members sorted so every run prints the same order
        let mut essential_spices = BTreeSet::from(["cardamom", "ginger", "cinnamon"]);
        let optional_spices = BTreeSet::from(["cloves", "ginger", "black pepper"]);
        out.line(format!("Essential spices: {:?}", essential_spices));
        out.line(format!("Optional spices: {:?}", optional_spices));

        out.line(format!("All spices: {:?}", &essential_spices | &optional_spices));
        out.line(format!("Common spices: {:?}", &essential_spices & &optional_spices));
        out.line(format!("Only in essential: {:?}", &essential_spices - &optional_spices));
        out.line(format!(
            "Unique to each (not common): {:?}",
            &essential_spices ^ &optional_spices
        ));

        for (probe, set_name, set) in [
            ("cloves", "essential", &essential_spices),
            ("cloves", "optional", &optional_spices),
            ("ginger", "essential", &essential_spices),
        ] {
            out.line(format!(
                "Is {} in {} spices? {}",
                probe,
                set_name,
                set.contains(probe)
            ));
        }

        out.section("Adding and removing");
        let newly_added = essential_spices.insert("turmeric");
        out.line(format!(
            "After adding turmeric ({}): {:?}",
            newly_added, essential_spices
        ));
        let added_again = essential_spices.insert("turmeric");
        out.line(format!("Adding turmeric again changes the set: {}", added_again));

        remove_member(&mut essential_spices, "turmeric")?;
        out.line(format!("After removing turmeric: {:?}", essential_spices));

        let discarded = discard_member(&mut essential_spices, "saffron");
        out.line(format!(
            "After discarding saffron (removed: {}): {:?}",
            discarded, essential_spices
        ));
        match remove_member(&mut essential_spices, "saffron") {
            Ok(()) => out.line("Removed saffron"),
            Err(e) => out.line(format!("Strict removal of saffron fails: {}", e)),
        }

        let mut test_set = BTreeSet::from(["a", "b", "c"]);
        test_set.clear();
        out.line(format!("Cleared set: {:?}", test_set));

        out.section("Frozen and derived sets");
        // no `mut`, so no insert/remove; the compiler enforces it
        let frozen_spices: BTreeSet<&str> = ["cardamom", "ginger", "cinnamon"].into_iter().collect();
        out.line(format!("Frozen set: {:?}", frozen_spices));

        let numbers_list = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4];
        let unique_numbers: BTreeSet<i32> = numbers_list.iter().copied().collect();
        out.line(format!("Original list: {:?}", numbers_list));
        out.line(format!("Unique numbers: {:?}", unique_numbers));

        let small_set = BTreeSet::from(["ginger", "cardamom"]);
        let large_set = BTreeSet::from(["ginger", "cardamom", "cinnamon", "cloves"]);
        out.line(format!(
            "Is small_set subset of large_set? {}",
            small_set.is_subset(&large_set)
        ));
        out.line(format!(
            "Is large_set superset of small_set? {}",
            large_set.is_superset(&small_set)
        ));
        out.line(format!(
            "Are they disjoint (no common elements)? {}",
            small_set.is_disjoint(&large_set)
        ));

        Ok(())
    }
}
