use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;

pub struct Integers;

impl Lesson for Integers {
    fn name(&self) -> &str {
        "integers"
    }

    fn title(&self) -> &str {
        "Integers: whole numbers"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let black_tea_grams = 14;
        let ginger_grams = 3;
        out.line(format!(
            "Total grams of base tea is: {}",
            black_tea_grams + ginger_grams
        ));
        out.line(format!(
            "Total grams of remaining tea is: {}",
            black_tea_grams - ginger_grams
        ));

        // `/` on integers truncates; widen first for a fractional answer
        let milk_liters: i32 = 7;
        let servings: i32 = 4;
        out.line(format!(
            "Milk per serving is: {}",
            f64::from(milk_liters) / f64::from(servings)
        ));

        let total_teabags: i32 = 7;
        let pots = 4;
        out.line(format!(
            "Whole tea bags per pot: {}",
            total_teabags.div_euclid(pots)
        ));

        let total_cardamom_pods = 10;
        let pods_per_cup = 3;
        out.line(format!(
            "Leftover cardamom pods: {}",
            total_cardamom_pods % pods_per_cup
        ));

        let base_flavor_strength: i32 = 2;
        let scale_factor = 3;
        out.line(format!(
            "Scaled flavor strength is: {}",
            base_flavor_strength.pow(scale_factor)
        ));

        let total_tea_leaves_harvested: u64 = 1_000_000_000;
        out.line(format!(
            "Total tea leaves harvested: {}",
            total_tea_leaves_harvested
        ));

        out.section("Overflow");
        out.line(format!("i32::MAX is: {}", i32::MAX));
        out.line(format!("i32::MAX checked + 1: {:?}", i32::MAX.checked_add(1)));
        out.line(format!("i32::MAX wrapping + 1: {}", i32::MAX.wrapping_add(1)));

        Ok(())
    }
}
