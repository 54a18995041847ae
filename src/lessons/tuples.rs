use crate::domain::containers::{at, lookup, tail};
use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use indexmap::IndexMap;
use std::any::type_name;
use std::mem::size_of_val;

/// Latitude/longitude in ten-thousandths of a degree, so it can be a map key.
type Coordinates = (i32, i32);

pub struct Tuples;

impl Lesson for Tuples {
    fn name(&self) -> &str {
        "tuples"
    }

    fn title(&self) -> &str {
        "Tuples: fixed-size ordered values"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let masala_spices = ("cardamom", "clove", "cinnamon");
        out.line(format!("Main masala spices: {:?}", masala_spices));

        let (spice_one, spice_two, spice_three) = masala_spices;
        out.line(format!("Spice 1: {}", spice_one));
        out.line(format!("Spice 2: {}", spice_two));
        out.line(format!("Spice 3: {}", spice_three));

        out.section("Swapping");
        let (mut ginger_ratio, mut cardamom_ratio) = (2, 1);
        out.line(format!(
            "Ratio is for ginger: {} and cardamom: {}",
            ginger_ratio, cardamom_ratio
        ));
        (ginger_ratio, cardamom_ratio) = (cardamom_ratio, ginger_ratio);
        out.line(format!(
            "Ratio after swap - ginger: {} and cardamom: {}",
            ginger_ratio, cardamom_ratio
        ));

        out.section("Membership");
        // tuples are not iterable; an array of the same values is
        let spice_list = [spice_one, spice_two, spice_three];
        for probe in ["ginger", "cinnamon", "Cinnamon"] {
            out.line(format!(
                "Is {:?} in masala_spices? {}",
                probe,
                spice_list.contains(&probe)
            ));
        }

        out.section("One-element tuples");
        let single_spice = ("cardamom",);
        let not_a_tuple = "cardamom";
        out.line(format!("Single spice type: {}", type_name_of(&single_spice)));
        out.line(format!("Not a tuple type: {}", type_name_of(&not_a_tuple)));

        out.section("Indexing and slicing");
        let spices = ["cardamom", "clove", "cinnamon", "black pepper", "bay leaf"];
        out.line(format!("First spice: {}", spices[0]));
        out.line(format!("Last spice: {}", at(&spices, -1)?));
        out.line(format!("First three: {:?}", &spices[..3]));
        out.line(format!("Last two: {:?}", tail(&spices, 2)));

        out.section("Packing and rest patterns");
        let ingredients = ("tea", "milk", "sugar", "water");
        out.line(format!("Packed ingredients: {:?}", ingredients));
        let ingredient_list = [ingredients.0, ingredients.1, ingredients.2, ingredients.3];
        if let [main_ingredient, others @ ..] = ingredient_list.as_slice() {
            out.line(format!("Main: {}", main_ingredient));
            out.line(format!("Others: {:?}", others));
        }

        out.section("Counting");
        let numbers = [1, 2, 3, 2, 4, 2, 5];
        out.line(format!(
            "Count of 2: {}",
            numbers.iter().filter(|&&n| n == 2).count()
        ));
        out.line(format!(
            "First index of 2: {:?}",
            numbers.iter().position(|&n| n == 2)
        ));

        out.section("Why fixed-size");
        let my_list: Vec<i32> = vec![1, 2, 3, 4, 5];
        let my_tuple: (i32, i32, i32, i32, i32) = (1, 2, 3, 4, 5);
        out.line(format!(
            "Vec handle size: {} bytes (+{} bytes on the heap)",
            size_of_val(&my_list),
            size_of_val(my_list.as_slice())
        ));
        out.line(format!("Tuple size: {} bytes", size_of_val(&my_tuple)));

        let location_data: IndexMap<Coordinates, &str> = [
            ((286_139, 772_090), "Delhi"),
            ((190_760, 728_777), "Mumbai"),
        ]
        .into_iter()
        .collect();
        let delhi: Coordinates = (286_139, 772_090);
        out.line(format!(
            "Location lookup: {}",
            location_data.get(&delhi).copied().unwrap_or("unknown")
        ));
        let names: IndexMap<&str, Coordinates> =
            location_data.iter().map(|(k, v)| (*v, *k)).collect();
        out.line(format!("Mumbai is at: {:?}", lookup(&names, "Mumbai")?));

        Ok(())
    }
}

fn type_name_of<T>(_: &T) -> &'static str {
    type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Transcript {
        let mut out = Transcript::new();
        Tuples.run(&mut out).unwrap();
        out
    }

    #[test]
    fn test_destructuring_and_swap() {
        let out = transcript();
        assert!(out.contains(r#"Main masala spices: ("cardamom", "clove", "cinnamon")"#));
        assert!(out.contains("Spice 3: cinnamon"));
        assert!(out.contains("Ratio after swap - ginger: 1 and cardamom: 2"));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let out = transcript();
        assert!(out.contains(r#"Is "ginger" in masala_spices? false"#));
        assert!(out.contains(r#"Is "cinnamon" in masala_spices? true"#));
        assert!(out.contains(r#"Is "Cinnamon" in masala_spices? false"#));
    }

    #[test]
    fn test_slices_counts_and_keys() {
        let out = transcript();
        assert!(out.contains("Single spice type: (&str,)"));
        assert!(out.contains("Not a tuple type: &str"));
        assert!(out.contains("Last spice: bay leaf"));
        assert!(out.contains(r#"Last two: ["black pepper", "bay leaf"]"#));
        assert!(out.contains(r#"Others: ["milk", "sugar", "water"]"#));
        assert!(out.contains("Count of 2: 3"));
        assert!(out.contains("First index of 2: Some(1)"));
        assert!(out.contains("Tuple size: 20 bytes"));
        assert!(out.contains("Location lookup: Delhi"));
        assert!(out.contains("Mumbai is at: (190760, 728777)"));
    }
}
