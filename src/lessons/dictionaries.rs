use crate::domain::containers::{discard_key, lookup, merge_into, merge_right, remove_key};
use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Insertion-ordered mapping with mixed value types.
type Mapping = IndexMap<&'static str, Value>;

pub struct Dictionaries;

impl Lesson for Dictionaries {
    fn name(&self) -> &str {
        "dictionaries"
    }

    fn title(&self) -> &str {
        "Dictionaries: key-value pairs"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let chai_order = Mapping::from([
            ("type", json!("masala chai")),
            ("size", json!("large")),
            ("sugar", json!(2)),
        ]);
        out.line(format!("Chai order: {}", render(&chai_order)?));

        let mut chai_recipe = Mapping::new();
        chai_recipe.insert("base", json!("black tea"));
        chai_recipe.insert("liquid", json!("milk"));
        out.line(format!("Recipe base: {}", bare(lookup(&chai_recipe, "base")?)));
        out.line(format!("Recipe: {}", render(&chai_recipe)?));

        remove_key(&mut chai_recipe, "liquid")?;
        out.line(format!("After deletion: {}", render(&chai_recipe)?));
        out.line(format!(
            "Discarding liquid again returns: {:?}",
            discard_key(&mut chai_recipe, "liquid")
        ));
        if let Err(e) = remove_key(&mut chai_recipe, "liquid") {
            out.line(format!("Deleting liquid again fails: {}", e));
        }

        out.line(format!(
            "Is sugar in order? {}",
            chai_order.contains_key("sugar")
        ));

        out.section("Keys, values, and items");
        let mut chai_order = Mapping::from([
            ("type", json!("ginger chai")),
            ("size", json!("medium")),
            ("sugar", json!(1)),
        ]);
        out.line(format!(
            "Order details (keys): {:?}",
            chai_order.keys().collect::<Vec<_>>()
        ));
        out.line(format!(
            "Order details (values): {}",
            render(&chai_order.values().collect::<Vec<_>>())?
        ));
        out.line(format!(
            "Order details (items): {}",
            render(&chai_order.iter().collect::<Vec<_>>())?
        ));

        out.section("Pop last item");
        if let Some((key, value)) = chai_order.pop() {
            out.line(format!("Removed last item: ({:?}, {})", key, value));
        }
        out.line(format!("After pop: {}", render(&chai_order)?));

        out.section("Update");
        let mut chai_recipe = Mapping::from([("base", json!("black tea"))]);
        let spices = Mapping::from([("cardamom", json!("crushed")), ("ginger", json!("sliced"))]);
        merge_into(&mut chai_recipe, spices);
        out.line(format!("Updated chai recipe: {}", render(&chai_recipe)?));

        out.section("Safe access");
        let mut chai_order = Mapping::from([
            ("type", json!("ginger chai")),
            ("size", json!("medium")),
            ("sugar", json!(1)),
        ]);
        out.line(format!("Chai size: {}", bare(lookup(&chai_order, "size")?)));
        match lookup(&chai_order, "customer_note") {
            Ok(note) => out.line(format!("Customer note: {}", bare(note))),
            Err(e) => out.line(format!("Strict lookup of customer_note fails: {}", e)),
        }
        let customer_note = chai_order
            .get("customer_note")
            .and_then(Value::as_str)
            .unwrap_or("No note was given by the customer");
        out.line(format!("Customer note: {}", customer_note));
        let size_safe = chai_order
            .get("size")
            .and_then(Value::as_str)
            .unwrap_or("default");
        out.line(format!("Size (with default): {}", size_safe));

        out.section("Nested dictionaries");
        let tea_shop = json!({
            "chai": {
                "Masala": {"price": 30, "available": true},
                "Ginger": {"price": 25, "available": true},
                "Plain": {"price": 20, "available": false}
            },
            "location": "Mumbai",
            "rating": 4.5
        });
        out.line(format!("Tea shop: {}", tea_shop));
        out.line(format!(
            "Masala chai price: {}",
            tea_shop["chai"]["Masala"]["price"]
        ));
        out.line(format!("Shop rating: {}", tea_shop["rating"]));
        // `Value` indexing is lenient: a missing path yields null
        out.line(format!(
            "Chamomile chai price: {}",
            tea_shop["chai"]["Chamomile"]["price"]
        ));

        out.section("Looping");
        out.line("Types of chai:");
        for chai_type in chai_order.keys() {
            out.line(format!("  - {}", chai_type));
        }
        out.line("Order values:");
        for value in chai_order.values() {
            out.line(format!("  - {}", value));
        }
        out.line("Complete order:");
        for (key, value) in &chai_order {
            out.line(format!("  {}: {}", key, value));
        }

        out.section("More methods");
        chai_order
            .entry("customer_name")
            .or_insert_with(|| json!("Anonymous"));
        chai_order.entry("size").or_insert_with(|| json!("small"));
        out.line(format!("After set-default: {}", render(&chai_order)?));

        let order_copy = chai_order.clone();
        out.line(format!("Order copy: {}", render(&order_copy)?));

        let mut test_dict = IndexMap::from([("a", 1), ("b", 2)]);
        test_dict.clear();
        out.line(format!("Cleared dictionary: {:?}", test_dict));

        let keys = ["Masala", "Ginger", "Green"];
        let default_stock: IndexMap<&str, i32> = keys.iter().map(|&k| (k, 10)).collect();
        out.line(format!("Default stock: {:?}", default_stock));

        out.section("Built from iterators");
        let squared_numbers: IndexMap<i32, i32> = (1..=5).map(|x| (x, x * x)).collect();
        out.line(format!("Squared numbers: {:?}", squared_numbers));

        let prices = IndexMap::from([("Masala", 30), ("Ginger", 25), ("Green", 20), ("Black", 15)]);
        let affordable: IndexMap<&str, i32> = prices
            .iter()
            .filter(|(_, price)| **price <= 25)
            .map(|(&name, &price)| (name, price))
            .collect();
        out.line(format!("Affordable chai (<=25): {:?}", affordable));

        out.section("Union");
        let mut default_order = Mapping::from([("type", json!("plain")), ("size", json!("medium"))]);
        let custom_order = Mapping::from([("size", json!("large")), ("sugar", json!(2))]);
        let final_order = merge_right(&default_order, &custom_order);
        out.line(format!("Merged order: {}", render(&final_order)?));

        merge_into(&mut default_order, Mapping::from([("extra", json!("milk"))]));
        out.line(format!("Updated in place: {}", render(&default_order)?));

        Ok(())
    }
}

/// Strings without their JSON quotes; other values as JSON.
fn bare(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
