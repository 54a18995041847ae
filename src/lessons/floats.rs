use crate::domain::model::Transcript;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use num_complex::Complex64;
use num_rational::Ratio;

/// Fixed-point scale for money: four decimal places.
const MONEY_SCALE: i64 = 10_000;

pub struct Floats;

impl Lesson for Floats {
    fn name(&self) -> &str {
        "floats"
    }

    fn title(&self) -> &str {
        "Floating point: decimal precision"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let ideal_temp = 95.5_f64;
        let current_temp = 95.499_999_999_99_f64;
        out.line(format!("Ideal temp is: {}", ideal_temp));
        out.line(format!("Current temperature: {}", current_temp));
        out.line(format!("Difference temperature: {}", ideal_temp - current_temp));

        let current_temp = 95.49_f64;
        out.line("With less precision:");
        out.line(format!("Difference temperature: {}", ideal_temp - current_temp));

        out.section("f64 limits");
        out.line(format!("epsilon: {:e}", f64::EPSILON));
        out.line(format!("max: {:e}", f64::MAX));
        out.line(format!("min positive: {:e}", f64::MIN_POSITIVE));
        out.line(format!("decimal digits: {}", f64::DIGITS));
        out.line(format!("mantissa digits: {}", f64::MANTISSA_DIGITS));

        out.section("Exact alternatives");
        let pizza_slices = Ratio::new(6_i64, 16);
        out.line(format!("Pizza slices (fraction of 6/16): {}", pizza_slices));

        let price = 19 * MONEY_SCALE + 9_900;
        let tax_rate_percent = 8;
        let total_price = price + price * tax_rate_percent / 100;
        out.line(format!("Total price with tax: {}", format_money(total_price)));

        let complex_num = Complex64::new(2.0, 3.0);
        out.line(format!("Complex number: {}", complex_num));

        Ok(())
    }
}

fn format_money(amount: i64) -> String {
    format!(
        "{}.{:04}",
        amount / MONEY_SCALE,
        (amount % MONEY_SCALE).abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        let mut out = Transcript::new();
        Floats.run(&mut out).unwrap();

        assert!(out.contains("Ideal temp is: 95.5"));
        assert!(out.contains("Pizza slices (fraction of 6/16): 3/8"));
        assert!(out.contains("Total price with tax: 21.5892"));
        assert!(out.contains("Complex number: 2+3i"));
        assert!(out.contains("decimal digits: 15"));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(199_900), "19.9900");
        assert_eq!(format_money(215_892), "21.5892");
        assert_eq!(format_money(5), "0.0005");
    }
}
