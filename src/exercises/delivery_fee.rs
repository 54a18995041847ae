use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{validate_non_negative, Validate};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter the order amount: ";

/// Orders strictly above `free_above` ship free; everything else pays
/// `flat_fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryFeePolicy {
    pub free_above: i64,
    pub flat_fee: i64,
}

impl Default for DeliveryFeePolicy {
    fn default() -> Self {
        Self {
            free_above: 300,
            flat_fee: 30,
        }
    }
}

impl DeliveryFeePolicy {
    pub fn fee_for(&self, order_amount: i64) -> i64 {
        if order_amount > self.free_above {
            0
        } else {
            self.flat_fee
        }
    }
}

impl Validate for DeliveryFeePolicy {
    fn validate(&self) -> Result<()> {
        validate_non_negative("delivery.free_above", self.free_above)?;
        validate_non_negative("delivery.flat_fee", self.flat_fee)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryQuote {
    pub order_amount: i64,
    pub fee: i64,
}

pub fn parse_order_amount(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| LessonError::ParseError {
            field: "order amount".to_string(),
            input: trimmed.to_string(),
            reason: e.to_string(),
        })
}

/// Prompts on `out` and reads a single line from `input`.
pub fn read_order_amount<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i64> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LessonError::ParseError {
            field: "order amount".to_string(),
            input: String::new(),
            reason: "no input before end of stream".to_string(),
        });
    }
    parse_order_amount(&line)
}

/// Takes the amount from `amount` when given, otherwise from `input`.
/// Nothing but the prompt is written if the amount does not parse.
pub fn run_delivery_fee<R: BufRead, W: Write>(
    policy: &DeliveryFeePolicy,
    amount: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<DeliveryQuote> {
    let order_amount = match amount {
        Some(raw) => parse_order_amount(raw)?,
        None => read_order_amount(input, out)?,
    };

    let fee = policy.fee_for(order_amount);
    tracing::debug!(order_amount, fee, "Delivery fee decided");

    writeln!(out, "Order amount is: {} (type: i64)", order_amount)?;
    writeln!(out, "Delivery fees is: {}", fee)?;

    Ok(DeliveryQuote { order_amount, fee })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fee_boundaries() {
        let policy = DeliveryFeePolicy::default();
        assert_eq!(policy.fee_for(301), 0);
        assert_eq!(policy.fee_for(300), 30);
        assert_eq!(policy.fee_for(-5), 30);
        assert_eq!(policy.fee_for(0), 30);
    }

    #[test]
    fn test_parse_order_amount() {
        assert_eq!(parse_order_amount(" 450\n").unwrap(), 450);
        assert_eq!(parse_order_amount("-5").unwrap(), -5);

        let err = parse_order_amount("abc").unwrap_err();
        assert!(matches!(err, LessonError::ParseError { ref input, .. } if input == "abc"));
        assert!(parse_order_amount("").is_err());
        assert!(parse_order_amount("12.5").is_err());
    }

    #[test]
    fn test_run_reads_stdin_and_prints_fee() {
        let mut input = Cursor::new("301\n");
        let mut out = Vec::new();

        let quote =
            run_delivery_fee(&DeliveryFeePolicy::default(), None, &mut input, &mut out).unwrap();

        assert_eq!(quote, DeliveryQuote { order_amount: 301, fee: 0 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter the order amount: Order amount is: 301 (type: i64)\nDelivery fees is: 0\n"
        );
    }

    #[test]
    fn test_run_with_amount_skips_prompt() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let quote = run_delivery_fee(
            &DeliveryFeePolicy::default(),
            Some("300"),
            &mut input,
            &mut out,
        )
        .unwrap();

        assert_eq!(quote.fee, 30);
        assert!(!String::from_utf8(out).unwrap().contains(PROMPT));
    }

    #[test]
    fn test_invalid_input_prints_no_fee() {
        let mut input = Cursor::new("abc\n");
        let mut out = Vec::new();

        let result = run_delivery_fee(&DeliveryFeePolicy::default(), None, &mut input, &mut out);

        assert!(result.is_err());
        assert!(!String::from_utf8(out).unwrap().contains("Delivery fees"));
    }

    #[test]
    fn test_empty_stdin_is_an_error() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(read_order_amount(&mut input, &mut out).is_err());
    }

    #[test]
    fn test_policy_validation() {
        assert!(DeliveryFeePolicy::default().validate().is_ok());
        let bad = DeliveryFeePolicy {
            free_above: 300,
            flat_fee: -1,
        };
        assert!(bad.validate().is_err());
    }
}
