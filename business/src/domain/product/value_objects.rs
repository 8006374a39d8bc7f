use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

/// Opaque identifier of a product record.
///
/// New ids are UUID v4 strings, but any non-empty token read back from storage
/// is accepted so lists written by older clients keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a ProductId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The four user-editable fields of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Brand,
    Quantity,
    Price,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Brand => write!(f, "brand"),
            FormField::Quantity => write!(f, "quantity"),
            FormField::Price => write!(f, "price"),
        }
    }
}

/// Longest numeric input accepted, sign and decimal point included.
const MAX_NUMBER_LEN: usize = 64;

/// Plain positional notation only: optional sign, digits, optional fraction.
/// Exponents are refused so rounding can never expand a short input into an
/// enormous digit string. Returns the input in canonical `[-]units.fraction` form.
fn plain_decimal(s: &str) -> Option<String> {
    if s.len() > MAX_NUMBER_LEN {
        return None;
    }
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (units.is_empty() && fraction.is_empty()) || !all_digits(units) || !all_digits(fraction) {
        return None;
    }

    let units = if units.is_empty() { "0" } else { units };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    Some(format!("{sign}{units}.{fraction}"))
}

/// Parses trimmed user input as a non-negative decimal.
fn parse_non_negative(input: &str, field: FormField) -> Result<BigDecimal, ProductError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProductError::FieldEmpty(field));
    }
    let canonical = plain_decimal(trimmed).ok_or(ProductError::InvalidNumber(field))?;

    let value = BigDecimal::from_str(&canonical).map_err(|_| ProductError::InvalidNumber(field))?;
    if value < BigDecimal::zero() {
        return Err(ProductError::NegativeNumber(field));
    }

    Ok(value)
}

/// Number of units in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = ProductError;

    /// Fractional input is truncated toward zero ("2.7" is 2).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_non_negative(s, FormField::Quantity)?;
        value
            .with_scale_round(0, RoundingMode::Down)
            .to_u64()
            .map(Self)
            .ok_or(ProductError::InvalidNumber(FormField::Quantity))
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

const PRICE_SCALE: i64 = 2;

/// Non-negative unit price, always held with exactly two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(BigDecimal);

impl Price {
    /// Rounds half-up to cents. Negative amounts are rejected.
    pub fn new(amount: BigDecimal) -> Result<Self, ProductError> {
        if amount < BigDecimal::zero() {
            return Err(ProductError::NegativeNumber(FormField::Price));
        }
        Ok(Self(amount.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp)))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    /// Plain two-digit rendering, e.g. "2.50". Never switches to exponent notation.
    pub fn formatted(&self) -> String {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        let digits = digits.to_string();
        let scale = scale.max(0) as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (units, cents) = padded.split_at(padded.len() - scale);
        format!("{}.{}", units, cents)
    }
}

impl FromStr for Price {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_non_negative(s, FormField::Price)?)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
