use std::{fmt, hash::{Hash, Hasher}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value given to [`Number`] was negative, infinite, or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidNumber(pub f64);

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "numbers must be finite and non-negative, got `{}`", self.0)
    }
}

impl std::error::Error for InvalidNumber {}

/// The name given to [`Symbol`] was empty or contained something other than ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSymbol(pub String);

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "symbol names must be non-empty and made of ASCII letters, got `{}`", self.0)
    }
}

impl std::error::Error for InvalidSymbol {}

/// A non-negative numeric constant.
///
/// The value is always finite and never negative. Negative zero is stored as positive zero, so
/// that two numbers that compare equal also hash equally.
///
/// Adding or multiplying numbers saturates at [`f64::MAX`] instead of overflowing to infinity, so
/// a folded constant always renders as a decimal that parses back to the same value.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "f64", into = "f64"))]
pub struct Number(f64);

impl Number {
    /// The number `0`.
    pub const ZERO: Self = Self(0.0);

    /// The number `1`.
    pub const ONE: Self = Self(1.0);

    /// Creates a new number.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative, infinite, or NaN.
    pub fn new(value: f64) -> Self {
        Self::try_from(value).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Returns the value of the number.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the number is exactly `0`.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if the number is exactly `1`.
    pub fn is_one(self) -> bool {
        self.0 == 1.0
    }
}

impl TryFrom<f64> for Number {
    type Error = InvalidNumber;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN fails the comparison; adding zero turns `-0.0` into `0.0`
        if value >= 0.0 && value.is_finite() {
            Ok(Self(value + 0.0))
        } else {
            Err(InvalidNumber(value))
        }
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// NaN is never stored, so equality is reflexive.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl std::ops::Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0).min(f64::MAX))
    }
}

impl std::ops::Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        Self((self.0 * rhs.0).min(f64::MAX))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// A variable, named by a non-empty string of ASCII letters. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "String", into = "String"))]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol.
    ///
    /// # Panics
    ///
    /// Panics if the name is empty or contains anything other than ASCII letters.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::try_from(name).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Returns true if the given string can be used as a symbol name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Returns the name of the symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = InvalidSymbol;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if Self::is_valid_name(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidSymbol(name))
        }
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
