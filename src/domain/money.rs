//! Price type and rounding modes
//!
//! Postage costs are exact decimals. Rounding happens once, at currency
//! precision, using one of the four midpoint modes supported by the
//! configuration surface.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The only settlement currency the carrier deals in.
pub const AUD: &str = "AUD";

/// Fraction digits for AUD.
const CURRENCY_SCALE: u32 = 2;

/// How midpoint values are resolved when rounding a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    HalfUp,
    /// Round half toward zero.
    HalfDown,
    /// Round half to the even neighbour (IEEE 754 round-half-to-even).
    HalfEven,
    /// Round half to the odd neighbour.
    HalfOdd,
}

/// A monetary amount in a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    amount: Decimal,
    currency_code: String,
}

impl Price {
    pub fn new(amount: Decimal, currency_code: &str) -> Self {
        Self {
            amount,
            currency_code: currency_code.to_string(),
        }
    }

    pub fn zero(currency_code: &str) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Adds another price of the same currency.
    pub fn add(&self, other: &Price) -> Price {
        debug_assert_eq!(self.currency_code, other.currency_code);
        Price::new(self.amount + other.amount, &self.currency_code)
    }

    pub fn multiply(&self, factor: Decimal) -> Price {
        Price::new(self.amount * factor, &self.currency_code)
    }

    pub fn greater_than(&self, other: &Price) -> bool {
        debug_assert_eq!(self.currency_code, other.currency_code);
        self.amount > other.amount
    }

    /// Rounds to currency precision with the given mode.
    pub fn round(&self, mode: RoundingMode) -> Price {
        Price::new(
            round_decimal(self.amount, CURRENCY_SCALE, mode),
            &self.currency_code,
        )
    }

    /// The amount rounded up to the next whole currency unit.
    pub fn ceil_whole(&self) -> u64 {
        self.amount.ceil().to_u64().unwrap_or(0)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.amount.round_dp(CURRENCY_SCALE),
            self.currency_code
        )
    }
}

/// Rounds a decimal to `scale` fraction digits with the given midpoint mode.
pub fn round_decimal(value: Decimal, scale: u32, mode: RoundingMode) -> Decimal {
    match mode {
        RoundingMode::HalfUp => {
            value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingMode::HalfDown => {
            value.round_dp_with_strategy(scale, RoundingStrategy::MidpointTowardZero)
        }
        RoundingMode::HalfEven => {
            value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
        }
        RoundingMode::HalfOdd => round_half_odd(value, scale),
    }
}

/// No library strategy covers half-odd, so it is computed exactly: scale the
/// value, split off the fraction, and resolve an exact midpoint to whichever
/// neighbour is odd.
fn round_half_odd(value: Decimal, scale: u32) -> Decimal {
    let shift = Decimal::from(10u64.pow(scale));
    let scaled = value * shift;
    let floor = scaled.floor();
    let fraction = scaled - floor;
    let half = Decimal::new(5, 1);

    let rounded = if fraction > half {
        floor + Decimal::ONE
    } else if fraction < half {
        floor
    } else if (floor % Decimal::TWO).is_zero() {
        floor + Decimal::ONE
    } else {
        floor
    };

    rounded / shift
}
