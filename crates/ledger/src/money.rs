use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::LedgerError;

/// Signed money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the ledger (entry
/// amounts, aggregates, open-item totals) to avoid floating-point
/// drift. Record amounts are non-negative; direction is carried by
/// whether the income or the expense column is populated, never by
/// sign. Aggregates (budget, balance, net totals) are signed.
///
/// # Examples
///
/// ```rust
/// use ledger::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34€");
/// ```
///
/// Parsing from form input (accepts `.` or `,` as decimal separator;
/// rejects more than 2 decimals):
///
/// ```rust
/// use ledger::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
///
/// Sheet cells go through [`MoneyCents::parse_cell`] instead, which
/// never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Lenient parser for raw sheet cells.
    ///
    /// Strips a trailing/leading `€` and whitespace, accepts the
    /// German convention (`.` thousands, `,` decimal) as well as a
    /// plain dot-decimal number, and rounds anything beyond two
    /// fractional digits. Unparseable or empty cells become exactly
    /// zero — the normalizer's fill policy, not an error.
    ///
    /// ```rust
    /// use ledger::MoneyCents;
    ///
    /// assert_eq!(MoneyCents::parse_cell("1.234,56€").cents(), 123456);
    /// assert_eq!(MoneyCents::parse_cell("50.0").cents(), 5000);
    /// assert_eq!(MoneyCents::parse_cell("n/a").cents(), 0);
    /// ```
    #[must_use]
    pub fn parse_cell(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '€')
            .collect();
        if cleaned.is_empty() {
            return Self::ZERO;
        }

        // Amounts in the books are non-negative; a signed cell is as
        // unparseable as any other garbage.
        if cleaned.starts_with('-') || cleaned.starts_with('+') {
            return Self::ZERO;
        }
        let digits = cleaned.as_str();

        // With a comma present the comma is the decimal separator and
        // dots are thousands grouping; otherwise a dot is decimal.
        let normalized = if digits.contains(',') {
            digits.replace('.', "").replacen(',', ".", 1)
        } else {
            digits.to_string()
        };

        let mut parts = normalized.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let frac = parts.next().unwrap_or_default();

        if whole.is_empty() && frac.is_empty() {
            return Self::ZERO;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Self::ZERO;
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            match whole.parse::<i64>() {
                Ok(value) => value,
                Err(_) => return Self::ZERO,
            }
        };

        let mut frac_digits = frac.chars();
        let d1 = frac_digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let d2 = frac_digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
        let round_up = frac_digits
            .next()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d >= 5);

        let cents = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(d1 * 10 + d2))
            .and_then(|v| v.checked_add(i64::from(round_up)));
        match cents {
            Some(cents) => Self(cents),
            None => Self::ZERO,
        }
    }

    /// Formats the amount as a plain two-decimal number (`"1234.56"`),
    /// the representation written back to the sheet and into
    /// generated documents.
    #[must_use]
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}€", self.to_decimal_string())
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl FromStr for MoneyCents {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// This is the strict form-input parser: it accepts `.` or `,` as
    /// decimal separator and an optional leading `+`/`-`, and rejects
    /// empty input, stray characters, and more than 2 fractional
    /// digits. Tolerant sheet-cell parsing lives in
    /// [`MoneyCents::parse_cell`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || LedgerError::Validation("empty amount".to_string());
        let invalid = || LedgerError::Validation("invalid amount".to_string());
        let overflow = || LedgerError::Validation("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let euros_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if euros_str.is_empty() || !euros_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let euros: i64 = euros_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match cents_str {
            None => 0,
            Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(LedgerError::Validation(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = euros
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(MoneyCents(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_eur() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00€");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01€");
        assert_eq!(MoneyCents::new(1050).to_string(), "10.50€");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50€");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("0.001".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn parse_cell_handles_german_notation() {
        assert_eq!(MoneyCents::parse_cell("1.234,56€").cents(), 123456);
        assert_eq!(MoneyCents::parse_cell("1.234,56 €").cents(), 123456);
        assert_eq!(MoneyCents::parse_cell("50,0").cents(), 5000);
    }

    #[test]
    fn parse_cell_handles_plain_decimals() {
        assert_eq!(MoneyCents::parse_cell("50.0").cents(), 5000);
        assert_eq!(MoneyCents::parse_cell("1234.56").cents(), 123456);
        assert_eq!(MoneyCents::parse_cell("7").cents(), 700);
    }

    #[test]
    fn parse_cell_rounds_extra_decimals() {
        assert_eq!(MoneyCents::parse_cell("12.345").cents(), 1235);
        assert_eq!(MoneyCents::parse_cell("12.344").cents(), 1234);
    }

    #[test]
    fn parse_cell_fills_garbage_with_zero() {
        assert_eq!(MoneyCents::parse_cell(""), MoneyCents::ZERO);
        assert_eq!(MoneyCents::parse_cell("   "), MoneyCents::ZERO);
        assert_eq!(MoneyCents::parse_cell("n/a"), MoneyCents::ZERO);
        assert_eq!(MoneyCents::parse_cell("12,3,4"), MoneyCents::ZERO);
    }

    #[test]
    fn parse_cell_rejects_signed_cells() {
        assert_eq!(MoneyCents::parse_cell("-5,00"), MoneyCents::ZERO);
        assert_eq!(MoneyCents::parse_cell("-5,00€"), MoneyCents::ZERO);
        assert_eq!(MoneyCents::parse_cell("+5,00"), MoneyCents::ZERO);
    }
}
