use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A single evaluation result: either a number or a piece of text.
///
/// All arithmetic on values is total. Addition doubles as concatenation as
/// soon as one side is text, with the numeric side rendered in its default
/// decimal form. The remaining operators are only defined on numbers and
/// quietly produce `Number(0.0)` for anything else; this mirrors the
/// behavior expected by existing hosts and is kept on purpose, even though
/// it is asymmetric with addition.
///
/// # Examples
///
/// ```
/// use streval::Value;
///
/// assert_eq!(Value::Number(1.0) + Value::Number(2.0), Value::Number(3.0));
/// assert_eq!(Value::Number(2.0) + Value::from("%"), Value::from("2%"));
/// assert_eq!(Value::from("a") - Value::Number(1.0), Value::Number(0.0));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A floating point number
    Number(f64),
    /// A text value
    Str(String),
}

/// Default decimal rendering of a number, used for coercion and equality
fn number_text(number: f64) -> String {
    format!("{}", number)
}

impl Value {
    /// Get the numeric content, or `None` if this value is text.
    ///
    /// # Examples
    ///
    /// ```
    /// use streval::Value;
    ///
    /// assert_eq!(Value::Number(4.0).as_number(), Some(4.0));
    /// assert_eq!(Value::from("4").as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(number) = *self {
            Some(number)
        } else {
            None
        }
    }

    /// Get the text content, or `None` if this value is a number.
    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(ref text) = *self {
            Some(text)
        } else {
            None
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs + rhs),
            (Value::Number(lhs), Value::Str(rhs)) => Value::Str(number_text(lhs) + &rhs),
            (Value::Str(lhs), Value::Number(rhs)) => Value::Str(lhs + &number_text(rhs)),
            (Value::Str(lhs), Value::Str(rhs)) => Value::Str(lhs + &rhs),
        }
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs - rhs),
            // Subtraction is numbers-only; anything else collapses to zero
            _ => Value::Number(0.0),
        }
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Number(number) => Value::Number(-number),
            Value::Str(_) => Value::Number(0.0),
        }
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs * rhs),
            _ => Value::Number(0.0),
        }
    }
}

impl Div for Value {
    type Output = Value;

    /// Plain IEEE division: dividing by zero yields an infinity or NaN
    fn div(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs / rhs),
            _ => Value::Number(0.0),
        }
    }
}

impl PartialEq for Value {
    /// Coercive equality: a number and a text compare equal when the
    /// number's default decimal form matches the text. Both orderings apply
    /// the same rule, so the comparison stays symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use streval::Value;
    ///
    /// assert_eq!(Value::Number(2.0), Value::from("2"));
    /// assert_eq!(Value::from("2"), Value::Number(2.0));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(lhs), Value::Number(rhs)) => lhs == rhs,
            (Value::Number(lhs), Value::Str(rhs)) => number_text(*lhs) == *rhs,
            (Value::Str(lhs), Value::Number(rhs)) => *lhs == number_text(*rhs),
            (Value::Str(lhs), Value::Str(rhs)) => lhs == rhs,
        }
    }
}

impl Display for Value {
    /// Render the value as text. Numbers honor an explicit precision, which
    /// is the single formatting hook of the language:
    /// `format!("{:.2}", value)` renders a number with two decimals. Text
    /// renders as itself and ignores precision.
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Value::Number(number) => match fmt.precision() {
                Some(precision) => write!(fmt, "{:.*}", precision, number),
                None => write!(fmt, "{}", number),
            },
            Value::Str(ref text) => fmt.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn add() {
        assert_eq!(Value::Number(1.0) + Value::Number(2.5), Value::Number(3.5));
        assert_eq!(Value::Number(2.0) + Value::from("%"), Value::from("2%"));
        assert_eq!(Value::from("x = ") + Value::Number(2.0), Value::from("x = 2"));
        assert_eq!(Value::from("ab") + Value::from("cd"), Value::from("abcd"));
    }

    #[test]
    fn sub() {
        assert_eq!(Value::Number(5.0) - Value::Number(2.0), Value::Number(3.0));
        // non-numeric operands collapse to zero instead of failing
        assert_eq!(Value::from("5") - Value::Number(2.0), Value::Number(0.0));
        assert_eq!(Value::Number(5.0) - Value::from("2"), Value::Number(0.0));
        assert_eq!(Value::from("a") - Value::from("b"), Value::Number(0.0));
    }

    #[test]
    fn neg() {
        assert_eq!(-Value::Number(5.0), Value::Number(-5.0));
        assert_eq!(-Value::from("5"), Value::Number(0.0));
    }

    #[test]
    fn mul_div() {
        assert_eq!(Value::Number(3.0) * Value::Number(4.0), Value::Number(12.0));
        assert_eq!(Value::Number(8.0) / Value::Number(2.0), Value::Number(4.0));
        assert_eq!(Value::from("3") * Value::Number(4.0), Value::Number(0.0));
        assert_eq!(Value::Number(8.0) / Value::from("2"), Value::Number(0.0));
    }

    #[test]
    fn div_by_zero_is_ieee() {
        assert_eq!(
            Value::Number(1.0) / Value::Number(0.0),
            Value::Number(f64::INFINITY)
        );
        let nan = Value::Number(0.0) / Value::Number(0.0);
        assert!(nan.as_number().unwrap().is_nan());
    }

    #[test]
    fn coercive_equality_is_symmetric() {
        assert_eq!(Value::Number(2.0), Value::from("2"));
        assert_eq!(Value::from("2"), Value::Number(2.0));
        assert_eq!(Value::Number(2.5), Value::from("2.5"));
        assert_eq!(Value::from("2.5"), Value::Number(2.5));
        assert_ne!(Value::Number(2.0), Value::from("2.0"));
        assert_ne!(Value::from("2.0"), Value::Number(2.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Value::Number(2.0)), "2");
        assert_eq!(format!("{}", Value::Number(2.5)), "2.5");
        assert_eq!(format!("{}", Value::from("hi")), "hi");
        // precision is the numeric format hook
        assert_eq!(format!("{:.2}", Value::Number(2.0)), "2.00");
        assert_eq!(format!("{:.1}", Value::Number(2.55)), "2.5");
        assert_eq!(format!("{:.3}", Value::from("hi")), "hi");
    }
}
