use std::collections::HashMap;

use crate::context::Context;
use crate::value::Value;

lazy_static! {
    /// The one-argument `f64` functions exposed by [`MathContext`]
    pub static ref FUNCTIONS: HashMap<String, fn(f64) -> f64> = {
        let mut map = HashMap::<String, fn(f64) -> f64>::new();
        map.insert("sqrt".into(), f64::sqrt);
        map.insert("cbrt".into(), f64::cbrt);
        map.insert("sin".into(), f64::sin);
        map.insert("cos".into(), f64::cos);
        map.insert("tan".into(), f64::tan);
        map.insert("asin".into(), f64::asin);
        map.insert("acos".into(), f64::acos);
        map.insert("atan".into(), f64::atan);
        map.insert("sinh".into(), f64::sinh);
        map.insert("cosh".into(), f64::cosh);
        map.insert("tanh".into(), f64::tanh);
        map.insert("floor".into(), f64::floor);
        map.insert("ceil".into(), f64::ceil);
        map.insert("abs".into(), f64::abs);
        map.insert("exp".into(), f64::exp);
        map.insert("ln".into(), f64::ln);
        map.insert("log2".into(), f64::log2);
        map.insert("log10".into(), f64::log10);
        map.shrink_to_fit();
        map
    };
}

/// A ready-made [`Context`] with the usual `f64` math functions, the
/// constants `pi` and `e`, and user-defined variables.
///
/// # Examples
///
/// ```
/// use streval::{eval_with, MathContext, Value};
///
/// let mut context = MathContext::new();
/// context.set("a", 5.0);
/// assert_eq!(eval_with("sqrt(a * a)", &context), Ok(Value::Number(5.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathContext {
    vars: HashMap<String, Value>,
}

impl MathContext {
    /// Create a context with no user variables
    pub fn new() -> MathContext {
        MathContext::default()
    }

    /// Define or overwrite a variable
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl Context for MathContext {
    fn get_var(&self, name: &str) -> Value {
        if let Some(value) = self.vars.get(name) {
            return value.clone();
        }
        match name {
            "pi" => Value::Number(std::f64::consts::PI),
            "e" => Value::Number(std::f64::consts::E),
            _ => Value::Number(0.0),
        }
    }

    fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, String> {
        let function = FUNCTIONS
            .get(name)
            .ok_or_else(|| format!("unknown function '{}'", name))?;
        match args.as_slice() {
            [arg] => {
                let arg = arg
                    .as_number()
                    .ok_or_else(|| format!("'{}' expects a number", name))?;
                Ok(Value::Number(function(arg)))
            }
            _ => Err(format!("'{}' takes one argument, got {}", name, args.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MathContext;
    use crate::context::Context;
    use crate::value::Value;

    #[test]
    fn variables_and_constants() {
        let mut context = MathContext::new();
        context.set("a", 2.5);
        context.set("label", "total");

        assert_eq!(context.get_var("a"), Value::Number(2.5));
        assert_eq!(context.get_var("label"), Value::from("total"));
        assert_eq!(context.get_var("pi"), Value::Number(std::f64::consts::PI));
        assert_eq!(context.get_var("nope"), Value::Number(0.0));
    }

    #[test]
    fn calls() {
        let context = MathContext::new();
        assert_eq!(
            context.call("sqrt", vec![Value::Number(9.0)]),
            Ok(Value::Number(3.0))
        );
        assert!(context.call("nope", vec![Value::Number(1.0)]).is_err());
        assert!(context.call("sqrt", vec![]).is_err());
        assert!(context.call("sqrt", vec![Value::from("9")]).is_err());
    }
}
