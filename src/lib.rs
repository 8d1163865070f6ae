#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Streval, a crate for single-pass evaluation of expressions that mix
//! numbers and strings.
//!
//! An expression is tokenized and evaluated in one pass over the input,
//! with no syntax tree in between: an operator stack and an operand stack
//! resolve precedence and parenthesis scoping while tokens are still being
//! scanned. The result is a single [`Value`], either a number or a string.
//! The easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! use streval::{eval, Value};
//!
//! assert_eq!(eval("1 + 2 * 3"), Ok(Value::Number(7.0)));
//! assert_eq!(eval("2 + \"%\""), Ok(Value::from("2%")));
//! ```
//!
//! Variables and function calls are resolved by the host application
//! through the [`Context`](trait.Context.html) trait:
//!
//! ```
//! use streval::{eval_with, Context, Value};
//!
//! struct Host;
//!
//! impl Context for Host {
//!     fn get_var(&self, name: &str) -> Value {
//!         match name {
//!             "price" => Value::Number(40.0),
//!             other => Value::from(other),
//!         }
//!     }
//!
//!     fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, String> {
//!         match name {
//!             "double" => Ok(args[0].clone() + args[0].clone()),
//!             other => Err(format!("unknown function '{}'", other)),
//!         }
//!     }
//! }
//!
//! assert_eq!(eval_with("double(price) + 5", &Host), Ok(Value::Number(85.0)));
//! ```
//!
//! Without a context, identifiers evaluate to `Number(0.0)` and function
//! calls fail. A ready-made [`MathContext`](struct.MathContext.html) with
//! the usual `f64` math functions is included.
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - decimal float literals: `12`, `0.5`, `.5`;
//! - double-quoted string literals, without escape sequences: `"8%"`;
//! - left and right parenthesis, for grouping and for call argument lists;
//! - the operators `+`, `-`, `*` and `/`, with the usual precedence and
//!   left associativity, plus unary `-`. A `-` after a number or
//!   identifier subtracts; otherwise a one-token lookahead decides whether
//!   it negates;
//! - variables. Names are ASCII, start with a letter, `_` or `$`, and
//!   continue with letters, digits, `_` or `$`;
//! - function calls with comma-separated arguments: `add(a, 2 * b)`.
//!
//! Adding a number to a string concatenates, rendering the number in its
//! default decimal form. Subtraction, negation, multiplication and
//! division are defined on numbers only and produce `0` for anything
//! else. Division follows IEEE rules, so infinities and NaN propagate.
//! Any other symbol is forbidden in the input, and a failure reports the
//! character offset at which evaluation stopped.
//!
//! # Technical details
//!
//! Streval is a shunting-yard variant that reduces eagerly instead of
//! emitting output: whenever a new operator binds no tighter than the one
//! on top of the operator stack, the top one is applied to the operand
//! stack immediately. Function arguments recurse into the same loop with
//! a raised stack border so each argument owns its scope. An evaluator
//! instance is single-use; evaluating consumes it.

#[macro_use]
extern crate lazy_static;

mod context;
mod error;
mod eval;
mod lexer;
mod token;
mod util;
mod value;

pub use context::Context;
pub use error::{EvalError, InvalidExpression};
pub use eval::{eval, eval_with, Evaluator};
pub use util::MathContext;
pub use value::Value;
