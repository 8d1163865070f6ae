use log::trace;

use crate::context::Context;
use crate::error::{EvalError, InvalidExpression};
use crate::lexer::{scan_token, Scan};
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Evaluate a single expression from `input`, with no context.
///
/// Bare identifiers resolve to `Number(0.0)` and function calls fail; use
/// [`eval_with`] to supply a [`Context`].
///
/// # Examples
///
/// ```
/// use streval::{eval, Value};
///
/// assert_eq!(eval("1 + 2 * 3"), Ok(Value::Number(7.0)));
/// assert_eq!(eval("2 + \"%\""), Ok(Value::from("2%")));
/// assert!(eval("?123").is_err());
/// ```
pub fn eval(input: &str) -> Result<Value, InvalidExpression> {
    Evaluator::new(input).eval()
}

/// Evaluate a single expression from `input` against `context`.
///
/// # Examples
///
/// ```
/// use streval::{eval_with, MathContext, Value};
///
/// let mut context = MathContext::new();
/// context.set("a", 3.0);
/// assert_eq!(eval_with("-a * 2", &context), Ok(Value::Number(-6.0)));
/// ```
pub fn eval_with(input: &str, context: &dyn Context) -> Result<Value, InvalidExpression> {
    Evaluator::new(input).eval_with(context)
}

/// Pending operator on the operator stack
#[derive(Debug, Clone, PartialEq)]
enum Operator {
    Add,
    Subtract,
    Negate,
    Multiply,
    Divide,
    /// A function call, pushed after its arguments have been collected
    Call {
        name: String,
        argc: usize,
    },
    /// Scope wall pushed for `(`; the priority rule never reduces past it
    LParen,
}

impl Operator {
    /// Binding strength: lower binds tighter
    fn precedence(&self) -> u8 {
        match *self {
            Operator::Call { .. } => 1,
            Operator::Negate => 2,
            Operator::Multiply | Operator::Divide => 4,
            Operator::Add | Operator::Subtract => 5,
            Operator::LParen => 100,
        }
    }
}

/// Single-use evaluator for one expression string.
///
/// Tokenization and reduction are interleaved: tokens are scanned on
/// demand and higher-precedence pending operators are applied immediately,
/// so no syntax tree is ever built. The evaluator owns mutable cursor and
/// stack state for exactly one evaluation, which is why [`Evaluator::eval`]
/// and [`Evaluator::eval_with`] consume `self`; create a fresh instance per
/// expression.
///
/// # Examples
///
/// ```
/// use streval::{Evaluator, Value};
///
/// let result = Evaluator::new("1 * (2 + 3)").eval();
/// assert_eq!(result, Ok(Value::Number(5.0)));
/// ```
pub struct Evaluator {
    expr: String,
    src: Vec<char>,
    cursor: usize,
    operators: Vec<Operator>,
    operands: Vec<Value>,
    last: Option<TokenKind>,
}

impl Evaluator {
    /// Create an evaluator over `expr`. Nothing is scanned until
    /// evaluation is requested.
    pub fn new(expr: &str) -> Evaluator {
        Evaluator {
            expr: expr.to_owned(),
            src: expr.chars().collect(),
            cursor: 0,
            operators: Vec::new(),
            operands: Vec::new(),
            last: None,
        }
    }

    /// Evaluate without a context: identifiers resolve to `Number(0.0)`
    /// and any function call fails.
    pub fn eval(self) -> Result<Value, InvalidExpression> {
        self.run(None)
    }

    /// Evaluate against `context`, which resolves variables and dispatches
    /// function calls.
    pub fn eval_with(self, context: &dyn Context) -> Result<Value, InvalidExpression> {
        self.run(Some(context))
    }

    fn run(mut self, context: Option<&dyn Context>) -> Result<Value, InvalidExpression> {
        trace!("evaluating {:?}", self.expr);
        match self.eval_until(0, context) {
            Ok(value) => Ok(value),
            // Every internal fault surfaces here once, tagged with the
            // cursor position at the time of failure
            Err(source) => Err(InvalidExpression {
                expression: self.expr,
                position: self.cursor,
                source,
            }),
        }
    }

    /// The scan-and-reduce loop. `border` is the operator stack depth this
    /// scope owns; nested argument evaluations run the same loop with a
    /// raised border so their parenthesis and operator scopes stay
    /// isolated. Returns the single value this scope reduces to.
    fn eval_until(
        &mut self,
        border: usize,
        context: Option<&dyn Context>,
    ) -> Result<Value, EvalError> {
        loop {
            if self.cursor >= self.src.len() {
                break;
            }

            let Scan { token, len } = scan_token(&self.src, self.cursor);
            trace!("token {:?} at offset {}", token, self.cursor);
            let kind = token.kind();

            match token {
                Token::Invalid => return Err(EvalError::UnknownToken),
                Token::End => break,
                Token::Identifier(name) => {
                    if self.last == Some(TokenKind::Identifier) {
                        return Err(EvalError::AdjacentIdentifiers);
                    }

                    let ahead = scan_token(&self.src, self.cursor + len);
                    if ahead.token == Token::LParen {
                        // A call: collect the arguments now, resolve the
                        // call itself later during reduction
                        self.cursor += len + ahead.len;
                        let argc = self.eval_arguments(border, context)?;
                        self.operators.push(Operator::Call { name, argc });
                    } else {
                        let value = match context {
                            Some(context) => context.get_var(&name),
                            None => Value::Number(0.0),
                        };
                        self.operands.push(value);
                        self.cursor += len;
                    }
                }
                Token::Number(number) => {
                    self.operands.push(Value::Number(number));
                    self.cursor += len;
                }
                Token::Str(text) => {
                    self.operands.push(Value::Str(text));
                    self.cursor += len;
                }
                Token::Plus => {
                    if self.last.is_none() {
                        return Err(EvalError::OperatorWithoutOperand);
                    }
                    self.push_operator(Operator::Add, context)?;
                    self.cursor += len;
                }
                Token::Minus => {
                    // Binary after a number or identifier; otherwise a
                    // one-token lookahead decides whether this negates
                    let mut op = Operator::Subtract;
                    if self.last != Some(TokenKind::Number)
                        && self.last != Some(TokenKind::Identifier)
                    {
                        let ahead = scan_token(&self.src, self.cursor + len);
                        match ahead.token.kind() {
                            TokenKind::Number | TokenKind::Identifier => op = Operator::Negate,
                            _ => {
                                if self.last.is_none() {
                                    return Err(EvalError::OperatorWithoutOperand);
                                }
                            }
                        }
                    }
                    self.push_operator(op, context)?;
                    self.cursor += len;
                }
                Token::Star => {
                    if self.last.is_none() {
                        return Err(EvalError::OperatorWithoutOperand);
                    }
                    self.push_operator(Operator::Multiply, context)?;
                    self.cursor += len;
                }
                Token::Slash => {
                    if self.last.is_none() {
                        return Err(EvalError::OperatorWithoutOperand);
                    }
                    self.push_operator(Operator::Divide, context)?;
                    self.cursor += len;
                }
                Token::LParen => {
                    self.operators.push(Operator::LParen);
                    self.cursor += len;
                }
                Token::RParen => {
                    if !self.paren_in_scope(border) {
                        // Not ours: leave it for the enclosing argument
                        // loop and end this scope
                        break;
                    }
                    loop {
                        match self.operators.pop() {
                            Some(Operator::LParen) => break,
                            Some(op) => self.apply(op, context)?,
                            None => return Err(EvalError::UnmatchedParen),
                        }
                    }
                    self.cursor += len;
                }
                // One function argument is complete; the caller consumes
                // the comma
                Token::Comma => break,
            }

            self.last = Some(kind);
        }

        // Reduce everything still pending in this scope, in LIFO order
        while self.operators.len() > border {
            match self.operators.pop() {
                Some(op) => self.apply(op, context)?,
                None => break,
            }
        }

        self.operands.pop().ok_or(EvalError::MissingOperand)
    }

    /// Collect the comma-separated arguments of a call whose `(` has just
    /// been consumed, leaving each argument value on the operand stack.
    /// Consumes the closing `)` and returns the argument count.
    fn eval_arguments(
        &mut self,
        border: usize,
        context: Option<&dyn Context>,
    ) -> Result<usize, EvalError> {
        // Empty argument list: `)` is the immediate next token
        let next = scan_token(&self.src, self.cursor);
        if next.token == Token::RParen {
            self.cursor += next.len;
            return Ok(0);
        }

        let mut argc = 0;
        loop {
            // Each argument evaluates in its own operator scope
            let argument = self.eval_until(border + self.operators.len(), context)?;
            self.operands.push(argument);
            argc += 1;

            let next = scan_token(&self.src, self.cursor);
            match next.token {
                Token::Comma => {
                    self.last = Some(TokenKind::Comma);
                    self.cursor += next.len;
                }
                Token::RParen => {
                    self.cursor += next.len;
                    break;
                }
                Token::End => return Err(EvalError::UnterminatedCall),
                _ => {}
            }
        }
        Ok(argc)
    }

    /// Check whether a `(` marker is open in this scope
    fn paren_in_scope(&self, border: usize) -> bool {
        self.operators
            .get(border..)
            .map_or(false, |scope| scope.iter().any(|op| *op == Operator::LParen))
    }

    /// Reduce the top operator first when it binds at least as tightly as
    /// `op`, then push `op`. Reducing on equal precedence is what makes
    /// the binary operators left-associative.
    fn push_operator(
        &mut self,
        op: Operator,
        context: Option<&dyn Context>,
    ) -> Result<(), EvalError> {
        let reduce = match self.operators.last() {
            Some(top) => top.precedence() <= op.precedence(),
            None => false,
        };
        if reduce {
            if let Some(top) = self.operators.pop() {
                self.apply(top, context)?;
            }
        }
        self.operators.push(op);
        Ok(())
    }

    /// Apply one operator to the operand stack, pushing its single result
    fn apply(&mut self, op: Operator, context: Option<&dyn Context>) -> Result<(), EvalError> {
        trace!("apply {:?}", op);
        match op {
            Operator::Add => {
                let (lhs, rhs) = self.pop_pair()?;
                self.operands.push(lhs + rhs);
            }
            Operator::Subtract => {
                let (lhs, rhs) = self.pop_pair()?;
                self.operands.push(lhs - rhs);
            }
            Operator::Negate => {
                let rhs = self.pop_operand()?;
                self.operands.push(-rhs);
            }
            Operator::Multiply => {
                let (lhs, rhs) = self.pop_pair()?;
                self.operands.push(lhs * rhs);
            }
            Operator::Divide => {
                let (lhs, rhs) = self.pop_pair()?;
                self.operands.push(lhs / rhs);
            }
            Operator::Call { name, argc } => {
                let mut args = Vec::with_capacity(argc);
                for _ in 0..argc {
                    args.push(self.pop_operand()?);
                }
                // Popped right to left; the host sees source order
                args.reverse();
                let context = context.ok_or_else(|| EvalError::MissingContext(name.clone()))?;
                let result = context.call(&name, args).map_err(EvalError::Host)?;
                self.operands.push(result);
            }
            // A marker left behind by an unclosed `(` reduces to nothing
            Operator::LParen => {}
        }
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<Value, EvalError> {
        self.operands.pop().ok_or(EvalError::MissingOperand)
    }

    /// Pop two operands, right one first
    fn pop_pair(&mut self) -> Result<(Value, Value), EvalError> {
        let rhs = self.pop_operand()?;
        let lhs = self.pop_operand()?;
        Ok((lhs, rhs))
    }
}
