use crate::value::Value;

/// Host-side collaborator consulted while an expression evaluates.
///
/// The evaluator calls both operations synchronously. A context may itself
/// evaluate further expressions on *other* evaluator instances; bounding
/// recursive or long-running callbacks is the host's responsibility.
pub trait Context {
    /// Resolve a bare identifier that is not followed by `(`.
    ///
    /// This is infallible on purpose: the unknown-name policy belongs to
    /// the host. Typical choices are returning `Value::Number(0.0)` or
    /// passing the name through as text.
    fn get_var(&self, name: &str) -> Value;

    /// Dispatch a function call. `args` arrive in left-to-right source
    /// order. An `Err` message is wrapped into the evaluation error
    /// returned to the original caller.
    fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, String>;
}
