//! Composable single-method capabilities.
//!
//! Each capability is a trait with exactly one required method and a
//! blanket implementation for closures of the matching shape:
//!
//! | capability | operation |
//! |------------|-----------|
//! | [`Action`] | `perform()` |
//! | [`Callback`] | `call()` |
//! | [`Consumer`] | `consume(&T)` |
//! | [`Supplier`] | `get() -> T` |
//! | [`Function`] | `execute(&T) -> R` |
//! | [`Predicate`] | `evaluate(&T) -> bool` |
//! | [`Condition`] | `calculate() -> bool` |
//!
//! Every operation returns a [`SoftResult`]. Combinators are default trait
//! methods that build a new capability closing over their operands; they
//! never mutate either operand. Factories live in each capability's module
//! (`consumer::empty()`, `supplier::constant(7)`, ...).
//!
//! Closures of one shape may implement several capabilities at once (a
//! `Fn() -> SoftResult<()>` is both an action and a callback), so calling a
//! combinator directly on a bare closure can be ambiguous. Wrap the closure
//! with the module's `from_fn` first.

pub mod action;
pub mod callback;
pub mod condition;
pub mod consumer;
pub mod function;
pub mod predicate;
pub mod supplier;

mod compose;

pub use action::Action;
pub use bedrock_error::{SoftFailure, SoftKind, SoftResult};
pub use callback::Callback;
pub use condition::Condition;
pub use consumer::Consumer;
pub use function::Function;
pub use predicate::Predicate;
pub use supplier::Supplier;
