//! Conditions: boolean computations that take no input.

use bedrock_error::{null_failure, SoftFailure, SoftKind, SoftResult};

use crate::callback::Callback;

pub trait Condition {
    /// Compute the result. Fails with a [`SoftKind::Condition`] failure when
    /// it cannot be computed.
    fn calculate(&self) -> SoftResult<bool>;

    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert(self)
    }

    /// Logical AND. `other` is not computed when `self` is false.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        And(self, other)
    }

    /// Logical OR. `other` is not computed when `self` is true.
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        Or(self, other)
    }

    /// Logical XOR. Both operands are always computed.
    fn xor<C>(self, other: C) -> Xor<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        Xor(self, other)
    }

    /// Logical AND computing both operands, like the non-short-circuit `&`.
    fn and_eager<C>(self, other: C) -> AndEager<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        AndEager(self, other)
    }

    /// Logical OR computing both operands, like the non-short-circuit `|`.
    fn or_eager<C>(self, other: C) -> OrEager<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        OrEager(self, other)
    }

    /// Compute `self` for its effects but always yield `result`.
    fn suppress(self, result: bool) -> Suppressed<Self>
    where
        Self: Sized,
    {
        Suppressed { condition: self, result }
    }

    /// Call `callback` whenever the result is true.
    fn when<B>(self, callback: B) -> When<Self, B>
    where
        Self: Sized,
        B: Callback,
    {
        When { condition: self, callback }
    }

    /// Fail whenever the result is false.
    ///
    /// A [`SoftKind::Condition`] failure from `failure` is returned as is;
    /// anything else becomes the cause of one.
    fn or_fail<E>(self, failure: E) -> OrFail<Self, E>
    where
        Self: Sized,
        E: Fn() -> SoftFailure,
    {
        OrFail { condition: self, failure }
    }
}

impl<F> Condition for F
where
    F: Fn() -> SoftResult<bool>,
{
    fn calculate(&self) -> SoftResult<bool> {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(bool);

impl Condition for Constant {
    fn calculate(&self) -> SoftResult<bool> {
        Ok(self.0)
    }
}

pub fn constant(result: bool) -> Constant {
    Constant(result)
}

pub fn of<C: Condition>(condition: Option<C>) -> SoftResult<C> {
    condition.ok_or_else(|| null_failure("condition"))
}

pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<bool>,
{
    FromFn(f)
}

#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Condition for FromFn<F>
where
    F: Fn() -> SoftResult<bool>,
{
    fn calculate(&self) -> SoftResult<bool> {
        (self.0)()
    }
}

//-----------------------------------------------------------------------------
// Logical combinators
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Invert<C>(C);

impl<C: Condition> Condition for Invert<C> {
    fn calculate(&self) -> SoftResult<bool> {
        Ok(!self.0.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<A: Condition, B: Condition> Condition for And<A, B> {
    fn calculate(&self) -> SoftResult<bool> {
        Ok(self.0.calculate()? && self.1.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<A: Condition, B: Condition> Condition for Or<A, B> {
    fn calculate(&self) -> SoftResult<bool> {
        Ok(self.0.calculate()? || self.1.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Xor<A, B>(A, B);

impl<A: Condition, B: Condition> Condition for Xor<A, B> {
    fn calculate(&self) -> SoftResult<bool> {
        let left = self.0.calculate()?;
        Ok(left ^ self.1.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AndEager<A, B>(A, B);

impl<A: Condition, B: Condition> Condition for AndEager<A, B> {
    fn calculate(&self) -> SoftResult<bool> {
        let left = self.0.calculate()?;
        Ok(left & self.1.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrEager<A, B>(A, B);

impl<A: Condition, B: Condition> Condition for OrEager<A, B> {
    fn calculate(&self) -> SoftResult<bool> {
        let left = self.0.calculate()?;
        Ok(left | self.1.calculate()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Suppressed<C> {
    condition: C,
    result: bool,
}

impl<C: Condition> Condition for Suppressed<C> {
    fn calculate(&self) -> SoftResult<bool> {
        self.condition.calculate()?;
        Ok(self.result)
    }
}

//-----------------------------------------------------------------------------
// Reactions
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct When<C, B> {
    condition: C,
    callback: B,
}

impl<C: Condition, B: Callback> Condition for When<C, B> {
    fn calculate(&self) -> SoftResult<bool> {
        let result = self.condition.calculate()?;
        if result {
            self.callback.call()?;
        }
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrFail<C, E> {
    condition: C,
    failure: E,
}

impl<C, E> Condition for OrFail<C, E>
where
    C: Condition,
    E: Fn() -> SoftFailure,
{
    fn calculate(&self) -> SoftResult<bool> {
        if self.condition.calculate()? {
            return Ok(true);
        }
        let failure = (self.failure)();
        if failure.is(SoftKind::Condition) {
            Err(failure)
        } else {
            Err(SoftFailure::with_cause(SoftKind::Condition, failure))
        }
    }
}
