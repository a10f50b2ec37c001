//! Predicates: decide something about a value.

use std::marker::PhantomData;

use bedrock_error::{null_failure, SoftFailure, SoftKind, SoftResult};

use crate::callback::Callback;
use crate::condition::Condition;
use crate::consumer::Consumer;

pub trait Predicate<T: ?Sized> {
    /// Decide about `value`. Fails with a [`SoftKind::Evaluate`] failure when
    /// no decision can be made.
    fn evaluate(&self, value: &T) -> SoftResult<bool>;

    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert(self)
    }

    /// Logical AND. `other` is not evaluated when `self` is false.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And(self, other)
    }

    /// Logical OR. `other` is not evaluated when `self` is true.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or(self, other)
    }

    /// Logical XOR. Both operands are always evaluated.
    fn xor<P>(self, other: P) -> Xor<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Xor(self, other)
    }

    /// Ignore the input and always evaluate `value`.
    fn suppress(self, value: T) -> Suppressed<Self, T>
    where
        Self: Sized,
        T: Sized,
    {
        Suppressed { predicate: self, value }
    }

    /// Call `callback` whenever the result is true. The result is passed through.
    fn then<C>(self, callback: C) -> Notify<Self, C>
    where
        Self: Sized,
        C: Callback,
    {
        Notify { predicate: self, callback, on: true }
    }

    /// Call `callback` whenever the result is false. The result is passed through.
    fn otherwise<C>(self, callback: C) -> Notify<Self, C>
    where
        Self: Sized,
        C: Callback,
    {
        Notify { predicate: self, callback, on: false }
    }

    /// Hand the evaluated value to `consumer` whenever the result is true.
    fn then_consume<C>(self, consumer: C) -> Forward<Self, C>
    where
        Self: Sized,
        C: Consumer<T>,
    {
        Forward { predicate: self, consumer, on: true }
    }

    /// Hand the evaluated value to `consumer` whenever the result is false.
    fn otherwise_consume<C>(self, consumer: C) -> Forward<Self, C>
    where
        Self: Sized,
        C: Consumer<T>,
    {
        Forward { predicate: self, consumer, on: false }
    }

    /// Fail whenever the result is true, otherwise yield `false`.
    ///
    /// The failure produced by `failure` becomes the cause of an
    /// [`SoftKind::Evaluate`] failure.
    fn then_fail<E>(self, failure: E) -> Reject<Self, E>
    where
        Self: Sized,
        E: Fn() -> SoftFailure,
    {
        Reject { predicate: self, failure, on: true }
    }

    /// Fail whenever the result is false, otherwise yield `true`.
    fn otherwise_fail<E>(self, failure: E) -> Reject<Self, E>
    where
        Self: Sized,
        E: Fn() -> SoftFailure,
    {
        Reject { predicate: self, failure, on: false }
    }
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<bool>,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        self(value)
    }
}

/// Yields the same result for every input.
pub struct Constant<T: ?Sized> {
    result: bool,
    marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Clone for Constant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Constant<T> {}

impl<T: ?Sized> std::fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constant").field("result", &self.result).finish()
    }
}

impl<T: ?Sized> Predicate<T> for Constant<T> {
    fn evaluate(&self, _value: &T) -> SoftResult<bool> {
        Ok(self.result)
    }
}

pub fn constant<T: ?Sized>(result: bool) -> Constant<T> {
    Constant {
        result,
        marker: PhantomData,
    }
}

pub fn of<T: ?Sized, P: Predicate<T>>(predicate: Option<P>) -> SoftResult<P> {
    predicate.ok_or_else(|| null_failure("predicate"))
}

pub fn from_fn<T: ?Sized, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&T) -> SoftResult<bool>,
{
    FromFn { f, marker: PhantomData }
}

pub struct FromFn<F, T: ?Sized> {
    f: F,
    marker: PhantomData<fn(&T)>,
}

impl<F, T> Predicate<T> for FromFn<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<bool>,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        (self.f)(value)
    }
}

/// Decide every value by calculating `condition`, ignoring the value itself.
pub fn from_condition<C: Condition>(condition: C) -> Computed<C> {
    Computed(condition)
}

#[derive(Debug, Clone, Copy)]
pub struct Computed<C>(C);

impl<T: ?Sized, C: Condition> Predicate<T> for Computed<C> {
    fn evaluate(&self, _value: &T) -> SoftResult<bool> {
        self.0.calculate()
    }
}

//-----------------------------------------------------------------------------
// Logical combinators
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Invert<P>(P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Invert<P> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(!self.0.evaluate(value)?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(self.0.evaluate(value)? && self.1.evaluate(value)?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(self.0.evaluate(value)? || self.1.evaluate(value)?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Xor<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Xor<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let left = self.0.evaluate(value)?;
        let right = self.1.evaluate(value)?;
        Ok(left ^ right)
    }
}

#[derive(Debug, Clone)]
pub struct Suppressed<P, T> {
    predicate: P,
    value: T,
}

impl<P, T, U> Predicate<U> for Suppressed<P, T>
where
    P: Predicate<T>,
    U: ?Sized,
{
    fn evaluate(&self, _value: &U) -> SoftResult<bool> {
        self.predicate.evaluate(&self.value)
    }
}

//-----------------------------------------------------------------------------
// Reactions
//-----------------------------------------------------------------------------

/// Calls a callback on one outcome, see [`Predicate::then`].
#[derive(Debug, Clone, Copy)]
pub struct Notify<P, C> {
    predicate: P,
    callback: C,
    on: bool,
}

impl<T: ?Sized, P: Predicate<T>, C: Callback> Predicate<T> for Notify<P, C> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.predicate.evaluate(value)?;
        if result == self.on {
            self.callback.call()?;
        }
        Ok(result)
    }
}

/// Forwards the value to a consumer on one outcome, see [`Predicate::then_consume`].
#[derive(Debug, Clone, Copy)]
pub struct Forward<P, C> {
    predicate: P,
    consumer: C,
    on: bool,
}

impl<T: ?Sized, P: Predicate<T>, C: Consumer<T>> Predicate<T> for Forward<P, C> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.predicate.evaluate(value)?;
        if result == self.on {
            self.consumer.consume(value)?;
        }
        Ok(result)
    }
}

/// Turns one outcome into a failure, see [`Predicate::then_fail`].
#[derive(Debug, Clone, Copy)]
pub struct Reject<P, E> {
    predicate: P,
    failure: E,
    on: bool,
}

impl<T, P, E> Predicate<T> for Reject<P, E>
where
    T: ?Sized,
    P: Predicate<T>,
    E: Fn() -> SoftFailure,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        if self.predicate.evaluate(value)? == self.on {
            return Err(SoftFailure::with_cause(SoftKind::Evaluate, (self.failure)()));
        }
        Ok(!self.on)
    }
}
