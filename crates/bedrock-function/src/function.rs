//! Functions: transform an input into a result.

use std::marker::PhantomData;

use bedrock_error::{null_failure, Severity, SoftFailure, SoftKind, SoftResult, Throwable};

use crate::callback::Callback;
use crate::condition::Condition;
use crate::consumer::Consumer;
use crate::predicate::{self, Computed, Predicate};

pub trait Function<T: ?Sized, R> {
    /// Transform `value`. Fails with a [`SoftKind::Function`](bedrock_error::SoftKind::Function)-family
    /// failure when no result can be produced.
    fn execute(&self, value: &T) -> SoftResult<R>;

    /// Execute `self` for its effect, then return what `other` produces for
    /// the same input. `self`'s result is discarded; its failure is not.
    fn with<G>(self, other: G) -> With<Self, G>
    where
        Self: Sized,
        G: Function<T, R>,
    {
        With { first: self, second: other }
    }

    /// Ignore the input and always execute on `value`.
    fn suppress(self, value: T) -> Suppressed<Self, T>
    where
        Self: Sized,
        T: Sized,
    {
        Suppressed { function: self, value }
    }

    /// Feed the result of `self` into `next`.
    fn then<G, S>(self, next: G) -> Then<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        Then {
            first: self,
            next,
            marker: PhantomData,
        }
    }

    /// Keep the result while `predicate` holds for it, otherwise replace it
    /// with what `fallback` makes of it.
    ///
    /// A failure of `self` propagates unchanged. A failure of `predicate` or
    /// `fallback` becomes the cause of a [`SoftKind::Function`] failure, or of
    /// a [`SoftKind::FunctionError`] when it was severe.
    fn when<P, G>(self, predicate: P, fallback: G) -> When<Self, P, G>
    where
        Self: Sized,
        P: Predicate<R>,
        G: Function<R, R>,
    {
        When {
            function: self,
            predicate,
            fallback,
        }
    }

    /// Call `callback` whenever `predicate` holds for the result.
    fn when_call<P, C>(self, predicate: P, callback: C) -> WhenCall<Self, P, C>
    where
        Self: Sized,
        P: Predicate<R>,
        C: Callback,
    {
        WhenCall {
            function: self,
            predicate,
            callback,
        }
    }

    /// Hand the result to `consumer` whenever `predicate` holds for it.
    fn when_consume<P, C>(self, predicate: P, consumer: C) -> WhenConsume<Self, P, C>
    where
        Self: Sized,
        P: Predicate<R>,
        C: Consumer<R>,
    {
        WhenConsume {
            function: self,
            predicate,
            consumer,
        }
    }

    /// [`Function::when`] keyed on a condition instead of the result.
    fn when_condition<C, G>(self, condition: C, fallback: G) -> When<Self, Computed<C>, G>
    where
        Self: Sized,
        C: Condition,
        G: Function<R, R>,
    {
        self.when(predicate::from_condition(condition), fallback)
    }

    fn when_condition_call<C, B>(self, condition: C, callback: B) -> WhenCall<Self, Computed<C>, B>
    where
        Self: Sized,
        C: Condition,
        B: Callback,
    {
        self.when_call(predicate::from_condition(condition), callback)
    }

    fn when_condition_consume<C, K>(self, condition: C, consumer: K) -> WhenConsume<Self, Computed<C>, K>
    where
        Self: Sized,
        C: Condition,
        K: Consumer<R>,
    {
        self.when_consume(predicate::from_condition(condition), consumer)
    }
}

impl<T, R, F> Function<T, R> for F
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        self(value)
    }
}

/// Produces `None` for every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable;

impl<T: ?Sized, R> Function<T, Option<R>> for Nullable {
    fn execute(&self, _value: &T) -> SoftResult<Option<R>> {
        Ok(None)
    }
}

pub fn nullable() -> Nullable {
    Nullable
}

/// Produces a clone of the same result for every input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<R>(R);

impl<T: ?Sized, R: Clone> Function<T, R> for Constant<R> {
    fn execute(&self, _value: &T) -> SoftResult<R> {
        Ok(self.0.clone())
    }
}

pub fn constant<R: Clone>(result: R) -> Constant<R> {
    Constant(result)
}

pub fn strict<R: Clone>(result: Option<R>) -> SoftResult<Constant<R>> {
    result.map(Constant).ok_or_else(|| null_failure("object"))
}

pub fn of<T: ?Sized, R, F: Function<T, R>>(function: Option<F>) -> SoftResult<F> {
    function.ok_or_else(|| null_failure("function"))
}

pub fn from_fn<T: ?Sized, R, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&T) -> SoftResult<R>,
{
    FromFn { f, marker: PhantomData }
}

pub struct FromFn<F, T: ?Sized> {
    f: F,
    marker: PhantomData<fn(&T)>,
}

impl<F, T, R> Function<T, R> for FromFn<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        (self.f)(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct With<A, B> {
    first: A,
    second: B,
}

impl<T, R, A, B> Function<T, R> for With<A, B>
where
    T: ?Sized,
    A: Function<T, R>,
    B: Function<T, R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        self.first.execute(value)?;
        self.second.execute(value)
    }
}

#[derive(Debug, Clone)]
pub struct Suppressed<F, T> {
    function: F,
    value: T,
}

impl<F, T, U, R> Function<U, R> for Suppressed<F, T>
where
    F: Function<T, R>,
    U: ?Sized,
{
    fn execute(&self, _value: &U) -> SoftResult<R> {
        self.function.execute(&self.value)
    }
}

/// Two functions chained, see [`Function::then`].
pub struct Then<A, B, M> {
    first: A,
    next: B,
    marker: PhantomData<fn() -> M>,
}

impl<T, M, R, A, B> Function<T, R> for Then<A, B, M>
where
    T: ?Sized,
    A: Function<T, M>,
    B: Function<M, R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        let intermediate = self.first.execute(value)?;
        self.next.execute(&intermediate)
    }
}

//-----------------------------------------------------------------------------
// Reactions
//-----------------------------------------------------------------------------

/// Reactions report their own failure as the cause of a function failure.
fn reaction_failure(failure: SoftFailure) -> SoftFailure {
    let kind = match failure.severity() {
        Severity::Error => SoftKind::FunctionError,
        Severity::Exception => SoftKind::Function,
    };
    SoftFailure::with_cause(kind, failure)
}

#[derive(Debug, Clone, Copy)]
pub struct When<F, P, G> {
    function: F,
    predicate: P,
    fallback: G,
}

impl<T, R, F, P, G> Function<T, R> for When<F, P, G>
where
    T: ?Sized,
    F: Function<T, R>,
    P: Predicate<R>,
    G: Function<R, R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        let result = self.function.execute(value)?;
        if self.predicate.evaluate(&result).map_err(reaction_failure)? {
            Ok(result)
        } else {
            self.fallback.execute(&result).map_err(reaction_failure)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WhenCall<F, P, C> {
    function: F,
    predicate: P,
    callback: C,
}

impl<T, R, F, P, C> Function<T, R> for WhenCall<F, P, C>
where
    T: ?Sized,
    F: Function<T, R>,
    P: Predicate<R>,
    C: Callback,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        let result = self.function.execute(value)?;
        if self.predicate.evaluate(&result).map_err(reaction_failure)? {
            self.callback.call().map_err(reaction_failure)?;
        }
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WhenConsume<F, P, C> {
    function: F,
    predicate: P,
    consumer: C,
}

impl<T, R, F, P, C> Function<T, R> for WhenConsume<F, P, C>
where
    T: ?Sized,
    F: Function<T, R>,
    P: Predicate<R>,
    C: Consumer<R>,
{
    fn execute(&self, value: &T) -> SoftResult<R> {
        let result = self.function.execute(value)?;
        if self.predicate.evaluate(&result).map_err(reaction_failure)? {
            self.consumer.consume(&result).map_err(reaction_failure)?;
        }
        Ok(result)
    }
}
