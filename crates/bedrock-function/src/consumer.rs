//! Consumers: accept a value for its side effect.

use std::marker::PhantomData;

use bedrock_error::{null_failure, SoftResult};

use crate::compose::finally;

pub trait Consumer<T: ?Sized> {
    /// Accept `value`; a failure means it was not fully consumed.
    fn consume(&self, value: &T) -> SoftResult<()>;

    /// Consume with `self`, then with `other`. `other` always sees the value,
    /// even if `self` failed.
    fn with<C>(self, other: C) -> With<Self, C>
    where
        Self: Sized,
        C: Consumer<T>,
    {
        With { first: self, second: other }
    }

    /// Ignore whatever is passed and consume `value` instead.
    fn suppress(self, value: T) -> Suppressed<Self, T>
    where
        Self: Sized,
        T: Sized,
    {
        Suppressed { consumer: self, value }
    }
}

impl<T, F> Consumer<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<()>,
{
    fn consume(&self, value: &T) -> SoftResult<()> {
        self(value)
    }
}

/// The consumer that discards its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<T: ?Sized> Consumer<T> for Empty {
    fn consume(&self, _value: &T) -> SoftResult<()> {
        Ok(())
    }
}

pub fn empty() -> Empty {
    Empty
}

pub fn of<T: ?Sized, C: Consumer<T>>(consumer: Option<C>) -> SoftResult<C> {
    consumer.ok_or_else(|| null_failure("consumer"))
}

/// Use the given consumer, or discard input if absent.
pub fn auto<C>(consumer: Option<C>) -> Auto<C> {
    Auto(consumer)
}

/// A consumer that always consumes `value`, whatever it is passed.
pub fn constant<T, C: Consumer<T>>(consumer: C, value: T) -> Suppressed<C, T> {
    consumer.suppress(value)
}

pub fn from_fn<T: ?Sized, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&T) -> SoftResult<()>,
{
    FromFn { f, marker: PhantomData }
}

pub struct FromFn<F, T: ?Sized> {
    f: F,
    marker: PhantomData<fn(&T)>,
}

impl<F, T> Consumer<T> for FromFn<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<()>,
{
    fn consume(&self, value: &T) -> SoftResult<()> {
        (self.f)(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Auto<C>(Option<C>);

impl<T: ?Sized, C: Consumer<T>> Consumer<T> for Auto<C> {
    fn consume(&self, value: &T) -> SoftResult<()> {
        match &self.0 {
            Some(consumer) => consumer.consume(value),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct With<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Consumer<T> for With<A, B>
where
    T: ?Sized,
    A: Consumer<T>,
    B: Consumer<T>,
{
    fn consume(&self, value: &T) -> SoftResult<()> {
        finally(self.first.consume(value), || self.second.consume(value))
    }
}

/// A consumer bound to a fixed value, see [`Consumer::suppress`].
#[derive(Debug, Clone)]
pub struct Suppressed<C, T> {
    consumer: C,
    value: T,
}

impl<C, T, U> Consumer<U> for Suppressed<C, T>
where
    C: Consumer<T>,
    U: ?Sized,
{
    fn consume(&self, _value: &U) -> SoftResult<()> {
        self.consumer.consume(&self.value)
    }
}
