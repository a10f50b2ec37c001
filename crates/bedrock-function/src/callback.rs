//! Callbacks: notify that something has completed.
//!
//! Shaped like [`Action`](crate::Action) but semantically a notification
//! rather than a unit of work.

use bedrock_error::{null_failure, SoftResult};

use crate::compose::finally;

pub trait Callback {
    fn call(&self) -> SoftResult<()>;

    /// Call `self`, then `other`. `other` is called even if `self` failed.
    fn with<C>(self, other: C) -> With<Self, C>
    where
        Self: Sized,
        C: Callback,
    {
        With { first: self, second: other }
    }
}

impl<F> Callback for F
where
    F: Fn() -> SoftResult<()>,
{
    fn call(&self) -> SoftResult<()> {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Callback for Empty {
    fn call(&self) -> SoftResult<()> {
        Ok(())
    }
}

pub fn empty() -> Empty {
    Empty
}

pub fn of<C: Callback>(callback: Option<C>) -> SoftResult<C> {
    callback.ok_or_else(|| null_failure("callback"))
}

pub fn auto<C: Callback>(callback: Option<C>) -> Auto<C> {
    Auto(callback)
}

pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    FromFn(f)
}

#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Callback for FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    fn call(&self) -> SoftResult<()> {
        (self.0)()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Auto<C>(Option<C>);

impl<C: Callback> Callback for Auto<C> {
    fn call(&self) -> SoftResult<()> {
        self.0.as_ref().map_or(Ok(()), Callback::call)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct With<A, B> {
    first: A,
    second: B,
}

impl<A: Callback, B: Callback> Callback for With<A, B> {
    fn call(&self) -> SoftResult<()> {
        finally(self.first.call(), || self.second.call())
    }
}
