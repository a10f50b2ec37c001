//! Actions: perform a side effect, take nothing, return nothing.

use bedrock_error::{null_failure, SoftResult};

use crate::compose::finally;

/// A unit of work performed for its side effect.
pub trait Action {
    /// Perform the work; a failure means the effect did not complete.
    fn perform(&self) -> SoftResult<()>;

    /// Perform `self`, then `other`. `other` runs even if `self` failed.
    fn with<A>(self, other: A) -> With<Self, A>
    where
        Self: Sized,
        A: Action,
    {
        With { first: self, second: other }
    }
}

impl<F> Action for F
where
    F: Fn() -> SoftResult<()>,
{
    fn perform(&self) -> SoftResult<()> {
        self()
    }
}

/// The action that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Action for Empty {
    fn perform(&self) -> SoftResult<()> {
        Ok(())
    }
}

pub fn empty() -> Empty {
    Empty
}

/// Reject an absent action, otherwise return it unchanged.
pub fn of<A: Action>(action: Option<A>) -> SoftResult<A> {
    action.ok_or_else(|| null_failure("action"))
}

/// Use the given action, or the empty action if absent.
pub fn auto<A: Action>(action: Option<A>) -> Auto<A> {
    Auto(action)
}

/// Name a closure as an action.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    FromFn(f)
}

#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Action for FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    fn perform(&self) -> SoftResult<()> {
        (self.0)()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Auto<A>(Option<A>);

impl<A: Action> Action for Auto<A> {
    fn perform(&self) -> SoftResult<()> {
        match &self.0 {
            Some(action) => action.perform(),
            None => Ok(()),
        }
    }
}

/// Two actions in sequence, see [`Action::with`].
#[derive(Debug, Clone, Copy)]
pub struct With<A, B> {
    first: A,
    second: B,
}

impl<A: Action, B: Action> Action for With<A, B> {
    fn perform(&self) -> SoftResult<()> {
        finally(self.first.perform(), || self.second.perform())
    }
}
