//! Suppliers: produce a value on demand.

use bedrock_error::{null_failure, SoftFailure, SoftKind, SoftResult};

pub trait Supplier<T> {
    /// Produce a value. Fails with a [`SoftKind::Supply`]-family failure when
    /// no usable value can be produced.
    fn get(&self) -> SoftResult<T>;

    /// Run `self` for its effect, then return what `other` supplies.
    ///
    /// A failure from `self` is returned and `other` is not consulted.
    fn with<S>(self, other: S) -> With<Self, S>
    where
        Self: Sized,
        S: Supplier<T>,
    {
        With { first: self, second: other }
    }

    /// Fall back to `value` whenever `self` fails.
    fn or(self, value: T) -> Or<Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        Or { supplier: self, fallback: value }
    }

    /// Fall back to `other` whenever `self` fails. If both fail, the first
    /// failure is returned with the second attached.
    fn or_else<S>(self, other: S) -> OrElse<Self, S>
    where
        Self: Sized,
        S: Supplier<T>,
    {
        OrElse { supplier: self, fallback: other }
    }

    /// Ignore `self` entirely and always supply `value`.
    fn suppress(self, value: T) -> Constant<T>
    where
        Self: Sized,
        T: Clone,
    {
        Constant(value)
    }
}

impl<T, F> Supplier<T> for F
where
    F: Fn() -> SoftResult<T>,
{
    fn get(&self) -> SoftResult<T> {
        self()
    }
}

/// Supplies `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable;

impl<T> Supplier<Option<T>> for Nullable {
    fn get(&self) -> SoftResult<Option<T>> {
        Ok(None)
    }
}

pub fn nullable() -> Nullable {
    Nullable
}

/// Always supplies a clone of the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T>(T);

impl<T: Clone> Supplier<T> for Constant<T> {
    fn get(&self) -> SoftResult<T> {
        Ok(self.0.clone())
    }
}

pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant(value)
}

/// Like [`constant`], for values that may be absent. An absent value is
/// rejected here rather than on every `get`.
pub fn strict<T: Clone>(value: Option<T>) -> SoftResult<Constant<T>> {
    value.map(Constant).ok_or_else(|| null_failure("object"))
}

/// The supplier that never has anything to give.
#[derive(Debug, Clone, Copy, Default)]
pub struct Without;

impl<T> Supplier<T> for Without {
    fn get(&self) -> SoftResult<T> {
        Err(SoftFailure::templated(SoftKind::Get, "current object"))
    }
}

pub fn without() -> Without {
    Without
}

pub fn of<T, S: Supplier<T>>(supplier: Option<S>) -> SoftResult<S> {
    supplier.ok_or_else(|| null_failure("supplier"))
}

pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    FromFn(f)
}

#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<T, F> Supplier<T> for FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    fn get(&self) -> SoftResult<T> {
        (self.0)()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct With<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Supplier<T> for With<A, B>
where
    A: Supplier<T>,
    B: Supplier<T>,
{
    fn get(&self) -> SoftResult<T> {
        self.first.get()?;
        self.second.get()
    }
}

#[derive(Debug, Clone)]
pub struct Or<S, T> {
    supplier: S,
    fallback: T,
}

impl<S, T> Supplier<T> for Or<S, T>
where
    S: Supplier<T>,
    T: Clone,
{
    fn get(&self) -> SoftResult<T> {
        match self.supplier.get() {
            Ok(value) => Ok(value),
            Err(failure) => {
                tracing::debug!(code = failure.kind().code(), "Supplier failed, using fallback value");
                Ok(self.fallback.clone())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrElse<A, B> {
    supplier: A,
    fallback: B,
}

impl<T, A, B> Supplier<T> for OrElse<A, B>
where
    A: Supplier<T>,
    B: Supplier<T>,
{
    fn get(&self) -> SoftResult<T> {
        let primary = match self.supplier.get() {
            Ok(value) => return Ok(value),
            Err(failure) => failure,
        };
        match self.fallback.get() {
            Ok(value) => Ok(value),
            Err(secondary) => {
                primary.attach(secondary);
                Err(primary)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_error::{FailurePolicy, Throwable};
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_nullable_and_without() {
        assert_eq!(Supplier::<Option<u8>>::get(&nullable()).unwrap(), None);

        let failure = Supplier::<u8>::get(&without()).unwrap_err();
        assert_eq!(failure.kind(), SoftKind::Get);
        assert_eq!(failure.message(), Some("Failed to get the current object"));
    }

    #[test]
    fn test_strict_rejects_absent() {
        assert_eq!(strict(Some(3)).unwrap().get().unwrap(), 3);
        let failure = strict::<u8>(None).unwrap_err();
        assert!(failure.is(SoftKind::Validation));
        assert_eq!(failure.message(), Some("The object should not be null"));
    }

    #[test]
    fn test_with_returns_second() {
        let calls = Cell::new(0);
        let first = from_fn(|| {
            calls.set(calls.get() + 1);
            Ok(1)
        });
        assert_eq!(first.with(constant(2)).get().unwrap(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_with_stops_on_first_failure() {
        let failing = from_fn(|| Err::<i32, _>(SoftFailure::new(SoftKind::Supply)));
        let failure = failing.with(constant(2)).get().unwrap_err();
        assert_eq!(failure.kind(), SoftKind::Supply);
    }

    #[test]
    fn test_or_falls_back() {
        assert_eq!(Supplier::<i32>::get(&without().or(9)).unwrap(), 9);
        assert_eq!(constant(1).or(9).get().unwrap(), 1);
    }

    #[test]
    fn test_or_else_attaches_second_failure() {
        let primary = from_fn(|| {
            Err::<i32, _>(SoftFailure::with_policy(SoftKind::Supply, FailurePolicy::new(true, false)))
        });
        let failure = primary.or_else(without()).get().unwrap_err();
        assert_eq!(failure.kind(), SoftKind::Supply);
        assert_eq!(failure.suppressed().len(), 1);

        let recovered = from_fn(|| Err::<&str, _>(SoftFailure::new(SoftKind::Supply))).or_else(constant("spare"));
        assert_eq!(recovered.get().unwrap(), "spare");
    }

    #[test]
    fn test_suppress_binds_value() {
        let failing = from_fn(|| Err::<u8, _>(SoftFailure::new(SoftKind::Supply)));
        assert_eq!(failing.suppress(4).get().unwrap(), 4);
    }

    #[test]
    fn test_of_rejects_absent() {
        let failure = of::<u8, Without>(None).unwrap_err();
        assert_eq!(failure.message(), Some("The supplier should not be null"));
    }

    proptest! {
        #[test]
        fn constant_always_returns_same_value(value in any::<i64>(), times in 1usize..16) {
            let supplier = constant(value);
            for _ in 0..times {
                prop_assert_eq!(supplier.get().unwrap(), value);
            }
        }
    }
}
