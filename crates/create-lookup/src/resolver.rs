//! Resolver abstraction.
//!
//! [`Resolve`] is the contract shared by lookup tables, plain functions and
//! the [`Fallback`] combinator. A resolver never fails: a key it cannot
//! answer for yields `None`, and callers decide what that means.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::lookup::Lookup;

pub trait Resolve<Q: ?Sized> {
    type Output;

    fn resolve(&self, key: &Q) -> Option<Self::Output>;

    /// Consults `fallback` whenever `self` yields `None`.
    fn or<B>(self, fallback: B) -> Fallback<Self, B>
    where
        Self: Sized,
    {
        Fallback::new(self, fallback)
    }
}

impl<K, R, Q> Resolve<Q> for Lookup<K, R>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    R: Clone,
{
    type Output = R;

    fn resolve(&self, key: &Q) -> Option<R> { Lookup::resolve(self, key) }
}

impl<F, Q, R> Resolve<Q> for F
where
    F: Fn(&Q) -> Option<R>,
    Q: ?Sized,
{
    type Output = R;

    fn resolve(&self, key: &Q) -> Option<R> { self(key) }
}

#[derive(Debug, Clone)]
pub struct Fallback<A, B> {
    primary:  A,
    fallback: B,
}

impl<A, B> Fallback<A, B> {
    pub fn new(primary: A, fallback: B) -> Self { Self { primary, fallback } }

    /// Appends another resolver behind this chain.
    pub fn or<C>(self, fallback: C) -> Fallback<Self, C> { Fallback::new(self, fallback) }
}

impl<A, B, Q> Resolve<Q> for Fallback<A, B>
where
    A: Resolve<Q>,
    B: Resolve<Q, Output = A::Output>,
    Q: ?Sized,
{
    type Output = A::Output;

    fn resolve(&self, key: &Q) -> Option<A::Output> {
        self.primary
            .resolve(key)
            .or_else(|| self.fallback.resolve(key))
    }
}
