//! Table entries.
//!
//! Every key in a lookup table maps to exactly one [`Entry`]: a plain value,
//! a producer that computes the value on demand, or an explicit absence.
//! The variant is fixed when the table is built, so a value whose type
//! happens to be callable is never mistaken for a producer.

use std::fmt;
use std::sync::Arc;

/// Zero-argument callable that computes a value each time it is called.
pub struct Producer<R>(Arc<dyn Fn() -> R + Send + Sync>);

impl<R> Producer<R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self) -> R { (self.0)() }
}

impl<R> Clone for Producer<R> {
    fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<R> fmt::Debug for Producer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Producer(..)") }
}

#[derive(Debug, Clone)]
pub enum Entry<R> {
    Value(R),
    Producer(Producer<R>),
    Absent,
}

impl<R> Entry<R> {
    pub fn value(value: R) -> Self { Self::Value(value) }

    pub fn producer<F>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self::Producer(Producer::new(f))
    }

    pub fn absent() -> Self { Self::Absent }

    /// `None` maps to [`Entry::Absent`].
    pub fn from_option(value: Option<R>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

    pub fn is_producer(&self) -> bool { matches!(self, Self::Producer(_)) }

    /// Produces the value this entry stands for.
    ///
    /// Producers run on every call; nothing is cached.
    pub fn evaluate(&self) -> Option<R>
    where
        R: Clone,
    {
        match self {
            Self::Value(value) => Some(value.clone()),
            Self::Producer(producer) => Some(producer.call()),
            Self::Absent => None,
        }
    }
}

impl<R> From<R> for Entry<R> {
    fn from(value: R) -> Self { Self::Value(value) }
}

impl<R> From<Producer<R>> for Entry<R> {
    fn from(producer: Producer<R>) -> Self { Self::Producer(producer) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_value_evaluates_to_clone() {
        let entry = Entry::value(String::from("five"));
        assert_eq!(entry.evaluate(), Some("five".to_string()));
        assert_eq!(entry.evaluate(), Some("five".to_string()));
    }

    #[test]
    fn test_producer_runs_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let entry = Entry::producer(move || counter.fetch_add(1, Ordering::SeqCst) + 1);

        assert_eq!(entry.evaluate(), Some(1));
        assert_eq!(entry.evaluate(), Some(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cloned_producer_shares_callable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let entry = Entry::producer(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let copy = entry.clone();

        entry.evaluate();
        copy.evaluate();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_absent_evaluates_to_none() {
        let entry: Entry<String> = Entry::absent();

        assert!(entry.is_absent());
        assert_eq!(entry.evaluate(), None);
    }

    #[test]
    fn test_from_option() {
        assert!(Entry::<u8>::from_option(None).is_absent());
        assert_eq!(Entry::from_option(Some(3u8)).evaluate(), Some(3));
    }

    #[test]
    fn test_callable_value_is_not_invoked() {
        fn seven() -> u32 { 7 }

        let entry: Entry<fn() -> u32> = Entry::value(seven);
        assert!(!entry.is_producer());

        let stored = entry.evaluate().unwrap();
        assert_eq!(stored(), 7);
    }
}
