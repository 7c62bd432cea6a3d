//! The lookup table and its resolver.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::resolver::Fallback;

/// Immutable table from keys to [`Entry`] values.
///
/// Clones share the same table. The table is dropped together with the last
/// clone.
pub struct Lookup<K, R> {
    table: Arc<HashMap<K, Entry<R>>>,
}

impl<K, R> Clone for Lookup<K, R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<K, R> Default for Lookup<K, R> {
    fn default() -> Self {
        Self {
            table: Arc::new(HashMap::new()),
        }
    }
}

impl<K: fmt::Debug, R: fmt::Debug> fmt::Debug for Lookup<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

impl<K, R> Lookup<K, R>
where
    K: Eq + Hash,
{
    /// Builds a table from `initializer`. Later entries for a key replace
    /// earlier ones.
    pub fn new<I, E>(initializer: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        E: Into<Entry<R>>,
    {
        initializer.into_iter().collect()
    }

    pub fn builder() -> LookupBuilder<K, R> { LookupBuilder::new() }

    pub(crate) fn from_table(table: HashMap<K, Entry<R>>) -> Self {
        debug!(entries = table.len(), "built lookup table");
        Self {
            table: Arc::new(table),
        }
    }

    pub fn len(&self) -> usize { self.table.len() }

    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    /// True for every key in the table, including keys mapped to
    /// [`Entry::Absent`].
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> { self.table.keys() }

    pub fn entry<Q>(&self, key: &Q) -> Option<&Entry<R>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(key)
    }

    #[cfg(feature = "serde")]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &Entry<R>)> { self.table.iter() }
}

impl<K, R> Lookup<K, R>
where
    K: Eq + Hash,
    R: Clone,
{
    /// Resolves `key`.
    ///
    /// Returns `None` when the key is not in the table or is mapped to
    /// [`Entry::Absent`]. Producers run on every call and a panic inside one
    /// reaches the caller untouched.
    ///
    /// Misses emit a `trace!` event without the key, since keys need not
    /// implement `Debug`. [`Lookup::require`] names the key in its error.
    pub fn resolve<Q>(&self, key: &Q) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.table.get(key) {
            Some(entry) => {
                let value = entry.evaluate();
                if value.is_none() {
                    trace!("lookup miss: key mapped to no value");
                }
                value
            }
            None => {
                trace!("lookup miss: key not present");
                None
            }
        }
    }

    pub fn resolve_or<Q>(&self, key: &Q, default: R) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.resolve(key).unwrap_or(default)
    }

    pub fn resolve_or_else<Q, F>(&self, key: &Q, default: F) -> R
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce() -> R,
    {
        self.resolve(key).unwrap_or_else(default)
    }

    /// Like [`Lookup::resolve`], but reports why no value was produced.
    pub fn require<Q>(&self, key: &Q) -> Result<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.table.get(key) {
            Some(entry) => entry.evaluate().ok_or_else(|| Error::Absent(format!("{key:?}"))),
            None => Err(Error::NotFound(format!("{key:?}"))),
        }
    }

    /// Chains `fallback` behind this table; it is consulted whenever this
    /// table yields `None`.
    pub fn or<B>(self, fallback: B) -> Fallback<Self, B> { Fallback::new(self, fallback) }

    /// Turns the table into a plain resolver function that owns it.
    pub fn into_fn<Q>(self) -> impl Fn(&Q) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        move |key: &Q| self.resolve(key)
    }
}

impl<K, R, E> FromIterator<(K, E)> for Lookup<K, R>
where
    K: Eq + Hash,
    E: Into<Entry<R>>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let table = iter
            .into_iter()
            .map(|(key, entry)| (key, entry.into()))
            .collect::<HashMap<_, _>>();
        Self::from_table(table)
    }
}

impl<K, R, E, const N: usize> From<[(K, E); N]> for Lookup<K, R>
where
    K: Eq + Hash,
    E: Into<Entry<R>>,
{
    fn from(entries: [(K, E); N]) -> Self { Self::new(entries) }
}

/// Builds a resolver function from `initializer`.
///
/// The returned closure exclusively owns the table. Missing keys and keys
/// mapped to [`Entry::Absent`] resolve to `None`; producers run on every call.
///
/// ```
/// use create_lookup::{Entry, create_lookup};
///
/// let lookup = create_lookup([
///     ("a", Entry::value(5)),
///     ("b", Entry::producer(|| 10)),
///     ("c", Entry::Absent),
/// ]);
///
/// assert_eq!(lookup(&"a"), Some(5));
/// assert_eq!(lookup(&"b"), Some(10));
/// assert_eq!(lookup(&"c"), None);
/// assert_eq!(lookup(&"z"), None);
/// ```
pub fn create_lookup<K, R, I>(initializer: I) -> impl Fn(&K) -> Option<R>
where
    K: Eq + Hash,
    R: Clone,
    I: IntoIterator<Item = (K, Entry<R>)>,
{
    Lookup::<K, R>::new(initializer).into_fn::<K>()
}

/// Incremental construction of a [`Lookup`].
pub struct LookupBuilder<K, R> {
    table: HashMap<K, Entry<R>>,
}

impl<K, R> Default for LookupBuilder<K, R> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<K, R> LookupBuilder<K, R>
where
    K: Eq + Hash,
{
    pub fn new() -> Self { Self::default() }

    pub fn entry(mut self, key: K, entry: impl Into<Entry<R>>) -> Self {
        self.table.insert(key, entry.into());
        self
    }

    pub fn value(self, key: K, value: R) -> Self { self.entry(key, Entry::Value(value)) }

    pub fn producer<F>(self, key: K, f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.entry(key, Entry::producer(f))
    }

    pub fn absent(self, key: K) -> Self { self.entry(key, Entry::Absent) }

    pub fn build(self) -> Lookup<K, R> { Lookup::from_table(self.table) }
}
