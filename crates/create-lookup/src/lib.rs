//! Declarative lookup tables.
//!
//! Replaces chains of `match`/`if` branches that map a key to a value with a
//! table built once and queried many times.
//!
//! # Entries
//!
//! Each key maps to an [`Entry`]:
//!
//! - **Value**: returned (cloned) on every lookup
//! - **Producer**: a zero-argument function run on every lookup, never cached
//! - **Absent**: explicitly no value
//!
//! Lookups never fail. A key that is missing, or mapped to
//! [`Entry::Absent`], resolves to `None` and the caller decides what that
//! means: a default, a domain error ([`Lookup::require`]), or another
//! resolver ([`Lookup::or`]).
//!
//! # Example
//!
//! ```
//! use create_lookup::{Entry, Lookup};
//!
//! #[derive(PartialEq, Eq, Hash)]
//! enum ConfigKey {
//!     MaxRetries,
//!     Timeout,
//!     Proxy,
//! }
//!
//! let config: Lookup<ConfigKey, u32> = Lookup::from([
//!     (ConfigKey::MaxRetries, Entry::value(5)),
//!     (ConfigKey::Timeout, Entry::producer(|| 3000)),
//!     (ConfigKey::Proxy, Entry::Absent),
//! ]);
//!
//! assert_eq!(config.resolve(&ConfigKey::MaxRetries), Some(5));
//! assert_eq!(config.resolve(&ConfigKey::Timeout), Some(3000));
//! assert_eq!(config.resolve(&ConfigKey::Proxy), None);
//! ```
//!
//! Tables are immutable once built and can be shared across threads
//! without locking.

pub use entry::{Entry, Producer};
pub use error::{Error, Result};
pub use lookup::{Lookup, LookupBuilder, create_lookup};
pub use resolver::{Fallback, Resolve};

mod entry;
mod error;
mod lookup;
mod resolver;
#[cfg(feature = "serde")]
mod serialize;
