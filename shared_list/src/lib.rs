//! # Shared List
//!
//! A thread-safe, ordered list of equatable values with index-based mutation,
//! value-based search and a built-in round-robin cursor.
//!
//! ## Features
//!
//! - **Shared Handle**: `SharedList<T>` clones share storage, cursor and lock
//! - **Linearized Mutation**: one lock serializes every mutator and the cursor advance
//! - **Separate Reader Path**: `get`, `len`, `contains`, ... share the read side
//! - **Round-Robin Cursor**: `next()` cycles through the elements in order
//! - **Checked Variants**: `try_*` methods report [`ListError`] instead of panicking
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐          ┌─────────────────────────┐
//! │ SharedList   │   Arc    │ Inner<T>                │
//! │ (handle)     ├─────────►│ state: RwLock<State>    │
//! └──────────────┘          │  ├─ data: Vec<T>        │◄─── write: mutators, next()
//! ┌──────────────┐          │  └─ cursor: usize       │
//! │ clone()      ├─────────►│                         │◄─── read: readers, cursor()
//! └──────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared_list::SharedList;
//!
//! let backends = SharedList::new();
//! backends.add(["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
//!
//! assert_eq!(backends.next(), "10.0.0.1");
//! assert_eq!(backends.next(), "10.0.0.2");
//!
//! backends.remove(&"10.0.0.2");
//! assert_eq!(backends.index_of(&"10.0.0.3"), Some(1));
//! assert_eq!(backends.len(), 2);
//! ```
//!
//! ## Bounds
//!
//! Index arguments to `get`, `set`, `insert` and `remove_at` are **not**
//! validated: an out-of-range index panics, exactly like slice indexing.
//! `next()` panics on an empty list. Callers either enforce bounds
//! themselves or use the checked variants:
//!
//! ```rust
//! use shared_list::{ListError, SharedList};
//!
//! let list: SharedList<u32> = SharedList::new();
//! assert_eq!(list.try_next(), Err(ListError::Empty));
//! assert_eq!(
//!     list.try_get(3),
//!     Err(ListError::IndexOutOfBounds { index: 3, len: 0 })
//! );
//! ```
//!
//! ## Thread Safety
//!
//! One `RwLock` guards the elements and the cursor together.
//!
//! - **Mutators** (`insert`, `remove*`, `replace*`, `set`, `add`, `push`,
//!   `clear`) and the cursor advance (`next`, `reset_cursor`) hold the write
//!   side for their full duration.
//! - **Readers** (`get`, `len`, `unpack`, `contains`, `index_of`, `to_vec`,
//!   `cursor`) take the read side recursively and never queue behind a
//!   waiting mutator. Each reader call sees a whole mutation or none of it;
//!   separate calls are not one snapshot.
//! - **`unpack()`** returns a live view of the storage, not a copy. Mutators
//!   on other threads wait until the view is dropped; a mutator or `next()`
//!   on the thread holding the view always deadlocks.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod accessors;
pub mod checked;
pub mod config;
pub mod cursor;
pub mod error;
pub mod list;
pub mod mutators;

pub use config::{ConfigError, DEFAULT_LIST_NAME, ListConfig, MAX_INITIAL_CAPACITY};
pub use error::{ListError, ListResult};
pub use list::SharedList;

/// Install a global fmt subscriber showing this crate's list events.
///
/// `RUST_LOG` takes precedence when set; otherwise events from this crate at
/// `level` and above are printed, tagged with the emitting thread. Returns
/// `false` if a global subscriber was already installed.
pub fn init_tracing(level: tracing::Level) -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_directive = format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_ascii_lowercase()
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_thread_ids(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
