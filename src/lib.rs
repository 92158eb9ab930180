//! Hash table with a fixed number of buckets and separate chaining.
//!
//! Keys and values are owned copies of the caller's text. Capacity changes
//! only through an explicit [`HashTable::resize`], which builds a new table
//! with twice the buckets and leaves the original untouched.

/// Demo binary configuration loading.
pub mod config;
/// Flexible logging (formatting, filters).
pub mod logging;
/// The hash table: djb2 hashing, chained pairs, table operations.
pub mod table;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Error types, status codes and the result alias.
pub use chaintable_error::{ErrorExt, StatusCode, TableError, TableResult};
/// Demo binary settings loaded from defaults and `CHAINTABLE_*` variables.
pub use self::config::Settings;
/// Hash function and the table itself.
pub use table::{djb2, hash, HashTable};
