pub mod hash;
pub mod hash_table;
mod pair;

// Publicly re-export the table API to simplify access from external code.
pub use hash::{djb2, hash};
pub use hash_table::HashTable;
