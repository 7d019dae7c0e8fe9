//! # Word Friends
//!
//! Counts how many dictionary words can be reached from a query word by
//! hopping between "friends": words of nearly the same spelling.
//!
//! Two words are friends when they are identical, differ by a single
//! substitution, or one is the other with a single character appended at the
//! end. The dictionary is never turned into an explicit graph; the traversal
//! discovers edges lazily by scanning the still-unvisited words.

pub mod dictionary;
pub mod error;
pub mod friends;
pub mod network;
pub mod visited;

pub use dictionary::{load_dictionary, read_dictionary, DictionaryOptions};
pub use error::{FriendsError, Result};
pub use friends::{are_friends, Relation};
pub use network::{count_component, ComponentReport, Discovery, FriendNetwork, QueryPolicy};
pub use visited::VisitedSet;

/// Dictionaries at least this large are scanned with rayon
pub const PARALLEL_SCAN_THRESHOLD: usize = 4096;
