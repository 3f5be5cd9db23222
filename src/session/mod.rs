//! Session flag storage.
//!
//! A single persisted value records whether the caller is believed to be
//! logged in. Only the interceptors mutate it; consumers elsewhere read it.

mod file;
mod memory;
mod traits;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use traits::{LOGGED_IN_KEY, SessionFlag, SessionStore};
