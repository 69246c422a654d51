//! Repository implementations for database access
//!
//! Each repository implements a `msgboard-core` store trait, so the
//! service never sees SQL.

pub mod messages;

pub use messages::PgMessageStore;
