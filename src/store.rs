//! Storage contracts and built-in backends for the persisted staff session.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, session::Session};

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence contract for the staff session.
///
/// The client funnels every session mutation through this trait: login and successful
/// refreshes call [`save`](SessionStore::save), logout and terminal refresh failures call
/// [`clear`](SessionStore::clear). No other component writes the session.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Fetches the current session, if one is established.
	fn load(&self) -> StoreFuture<'_, Option<Session>>;

	/// Persists or replaces the current session.
	fn save(&self, session: Session) -> StoreFuture<'_, ()>;

	/// Destroys the current session, returning the previous record if one existed.
	fn clear(&self) -> StoreFuture<'_, Option<Session>>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
