//! Navigation collaborator used to force the application back to the login entry point.

// self
use crate::_prelude::*;

/// Application hook invoked when the session becomes unusable.
///
/// The client calls [`force_login`](Navigator::force_login) exactly once per terminal
/// refresh failure and once per logout; the application decides what "navigate to `/login`"
/// means for its surface (route change, process exit, prompt).
pub trait Navigator
where
	Self: Send + Sync,
{
	/// Forces navigation to the login entry point.
	fn force_login(&self);
}

/// Default navigator that ignores the signal; suitable for headless tooling.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;
impl Navigator for NoopNavigator {
	fn force_login(&self) {}
}
