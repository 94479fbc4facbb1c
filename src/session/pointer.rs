use std::sync::{Arc, Weak};

use uuid::Uuid;

use crate::names::NameConversionEngine;

use super::{RegistrySession, SessionCore};

/// Durable handle to a [`RegistrySession`].
///
/// Holds an opaque token plus a weak reference to the session snapshot,
/// never a live session, so callers can carry it across asynchronous
/// boundaries without pinning the snapshot alive. Re-resolution tolerates
/// the snapshot having been superseded and dropped: it returns `None`
/// rather than a stale session.
#[derive(Clone, Debug)]
pub struct SessionPointer {
    token: Uuid,
    core: Weak<SessionCore>,
    names: NameConversionEngine,
}

impl SessionPointer {
    pub(crate) fn new(session: &RegistrySession) -> Self {
        Self {
            token: Uuid::new_v4(),
            core: Arc::downgrade(session.core()),
            names: session.names().clone(),
        }
    }

    /// Opaque identity of this pointer.
    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Re-resolve the session, or `None` if its snapshot is gone.
    pub fn dereference(&self) -> Option<RegistrySession> {
        self.core
            .upgrade()
            .map(|core| RegistrySession::from_parts(core, self.names.clone()))
    }
}
