//! The running match, and what must be released when it stops

use crate::ClientError;
use game_core::StopHandle;

/// Stop flag of a running loop plus the resources it keeps alive
/// (event listeners and the match they capture)
pub struct Session<R> {
    stop: StopHandle,
    resources: R,
}

/// Holds at most one running session
pub struct SessionSlot<R> {
    current: Option<Session<R>>,
}

impl<R> SessionSlot<R> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Install a session. A second session is stopped and its resources dropped.
    pub fn begin(&mut self, stop: StopHandle, resources: R) -> Result<(), ClientError> {
        if self.is_running() {
            stop.stop();
            return Err(ClientError::AlreadyRunning);
        }
        self.current = Some(Session { stop, resources });
        Ok(())
    }

    /// Stop the current session and drop its resources. Returns false if idle.
    pub fn end(&mut self) -> bool {
        match self.current.take() {
            Some(session) => {
                session.stop.stop();
                drop(session.resources);
                true
            }
            None => false,
        }
    }
}

impl<R> Default for SessionSlot<R> {
    fn default() -> Self {
        Self::new()
    }
}
