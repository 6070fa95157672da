/// Identifier of one outbound call, unique per controller.
pub type Attempt = u64;

/// One feature's view of its current request: exactly one phase at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Request state plus the attempt counter that gates commits.
///
/// `begin` stamps a new outbound call and moves to `Loading`, dropping any
/// previous payload. `settle` commits a result only when it belongs to the
/// most recently begun call; a stale settlement is reported back to the
/// caller and otherwise ignored. Controllers that serialize calls refuse to
/// `begin` while `Loading`; controllers that supersede simply `begin` again
/// and let the older attempt fall through here on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLifecycle<T> {
    state: RequestState<T>,
    latest: Attempt,
}

impl<T> RequestLifecycle<T> {
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Starts a new attempt and returns its id for stamping onto the effect.
    pub fn begin(&mut self) -> Attempt {
        self.latest += 1;
        self.state = RequestState::Loading;
        self.latest
    }

    /// Commits a settled result if `attempt` is still the latest one.
    /// Returns whether the result was committed.
    pub fn settle(&mut self, attempt: Attempt, result: Result<T, String>) -> bool {
        if attempt != self.latest {
            return false;
        }
        self.state = match result {
            Ok(data) => RequestState::Success(data),
            Err(message) => RequestState::Failed(message),
        };
        true
    }
}

impl<T> Default for RequestLifecycle<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            latest: 0,
        }
    }
}
