use dioxus::prelude::*;

use crate::Client;

/// View state of one remote read.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,

    /// A request has been sent and has not settled yet.
    pub pending: bool,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            pending: false,
        }
    }
}

impl<T> FetchState<T> {
    /// Nothing requested yet.
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            pending: false,
        }
    }

    /// Marks a request as sent.
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Stores the outcome of a request. A failed refresh keeps the last good
    /// data around so the page does not go blank.
    pub fn settle(&mut self, result: Result<T, String>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        self.loading = false;
        self.pending = false;
    }
}

/// A remote read bound to a component, with a handle to run it again.
pub struct RemoteData<T: 'static> {
    pub state: Signal<FetchState<T>>,
    fetch: Resource<()>,
}

impl<T: 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteData<T> {}

impl<T: 'static> RemoteData<T> {
    pub fn new(state: Signal<FetchState<T>>, fetch: Resource<()>) -> Self {
        Self { state, fetch }
    }

    /// Issues a fresh request, showing the loading state until it settles.
    /// A request that is still out is left to finish instead.
    pub fn retry(&mut self) {
        self.state.write().loading = true;
        self.restart_unless_pending();
    }

    /// Issues a fresh request in the background, keeping what is on screen.
    /// Skipped while the previous request is still out.
    pub fn refresh(&mut self) -> bool {
        self.restart_unless_pending()
    }

    // Restarting drops the running future together with its request
    fn restart_unless_pending(&mut self) -> bool {
        if self.state.peek().pending {
            return false;
        }
        self.fetch.restart();
        true
    }
}

/// The client the application root constructed.
pub fn use_client() -> Result<Client, String> {
    use_context::<Result<Client, String>>()
}

pub(super) async fn sleep(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle() {
        let mut state: FetchState<u32> = FetchState::default();
        assert!(state.loading);

        state.settle(Ok(1));
        assert_eq!(
            state,
            FetchState {
                data: Some(1),
                loading: false,
                error: None,
                pending: false
            }
        );

        state.loading = true;
        state.settle(Err("refused".to_owned()));
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error.as_deref(), Some("refused"));
        assert!(!state.loading);

        state.settle(Ok(2));
        assert_eq!(state.error, None);
        assert_eq!(state.data, Some(2));
    }

    #[test]
    fn test_pending_until_settled() {
        let mut state: FetchState<u32> = FetchState::default();
        assert!(!state.pending);

        state.begin();
        assert!(state.pending);
        assert!(state.loading);

        state.settle(Ok(7));
        assert!(!state.pending);

        state.begin();
        assert!(state.pending);
        assert!(!state.loading, "a background request keeps the page as is");
        state.settle(Err("timed out".to_owned()));
        assert!(!state.pending);
        assert_eq!(state.data, Some(7));
    }

    #[test]
    fn test_idle() {
        let state: FetchState<String> = FetchState::idle();
        assert!(!state.loading);
        assert!(state.data.is_none());
    }
}
