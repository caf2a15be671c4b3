use std::future::Future;

/// Lets callback-style callers consume any client operation.
///
/// ```ignore
/// client
///     .get_lobby()
///     .settle(|lobby| render(lobby), |err| show_error(err))
///     .await;
/// ```
pub trait Settle<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Awaits the operation and hands its outcome to exactly one of the two
    /// callbacks.
    fn settle<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T),
        F: FnOnce(E),
    {
        async move {
            match self.await {
                Ok(value) => on_success(value),
                Err(err) => on_failure(err),
            }
        }
    }
}

impl<Fut, T, E> Settle<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io, time::Duration};

    use super::*;
    use crate::{
        client::tests::{client, FakeTransport},
        error::TransportError,
    };

    #[tokio::test]
    async fn test_settle_success() {
        let client = client(FakeTransport::body(r#"{"builders": [], "titans": []}"#));
        let calls = RefCell::new(Vec::new());

        client
            .get_leader_board()
            .settle(
                |board| calls.borrow_mut().push(format!("ok {}", board.as_value()["titans"])),
                |err| calls.borrow_mut().push(format!("err {err}")),
            )
            .await;

        assert_eq!(calls.into_inner(), ["ok []"]);
    }

    #[tokio::test]
    async fn test_settle_failure() {
        let transport = FakeTransport::new(|_| {
            let err: TransportError = io::Error::from(io::ErrorKind::ConnectionRefused).into();
            (Duration::ZERO, Err(err))
        });
        let client = client(transport.clone());
        let mut succeeded = false;
        let mut failed_url = None;

        client
            .get_lobby()
            .settle(|_| succeeded = true, |err| failed_url = Some(err.url))
            .await;

        assert!(!succeeded);
        assert_eq!(
            failed_url.map(|url| url.path().to_owned()).as_deref(),
            Some("/v1/lobby/island-defense")
        );
        assert_eq!(transport.requests().len(), 1);
    }
}
