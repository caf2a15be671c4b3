use std::time::Duration;

use idstats_api::prelude::*;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// Serves a single canned HTTP response and reports the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }

        let request = String::from_utf8_lossy(&request).into_owned();
        let request_line = request.lines().next().unwrap_or_default().to_owned();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (base, rx)
}

fn client(base: &str) -> RemoteDataClient {
    let config = ClientConfig::new(base)
        .unwrap()
        .with_timeout(Some(Duration::from_secs(5)));
    RemoteDataClient::build(&config).unwrap()
}

#[tokio::test]
async fn test_lobby_round_trip() {
    let (base, request_line) = serve_once("200 OK", r#"{"open":[{"host":"Alice"}]}"#).await;

    let lobby = client(&base).get_lobby().await.unwrap();
    assert_eq!(lobby.as_value()["open"][0]["host"], "Alice");
    assert_eq!(
        request_line.await.unwrap(),
        "GET /v1/lobby/island-defense HTTP/1.1"
    );
}

#[tokio::test]
async fn test_player_query() {
    let (base, request_line) = serve_once("200 OK", r#"{"player":{"name":"Alice","realm":"USEast"}}"#).await;

    let alice = Username::new("Alice").unwrap();
    let record = client(&base).get_player(&alice).await.unwrap();
    assert_eq!(record.as_value()["player"]["realm"], "USEast");
    assert_eq!(
        request_line.await.unwrap(),
        "GET /v1/player/island-defense?name=Alice HTTP/1.1"
    );
}

#[tokio::test]
async fn test_error_status() {
    let (base, _request_line) = serve_once("404 Not Found", r#"{"error":"unknown"}"#).await;

    let err = client(&base).get_leader_board().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err.cause {
        TransportError::Status { body, .. } => assert_eq!(body, r#"{"error":"unknown"}"#),
        other => panic!("unexpected cause: {other}"),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = client(&format!("http://127.0.0.1:{port}"))
        .get_lobby()
        .await
        .unwrap_err();
    assert!(matches!(err.cause, TransportError::Http(_)));
    assert_eq!(err.status(), None);
    assert_eq!(err.url.port(), Some(port));
}

#[tokio::test]
async fn test_request_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (release, hold) = oneshot::channel::<()>();

    // Accepts the connection and never answers until the test is done
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        let _ = hold.await;
    });

    let config = ClientConfig::new(&base)
        .unwrap()
        .with_timeout(Some(Duration::from_millis(200)));
    let started = std::time::Instant::now();
    let err = RemoteDataClient::build(&config)
        .unwrap()
        .get_lobby()
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(5));
    match &err.cause {
        TransportError::Http(source) => assert!(source.is_timeout(), "{source}"),
        other => panic!("unexpected cause: {other}"),
    }
    assert_eq!(err.status(), None);
    let _ = release.send(());
}
