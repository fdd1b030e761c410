use robot_mover::{
    Action, ClientConfig, CommandApi, CommandClient, CommandError, Heading, HttpTransport,
    RobotState,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};

const STATE_BODY: &str = r#"{"grid":{"width":10,"height":10,"cells":[]},"roomba":{"x":2,"y":3,"direction":"EAST"}}"#;

/// Serve one canned HTTP response and hand back the request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> anyhow::Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });
    Ok((format!("http://{}", addr), server))
}

#[tokio::test]
async fn posts_to_action_endpoint() -> anyhow::Result<()> {
    let (url, server) = serve_once("200 OK", STATE_BODY).await?;
    let client = CommandClient::new(HttpTransport::new(&url)?);

    let snapshot = client.send_action(Action::Rotate).await?;
    assert_eq!(snapshot.robot, RobotState::new(2, 3, Heading::East));

    let head = server.await?;
    assert!(head.starts_with("POST /api/turn-right HTTP/1.1"), "{}", head);
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));
    Ok(())
}

#[tokio::test]
async fn fetches_state_with_get() -> anyhow::Result<()> {
    let (url, server) = serve_once("200 OK", STATE_BODY).await?;
    let client = CommandClient::new(HttpTransport::new(&url)?);

    client.fetch_state().await?;
    let head = server.await?;
    assert!(head.starts_with("GET /api/state HTTP/1.1"), "{}", head);
    Ok(())
}

#[tokio::test]
async fn server_error_maps_to_status() -> anyhow::Result<()> {
    let (url, server) = serve_once("500 Internal Server Error", STATE_BODY).await?;
    let client = CommandClient::new(HttpTransport::new(&url)?);

    let err = client.send_action(Action::Advance).await.unwrap_err();
    assert_eq!(err, CommandError::Status(500));
    server.await?;
    Ok(())
}

#[tokio::test]
async fn refused_connection_maps_to_transport() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = CommandClient::new(HttpTransport::new(&format!("http://{}", addr))?);
    let err = client.send_action(Action::Reset).await.unwrap_err();
    assert!(matches!(err, CommandError::Transport(_)), "got {:?}", err);
    Ok(())
}

/// Accept one connection and hold it open without ever answering.
async fn silent_server() -> anyhow::Result<(String, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });
    Ok((format!("http://{}", addr), server))
}

#[tokio::test]
async fn timeout_maps_to_transport() -> anyhow::Result<()> {
    let (url, server) = silent_server().await?;
    let transport = HttpTransport::with_timeout(&url, Duration::from_millis(200))?;
    let client = CommandClient::new(transport);

    let started = Instant::now();
    let err = client.send_action(Action::Advance).await.unwrap_err();
    assert!(matches!(err, CommandError::Transport(_)), "got {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(10));
    server.abort();
    Ok(())
}

#[tokio::test]
async fn config_timeout_applies() -> anyhow::Result<()> {
    let (url, server) = silent_server().await?;
    let config = ClientConfig {
        base_url: url,
        timeout: Some(Duration::from_millis(200)),
    };
    let client = CommandClient::new(HttpTransport::with_config(&config)?);

    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, CommandError::Transport(_)), "got {:?}", err);
    server.abort();
    Ok(())
}

#[test]
fn default_config_has_no_timeout() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://127.0.0.1:5000");
    assert!(config.timeout.is_none());
    assert!(HttpTransport::with_config(&config).is_ok());
}

#[test]
fn rejects_invalid_base_url() {
    assert!(HttpTransport::new("not a url").is_err());
}
