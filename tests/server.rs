//! Live server over TCP: raw HTTP/1.1 in, raw HTTP/1.1 out.

use std::net::SocketAddr;

use remapi::{Server, greet};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn start() -> (SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = Server::from_listener(listener);
    let addr = server.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let app = greet::routes().unwrap();
        server
            .serve_with_shutdown(app, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
    });

    (addr, tx, handle)
}

async fn post(addr: SocketAddr, path: &str, content_type: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "POST {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len(),
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn split(response: &str) -> (&str, &str) {
    response.split_once("\r\n\r\n").unwrap()
}

#[tokio::test]
async fn serves_greetings_and_shuts_down() {
    let (addr, shutdown, handle) = start().await;

    let res = post(addr, "/hello", "application/json", r#"{"name":"Tarou","family":"Yamada"}"#).await;
    let (head, body) = split(&res);
    assert!(head.starts_with("HTTP/1.1 200 OK"), "{head}");
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"), "{head}");
    assert_eq!(body, r#"{"status":0,"message":"Hello, Tarou Yamada!"}"#);

    let res = post(addr, "/seeyou", "application/json", r#"{"key1":"Tarou","key2":"Yamada"}"#).await;
    assert_eq!(split(&res).1, r#"{"status":0,"message":"See you, Tarou Yamada!"}"#);

    let res = post(addr, "/thankyou", "application/json", r#"{"name":"Tarou","key2":"Yamada"}"#).await;
    assert_eq!(split(&res).1, r#"{"status":0,"message":"Thank you, Tarou Yamada!"}"#);

    shutdown.send(()).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn error_statuses_over_the_wire() {
    let (addr, shutdown, handle) = start().await;

    let res = post(addr, "/seeyou", "application/json", r#"{"key1":"Tarou"}"#).await;
    assert!(res.starts_with("HTTP/1.1 500"), "{res}");

    let res = post(addr, "/hello", "application/json", "{not json").await;
    assert!(res.starts_with("HTTP/1.1 400"), "{res}");

    let res = post(addr, "/hello", "text/plain", r#"{"name":"a","family":"b"}"#).await;
    assert!(res.starts_with("HTTP/1.1 415"), "{res}");

    shutdown.send(()).unwrap();
    handle.await.unwrap();
}
