use super::*;
use crate::mock_generator::spawn_generator;
use axum::http::StatusCode;
use portfolio_shared::protocol::AttachmentPart;

fn request_with_avatar() -> GenerateRequest {
    GenerateRequest {
        portfolio_data: r#"{"fullName":"Alex"}"#.to_string(),
        parts: vec![AttachmentPart {
            name: "avatar",
            file_name: "me.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: b"\x89PNG".to_vec(),
        }],
    }
}

#[test]
fn endpoint_is_generate_route_on_server_origin() {
    let transport = HttpGenerateTransport::new("http://127.0.0.1:8080").expect("transport");
    assert_eq!(
        transport.endpoint().as_str(),
        "http://127.0.0.1:8080/generate"
    );

    let transport = HttpGenerateTransport::new("https://builder.example/app/").expect("transport");
    assert_eq!(
        transport.endpoint().as_str(),
        "https://builder.example/generate"
    );

    let transport =
        HttpGenerateTransport::new("http://builder.example/builder").expect("transport");
    assert_eq!(transport.endpoint().as_str(), "http://builder.example/generate");
}

#[test]
fn rejects_unparseable_server_url() {
    let err = HttpGenerateTransport::new("not a url")
        .err()
        .expect("invalid url");
    assert!(err.to_string().contains("invalid generator url"));
}

#[tokio::test]
async fn posts_attachment_parts_and_portfolio_data() {
    let server = spawn_generator(StatusCode::OK, b"zip-bytes")
        .await
        .expect("spawn server");
    let transport = HttpGenerateTransport::new(&server.url).expect("transport");

    let archive = transport
        .generate(request_with_avatar())
        .await
        .expect("generate");
    assert_eq!(archive, b"zip-bytes");

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    let parts = &requests[0];
    let names: Vec<&str> = parts.iter().map(|part| part.name.as_str()).collect();
    assert_eq!(names, vec!["avatar", "portfolioData"]);

    assert_eq!(parts[0].file_name.as_deref(), Some("me.png"));
    assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(parts[0].bytes, b"\x89PNG");

    assert_eq!(parts[1].file_name, None);
    assert_eq!(parts[1].bytes, br#"{"fullName":"Alex"}"#);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = spawn_generator(StatusCode::INTERNAL_SERVER_ERROR, b"boom")
        .await
        .expect("spawn server");
    let transport = HttpGenerateTransport::new(&server.url).expect("transport");

    let result = transport.generate(request_with_avatar()).await;

    assert!(result.is_err());
    assert_eq!(server.requests().await.len(), 1);
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let transport = HttpGenerateTransport::new(&format!("http://{addr}")).expect("transport");
    assert!(transport.generate(request_with_avatar()).await.is_err());
}

#[test]
fn rejects_invalid_mime_type() {
    let mut request = request_with_avatar();
    request.parts[0].mime_type = "not-a-mime".to_string();
    assert!(multipart_form(request).is_err());
}
