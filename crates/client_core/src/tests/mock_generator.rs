//! In-process stand-in for the portfolio generator.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use portfolio_shared::protocol::GENERATE_ROUTE;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
pub(crate) struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct GeneratorState {
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
    status: StatusCode,
    archive: Arc<Vec<u8>>,
}

pub(crate) struct MockGenerator {
    pub url: String,
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

impl MockGenerator {
    pub async fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.requests.lock().await.clone()
    }
}

async fn handle_generate(
    State(state): State<GeneratorState>,
    mut multipart: Multipart,
) -> (StatusCode, Vec<u8>) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    state.requests.lock().await.push(parts);
    (state.status, state.archive.as_ref().clone())
}

pub(crate) async fn spawn_generator(
    status: StatusCode,
    archive: &[u8],
) -> anyhow::Result<MockGenerator> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = GeneratorState {
        requests: requests.clone(),
        status,
        archive: Arc::new(archive.to_vec()),
    };
    let app = Router::new()
        .route(GENERATE_ROUTE, post(handle_generate))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(MockGenerator {
        url: format!("http://{addr}"),
        requests,
    })
}
