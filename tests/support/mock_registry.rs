// ABOUTME: In-process mock of the Docker Hub tag listing API.
// ABOUTME: Serves paged JSON over hyper and records every request it receives.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub at: Instant,
}

impl RecordedRequest {
    /// Value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
    }
}

enum Behaviour {
    /// Serve these pages of tag names for any repository.
    Pages(Vec<Vec<String>>),
    /// Answer every request with this status and an empty JSON object.
    Status(u16),
    /// Answer every request with this body and status 200.
    Body(String),
}

struct State {
    base_url: String,
    behaviour: Behaviour,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockRegistry {
    state: Arc<State>,
    handle: JoinHandle<()>,
}

impl MockRegistry {
    /// Serve `pages` of tag names, linking them with `next` URLs.
    pub async fn with_pages<S: Into<String>>(pages: Vec<Vec<S>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|page| page.into_iter().map(Into::into).collect())
            .collect();
        Self::start(Behaviour::Pages(pages)).await
    }

    /// Serve a single page holding every tag in `tags`.
    pub async fn with_tags(tags: &[&str]) -> Self {
        Self::with_pages(vec![tags.to_vec()]).await
    }

    /// Fail every request with `status`.
    pub async fn failing(status: u16) -> Self {
        Self::start(Behaviour::Status(status)).await
    }

    /// Answer every request with a raw body.
    pub async fn with_body(body: &str) -> Self {
        Self::start(Behaviour::Body(body.to_string())).await
    }

    async fn start(behaviour: Behaviour) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock registry");
        let addr: SocketAddr = listener.local_addr().expect("mock registry address");

        let state = Arc::new(State {
            base_url: format!("http://{addr}"),
            behaviour,
            requests: Mutex::new(Vec::new()),
        });

        let server_state = state.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let state = server_state.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let state = state.clone();
                        async move { Ok::<_, Infallible>(state.respond(&req)) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { state, handle }
    }

    pub fn url(&self) -> &str {
        &self.state.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockRegistry {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl State {
    fn respond(&self, req: &Request<Incoming>) -> Response<Full<Bytes>> {
        let recorded = RecordedRequest {
            path: req.uri().path().to_string(),
            query: req.uri().query().unwrap_or_default().to_string(),
            at: Instant::now(),
        };
        let page: usize = recorded
            .param("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);
        let page_size = recorded.param("page_size").unwrap_or("100").to_string();
        let path = recorded.path.clone();
        self.requests.lock().unwrap().push(recorded);

        match &self.behaviour {
            Behaviour::Status(status) => json_response(*status, "{}".to_string()),
            Behaviour::Body(body) => json_response(200, body.clone()),
            Behaviour::Pages(pages) => {
                let results: Vec<serde_json::Value> = pages
                    .get(page - 1)
                    .map(|names| {
                        names
                            .iter()
                            .map(|name| {
                                serde_json::json!({
                                    "name": name,
                                    "last_updated": "2024-05-01T10:00:00.000000Z",
                                    "full_size": 1024,
                                    "digest": format!("sha256:{name}"),
                                    "tag_status": "active",
                                })
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                let next = (page < pages.len()).then(|| {
                    format!(
                        "{}{}?page={}&page_size={}",
                        self.base_url,
                        path,
                        page + 1,
                        page_size
                    )
                });
                let total: usize = pages.iter().map(Vec::len).sum();
                let body = serde_json::json!({
                    "count": total,
                    "next": next,
                    "previous": null,
                    "results": results,
                });
                json_response(200, body.to_string())
            }
        }
    }
}

fn json_response(status: u16, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("valid mock response")
}
