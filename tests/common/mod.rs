#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

const REQUIRED: [&str; 4] = ["full_name", "email", "phone", "interest"];

#[derive(Default)]
pub struct Store {
    pub leads: Vec<Value>,
    pub delete_calls: usize,
    next_id: i64,
}

impl Store {
    pub fn has_email(&self, email: &str) -> bool {
        self.leads.iter().any(|lead| lead["email"] == email)
    }

    pub fn id_of(&self, email: &str) -> Option<i64> {
        self.leads
            .iter()
            .find(|lead| lead["email"] == email)
            .and_then(|lead| lead["id"].as_i64())
    }
}

type Shared = Arc<Mutex<Store>>;

/// A stand-in leads backend answering the way the real one does.
pub struct MockBackend {
    pub base_url: String,
    pub store: Shared,
}

pub static BACKEND: Lazy<MockBackend> = Lazy::new(|| {
    let store = Shared::default();
    let base_url = serve_in_background(backend_router(Arc::clone(&store)));
    MockBackend { base_url, store }
});

pub fn backend_router(store: Shared) -> Router {
    Router::new()
        .route("/api/leads", get(list_leads).post(create_lead))
        .route("/api/leads/:id", delete(delete_lead))
        .with_state(store)
}

/// Serves `router` from a dedicated thread so it outlives each test runtime.
pub fn serve_in_background(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("mock runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    format!("http://{addr}")
}

pub fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{}-{nanos}@example.com", std::process::id())
}

async fn list_leads(State(store): State<Shared>) -> Json<Value> {
    let store = store.lock().unwrap();
    Json(json!({ "success": true, "leads": store.leads }))
}

async fn create_lead(State(store): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    for field in REQUIRED {
        let present = body[field].as_str().is_some_and(|value| !value.is_empty());
        if !present {
            return reply(
                StatusCode::BAD_REQUEST,
                false,
                &format!("The field {field} is required"),
            );
        }
    }

    let email = body["email"].as_str().unwrap_or_default();
    if !email.contains('@') {
        return reply(StatusCode::BAD_REQUEST, false, "Invalid email address");
    }

    let mut store = store.lock().unwrap();
    if store.has_email(email) {
        return reply(StatusCode::BAD_REQUEST, false, "Email already registered");
    }

    store.next_id += 1;
    let id = store.next_id;
    store.leads.push(json!({
        "id": id,
        "full_name": body["full_name"],
        "email": email,
        "phone": body["phone"],
        "interest": body["interest"],
        "registered_at": "Sun, 18 Oct 2026 10:04:00 GMT",
    }));

    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Lead registered successfully", "lead_id": id })),
    )
}

async fn delete_lead(State(store): State<Shared>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    let mut store = store.lock().unwrap();
    store.delete_calls += 1;
    let before = store.leads.len();
    store.leads.retain(|lead| lead["id"].as_i64() != Some(id));

    if store.leads.len() < before {
        reply(StatusCode::OK, true, "Lead deleted successfully")
    } else {
        reply(StatusCode::NOT_FOUND, false, "Lead not found")
    }
}

fn reply(status: StatusCode, success: bool, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": success, "message": message })))
}
