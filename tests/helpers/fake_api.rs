// ABOUTME: In-process axum server standing in for the trainer profile and routine APIs
// ABOUTME: Binds an ephemeral port and records every routine it receives

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Shared state behind the fake API
#[derive(Clone, Default)]
pub struct FakeApiState {
    profiles: Arc<Mutex<HashMap<Uuid, Option<f64>>>>,
    routines: Arc<Mutex<Vec<Value>>>,
    reject_routines: Arc<AtomicBool>,
    profile_patches: Arc<AtomicUsize>,
}

/// Running fake API
pub struct FakeApi {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    state: FakeApiState,
}

impl FakeApi {
    /// Start the server on 127.0.0.1 with an OS-assigned port
    pub async fn start() -> Self {
        let state = FakeApiState::default();
        let router = Router::new()
            .route(
                "/api/trainers/:trainer_id/profile",
                get(get_profile).patch(patch_profile),
            )
            .route("/api/routines", post(create_routine))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Give a trainer a profile with the given default percent
    pub fn set_profile_percent(&self, trainer_id: Uuid, percent: Option<f64>) {
        self.state
            .profiles
            .lock()
            .unwrap()
            .insert(trainer_id, percent);
    }

    /// Default percent currently held by the fake profile store
    pub fn profile_percent(&self, trainer_id: Uuid) -> Option<f64> {
        self.state
            .profiles
            .lock()
            .unwrap()
            .get(&trainer_id)
            .copied()
            .flatten()
    }

    /// Number of PATCH calls received
    pub fn profile_patches(&self) -> usize {
        self.state.profile_patches.load(Ordering::SeqCst)
    }

    /// Make the routine endpoint answer 422 until switched back
    pub fn reject_routines(&self, reject: bool) {
        self.state.reject_routines.store(reject, Ordering::SeqCst);
    }

    /// Routines received so far
    pub fn routines(&self) -> Vec<Value> {
        self.state.routines.lock().unwrap().clone()
    }
}

/// Base URL on which nothing listens
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

async fn get_profile(
    State(state): State<FakeApiState>,
    Path(trainer_id): Path<Uuid>,
) -> Response {
    let profiles = state.profiles.lock().unwrap();
    match profiles.get(&trainer_id) {
        Some(percent) => Json(json!({
            "trainer_id": trainer_id,
            "display_name": "Coach",
            "default_percent_increment": percent,
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn patch_profile(
    State(state): State<FakeApiState>,
    Path(trainer_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.profile_patches.fetch_add(1, Ordering::SeqCst);
    let percent = body["default_percent_increment"].as_f64();
    state.profiles.lock().unwrap().insert(trainer_id, percent);
    StatusCode::NO_CONTENT
}

async fn create_routine(State(state): State<FakeApiState>, Json(body): Json<Value>) -> Response {
    if state.reject_routines.load(Ordering::SeqCst) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "client has reached the routine limit\ntrace-id: abc123",
        )
            .into_response();
    }
    let mut routines = state.routines.lock().unwrap();
    routines.push(body);
    let id = format!("routine-{}", routines.len());
    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}
