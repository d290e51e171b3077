use axum_test::{TestResponse, TestServer};
use rusqlite::Connection;

use crate::{AppState, build_router};

/// Create an [AppState] backed by a fresh in-memory database.
pub(crate) fn get_test_state() -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    AppState::new(connection).expect("Could not initialize test database")
}

/// Serve the full app router from `state`.
pub(crate) fn get_test_server(state: AppState) -> TestServer {
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn assert_content_type(response: &TestResponse, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}
