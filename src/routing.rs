//! Application router configuration.

use axum::{
    Router,
    response::Html,
    routing::{delete, get},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

const INDEX_PAGE: &str = include_str!("../static/index.html");

/// Return a router with all the app's routes.
///
/// Static assets are served from the `static/` directory relative to the
/// working directory. The index page is compiled into the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .with_state(state)
}

/// The root path '/' serves the page that drives the transactions API.
async fn get_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
