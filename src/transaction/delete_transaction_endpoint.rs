use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{AppState, Error, database_id::TransactionId, transaction::delete_transaction};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for a delete request.
#[derive(Debug, PartialEq, Serialize)]
pub struct DeleteStatus {
    /// Always "ok".
    pub status: &'static str,
}

/// A route handler for deleting a transaction.
///
/// Responds with `{"status": "ok"}` whether or not the transaction existed.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeleteStatus>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let rows_affected = delete_transaction(transaction_id, &connection)?;
    if rows_affected == 0 {
        tracing::debug!("Transaction {transaction_id} was already deleted");
    }

    Ok(Json(DeleteStatus { status: "ok" }))
}
