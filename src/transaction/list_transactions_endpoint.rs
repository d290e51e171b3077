//! Defines the endpoint for listing every transaction as JSON.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, get_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that responds with all transactions, newest first.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    get_transactions(&connection).map(Json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{assert_content_type, get_test_server, get_test_state},
        transaction::{Transaction, create_transaction},
    };

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let server = get_test_server(get_test_state());

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        assert_content_type(&response, "application/json");
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_all_fields_with_type_key() {
        let state = get_test_state();
        create_transaction(
            Transaction::build("2024-03-14", "Paycheck", "Salary", "income", 2500.0),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let server = get_test_server(state);

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([{
            "id": 1,
            "date": "2024-03-14",
            "description": "Paycheck",
            "category": "Salary",
            "type": "income",
            "amount": 2500.0,
        }]));
    }

    #[tokio::test]
    async fn lists_newest_date_first() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            for date in ["2024-01-01", "2024-01-03", "2024-01-02"] {
                create_transaction(
                    Transaction::build(date, "Lunch", "Food", "expense", 12.0),
                    &connection,
                )
                .unwrap();
            }
        }
        let server = get_test_server(state);

        let transactions: Vec<Transaction> = server.get(endpoints::TRANSACTIONS_API).await.json();

        let dates: Vec<&str> = transactions
            .iter()
            .map(|transaction| transaction.date.as_str())
            .collect();
        assert_eq!(dates, ["2024-01-03", "2024-01-02", "2024-01-01"]);
    }
}
