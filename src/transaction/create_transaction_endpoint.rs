//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::{TransactionBuilder, create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for creating a transaction.
///
/// Every field is optional so that an absent field is reported as
/// [Error::MissingFields] instead of being rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionRequest {
    /// When the transaction occurred. Not trimmed or otherwise checked.
    pub date: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The category of the transaction.
    pub category: Option<String>,
    /// Conventionally "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// A JSON number or a string holding a number.
    pub amount: Option<Value>,
}

impl TransactionRequest {
    /// Check the request and convert it into a [TransactionBuilder].
    ///
    /// The description, category and type are trimmed. Presence of every field
    /// is checked before the amount is parsed.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::MissingFields] if any field is absent, null, or empty, or the
    ///   amount is the number zero,
    /// - or [Error::InvalidAmount] if the amount is not a finite number or a
    ///   string that parses as one.
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        let date = self.date.filter(|date| !date.is_empty());
        let description = trim_non_empty(self.description);
        let category = trim_non_empty(self.category);
        let kind = trim_non_empty(self.kind);
        let amount = self.amount.filter(|amount| !is_empty_amount(amount));

        let (Some(date), Some(description), Some(category), Some(kind), Some(amount)) =
            (date, description, category, kind, amount)
        else {
            return Err(Error::MissingFields);
        };

        Ok(TransactionBuilder {
            date,
            description,
            category,
            kind,
            amount: parse_amount(amount)?,
        })
    }
}

fn trim_non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// An amount of `""` or a JSON number equal to zero counts as not given.
///
/// The string `"0"` is still a given amount.
fn is_empty_amount(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Read `amount` as a finite number.
///
/// Only JSON numbers and numeric strings are accepted. Booleans, arrays and
/// objects are rejected rather than coerced.
fn parse_amount(amount: Value) -> Result<f64, Error> {
    let parsed = match amount {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|amount| amount.is_finite())
        .ok_or(Error::InvalidAmount)
}

/// The response body for a newly created transaction.
#[derive(Debug, PartialEq, Serialize)]
pub struct TransactionCreated {
    /// The ID the database assigned to the transaction.
    pub id: TransactionId,
}

/// A route handler for creating a new transaction, responds with the new ID and
/// `201 Created` on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(request): Json<TransactionRequest>,
) -> Result<impl IntoResponse, Error> {
    let builder = request.validate()?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = create_transaction(builder, &connection)?;
    tracing::debug!("Created transaction {}", transaction.id);

    Ok((
        StatusCode::CREATED,
        Json(TransactionCreated { id: transaction.id }),
    ))
}


#[cfg(test)]
mod endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints,
        test_utils::{get_test_server, get_test_state},
        transaction::count_transactions,
    };

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": "4.50"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({"id": 1}));
        assert_eq!(
            count_transactions(&state.db_connection.lock().unwrap()).unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn created_transaction_is_listed() {
        let server = get_test_server(get_test_state());

        server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": "4.50"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .assert_json(&json!([{
                "id": 1,
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": 4.5
            }]));
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": "abc"
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "Invalid amount"}));
        assert_eq!(
            count_transactions(&state.db_connection.lock().unwrap()).unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn missing_category_is_rejected() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "type": "expense",
                "amount": 4.5
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "Missing required fields"}));
        assert_eq!(
            count_transactions(&state.db_connection.lock().unwrap()).unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn zero_amount_is_rejected_as_missing() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": 0
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "Missing required fields"}));
        assert_eq!(
            count_transactions(&state.db_connection.lock().unwrap()).unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn boolean_amount_is_rejected() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-05-01",
                "description": "Coffee",
                "category": "Food",
                "type": "expense",
                "amount": true
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "Invalid amount"}));
    }

    #[tokio::test]
    async fn malformed_json_has_no_structured_body() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .text("{\"date\": ")
            .content_type("application/json")
            .await;

        assert!(response.status_code().is_client_error());
        assert!(serde_json::from_str::<serde_json::Value>(&response.text()).is_err());
    }
}
