// Property-based tests for the HTTP error contract

use axum::http::StatusCode;
use proptest::prelude::*;

use common::errors::{AppError, DatabaseError};
use common::response::ApiResponse;

// Every client-input error must map to 400, regardless of its payload.
#[test]
fn property_client_errors_always_map_to_400() {
    proptest!(|(token in ".{0,32}")| {
        let errors = [
            AppError::InvalidId(token.clone()),
            AppError::InvalidInput(token.clone()),
            AppError::MissingIds,
        ];
        for err in errors {
            prop_assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    });
}

// Not-found is 404 for any id, and the message names the id.
#[test]
fn property_not_found_maps_to_404_naming_the_id() {
    proptest!(|(id in any::<i32>())| {
        let err = AppError::NotFound(id);
        prop_assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        prop_assert_eq!(err.code(), "NOT_FOUND");
        prop_assert!(err.client_message().contains(&id.to_string()));
    });
}

// Internal failures are 500 and never leak the underlying cause to a client.
#[test]
fn property_internal_errors_are_genericized() {
    proptest!(|(detail in ".{1,64}")| {
        let err = AppError::Internal(DatabaseError::QueryFailed(detail.clone()));
        prop_assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        prop_assert_eq!(err.code(), "INTERNAL_ERROR");
        prop_assert_eq!(err.client_message(), "Internal server error");
    });
}

// The success envelope always carries status/message/data; the error envelope
// always omits data.
#[test]
fn property_envelope_shape_is_stable() {
    proptest!(|(message in ".{0,64}", payload in any::<i64>())| {
        let success = serde_json::to_value(ApiResponse::success(message.clone(), payload)).unwrap();
        prop_assert_eq!(success["status"].as_str(), Some("success"));
        prop_assert_eq!(success["message"].as_str(), Some(message.as_str()));
        prop_assert_eq!(success["data"].as_i64(), Some(payload));

        let error = serde_json::to_value(ApiResponse::error(message.clone())).unwrap();
        prop_assert_eq!(error["status"].as_str(), Some("error"));
        prop_assert!(error.get("data").is_none());
    });
}
