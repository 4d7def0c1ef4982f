use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Customer;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CustomerResponse {
    pub success: bool,
    pub customer: Customer,
}

// GET /customer/:phone
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .store
        .get_customer(&phone)
        .ok_or(AppError::CustomerNotFound)?;

    Ok(Json(CustomerResponse {
        success: true,
        customer,
    }))
}
