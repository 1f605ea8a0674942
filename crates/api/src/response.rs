//! Shared response envelope types for API handlers.
//!
//! Auxiliary endpoints use a `{ "data": ... }` envelope. The prediction
//! endpoint keeps its flat `{ "predicted_price": ... }` shape for existing
//! clients.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: report }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
