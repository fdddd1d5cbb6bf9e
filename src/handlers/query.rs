use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{ApiErr, Ctx, Result};
use crate::models::QueryResults;

/// Browsers ask for this on every page load; it is never a query.
const FAVICON: &str = "favicon.ico";

/// Top suggestions for the prefix in the path.
pub async fn query(
    State(ctx): State<Arc<Ctx>>,
    Path(prefix): Path<String>,
) -> Result<Json<QueryResults>> {
    if prefix == FAVICON {
        return Err(ApiErr::new("not found", StatusCode::NOT_FOUND));
    }

    let index = ctx.index.get();
    let result = index.top_k(&prefix).map_err(|e| {
        log::debug!("rejected query '{}': {}", prefix.escape_debug(), e);
        ApiErr::from_index(e)
    })?;

    log::debug!(
        "query '{}': {} results",
        prefix.escape_debug(),
        result.len()
    );
    Ok(Json(QueryResults { result }))
}
