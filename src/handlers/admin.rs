use std::sync::Arc;

use axum::extract::State;

use super::{json, ApiResp, Ctx, Result};
use crate::{loader, models::Stats};

/// Get index stats.
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Stats>> {
    Ok(json(stats(&ctx)))
}

/// Rebuild the index from the data file and publish it. The current index keeps
/// serving queries until the new one is ready, and stays in place if the rebuild fails.
pub async fn reload(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Stats>> {
    let path = ctx.data_path.clone();
    let data = ctx.data.clone();
    let opts = ctx.index.get().options().clone();

    log::info!("reloading index from {}", path.display());

    let index = tokio::task::spawn_blocking(move || loader::load_index(&path, &data, opts))
        .await?
        .map_err(|e| {
            log::error!("error reloading index: {}", e);
            e
        })?;

    ctx.index.publish(index);
    log::info!("index reloaded");

    Ok(json(stats(&ctx)))
}

fn stats(ctx: &Ctx) -> Stats {
    let index = ctx.index.get();
    Stats {
        records: index.num_records(),
        entries: index.num_entries(),
        loaded_at: ctx.index.loaded_at().to_rfc3339(),
        version: ctx.consts.version.clone(),
    }
}
