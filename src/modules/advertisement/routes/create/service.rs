use super::types::{request, response};
use crate::{modules::advertisement::repository, types::Context, utils::database};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let payload = repository::CreateAdvertisementPayload::try_from(payload).map_err(|err| {
        tracing::warn!("Failed to validate payload: {}", err);
        err
    })?;

    let mut tx = database::begin(&ctx.db_conn).await?;

    let advertisement = repository::create(&mut *tx, payload).await?;

    database::commit(tx).await?;

    tracing::debug!("Created advertisement {}", advertisement.id);

    Ok(response::Success::AdvertisementCreated(advertisement))
}
