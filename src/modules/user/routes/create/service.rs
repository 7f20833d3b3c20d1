use super::types::{request, response};
use crate::{modules::user::repository, types::Context, utils::database};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let payload = repository::CreateUserPayload::try_from(payload).map_err(|err| {
        tracing::warn!("Failed to validate payload: {}", err);
        err
    })?;

    let mut tx = database::begin(&ctx.db_conn).await?;

    let user = repository::create(&mut *tx, payload).await?;

    database::commit(tx).await?;

    tracing::debug!("Created user {}", user.id);

    Ok(response::Success::UserCreated(user))
}
