use super::types::{request, response};
use crate::{
    modules::user::repository::{self, User},
    types::Context,
    utils::{database, patch},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let changes = patch::parse::<repository::Change>(payload.body).map_err(|err| {
        tracing::warn!("Rejected user patch: {}", err);
        err
    })?;

    let mut tx = database::begin(&ctx.db_conn).await?;

    database::get_item::<User, _>(&mut *tx, payload.id).await?;

    repository::update_by_id(&mut *tx, payload.id, changes).await?;

    database::commit(tx).await?;

    Ok(response::Success::UserUpdated)
}
