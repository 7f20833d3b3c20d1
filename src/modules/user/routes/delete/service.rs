use super::types::{request, response};
use crate::{
    modules::user::repository::{self, User},
    types::Context,
    utils::database,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = database::begin(&ctx.db_conn).await?;

    database::get_item::<User, _>(&mut *tx, payload.id).await?;

    repository::delete_by_id(&mut *tx, payload.id).await?;

    database::commit(tx).await?;

    tracing::debug!("Deleted user {}", payload.id);

    Ok(response::Success::UserDeleted)
}
