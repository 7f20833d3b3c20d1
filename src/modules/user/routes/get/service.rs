use super::types::{request, response};
use crate::{modules::user::repository::User, types::Context, utils::database};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    database::get_item::<User, _>(&ctx.db_conn.pool, payload.id)
        .await
        .map(response::Success::User)
}
