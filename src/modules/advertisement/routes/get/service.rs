use super::types::{request, response};
use crate::{
    modules::advertisement::repository::Advertisement, types::Context, utils::database,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    database::get_item::<Advertisement, _>(&ctx.db_conn.pool, payload.id)
        .await
        .map(response::Success::Advertisement)
}
