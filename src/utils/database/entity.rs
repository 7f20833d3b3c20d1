use crate::utils::error::{Error, Result};
use sqlx::{postgres::PgRow, FromRow, PgExecutor};

/// A record kind that can be looked up by its integer primary key.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Name used in "does not exist" messages.
    const NAME: &'static str;
    const TABLE: &'static str;
}

/// Fetches the `T` with primary key `id`, failing with [`Error::NotFound`] when there is none.
pub async fn get_item<'e, T, E>(e: E, id: i32) -> Result<T>
where
    T: Entity,
    E: PgExecutor<'e>,
{
    let query = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);

    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching {} with id {}: {}",
                T::NAME,
                id,
                err
            );
            Error::from(err)
        })?
        .ok_or(Error::NotFound(T::NAME))
}
