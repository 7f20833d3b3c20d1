use crate::utils::{
    database::Entity,
    error::{Error, Result},
    patch::{self, Patch},
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{query_builder::Separated, FromRow, PgExecutor, Postgres};

#[derive(Clone, Debug, FromRow)]
pub struct Advertisement {
    pub id: i32,
    pub header: String,
    pub description: String,
    pub registration_time: DateTime<Utc>,
    pub owner: Option<i32>,
}

impl Entity for Advertisement {
    const NAME: &'static str = "Advertisement";
    const TABLE: &'static str = "advertisements";
}

pub struct CreateAdvertisementPayload {
    pub header: String,
    pub description: String,
    pub owner: Option<i32>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateAdvertisementPayload,
) -> Result<Advertisement> {
    sqlx::query_as::<_, Advertisement>(
        "
        INSERT INTO advertisements
        (header, description, owner)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(payload.header)
    .bind(payload.description)
    .bind(payload.owner)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an advertisement: {}", err);
        Error::from(err)
    })
}

/// Patchable advertisement columns. `registration_time` and `id` are store-managed.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Header(Option<String>),
    Description(Option<String>),
    Owner(Option<i32>),
}

impl Patch for Change {
    fn parse(field: &str, value: Value) -> Option<serde_json::Result<Self>> {
        Some(match field {
            "header" => serde_json::from_value(value).map(Self::Header),
            "description" => serde_json::from_value(value).map(Self::Description),
            "owner" => serde_json::from_value(value).map(Self::Owner),
            _ => return None,
        })
    }

    fn push_assignment(self, assignments: &mut Separated<'_, 'static, Postgres, &'static str>) {
        match self {
            Self::Header(header) => assignments.push("header = ").push_bind_unseparated(header),
            Self::Description(description) => assignments
                .push("description = ")
                .push_bind_unseparated(description),
            Self::Owner(owner) => assignments.push("owner = ").push_bind_unseparated(owner),
        };
    }
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    changes: Vec<Change>,
) -> Result<()> {
    if changes.is_empty() {
        return Ok(());
    }

    let mut query = patch::update_query(Advertisement::TABLE, id, changes);

    query.build().execute(e).await.map(|_| ()).map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update an advertisement by id {}: {}",
            id,
            err
        );
        Error::from(err)
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<()> {
    sqlx::query("DELETE FROM advertisements WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an advertisement by id {}: {}",
                id,
                err
            );
            Error::from(err)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changes(body: Value) -> Result<Vec<Change>> {
        match body {
            Value::Object(map) => patch::parse(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn header_only_patch_touches_only_header() {
        let changes = changes(json!({ "header": "X" })).unwrap();

        assert_eq!(changes, vec![Change::Header(Some("X".to_string()))]);
        assert_eq!(
            patch::update_query(Advertisement::TABLE, 1, changes).sql(),
            "UPDATE advertisements SET header = $1 WHERE id = $2"
        );
    }

    #[test]
    fn store_managed_fields_are_not_patchable() {
        let err = changes(json!({ "id": 2, "registration_time": "2020-01-01T00:00:00Z" }))
            .unwrap_err();

        assert_eq!(err.to_string(), "Unknown field(s): id, registration_time");
    }

    #[test]
    fn owner_must_be_an_integer() {
        let err = changes(json!({ "owner": "bob" })).unwrap_err();

        assert!(matches!(err, Error::InvalidBody(_)));
    }
}
