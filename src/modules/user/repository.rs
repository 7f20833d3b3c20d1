use crate::utils::{
    database::Entity,
    error::{Error, Result},
    patch::{self, Patch},
};
use serde_json::Value;
use sqlx::{query_builder::Separated, FromRow, PgExecutor, Postgres};

#[derive(Clone, Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored and returned as plain text; the API contract round-trips it unchanged.
    pub password: Option<String>,
}

impl Entity for User {
    const NAME: &'static str = "User";
    const TABLE: &'static str = "users";
}

pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

pub async fn create<'e, E>(e: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.password)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occured while creating a user account: {}", err);
        Error::from(err)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Name(Option<String>),
    Email(Option<String>),
    Password(Option<String>),
}

impl Patch for Change {
    fn parse(field: &str, value: Value) -> Option<serde_json::Result<Self>> {
        Some(match field {
            "name" => serde_json::from_value(value).map(Self::Name),
            "email" => serde_json::from_value(value).map(Self::Email),
            "password" => serde_json::from_value(value).map(Self::Password),
            _ => return None,
        })
    }

    fn push_assignment(self, assignments: &mut Separated<'_, 'static, Postgres, &'static str>) {
        match self {
            Self::Name(name) => assignments.push("name = ").push_bind_unseparated(name),
            Self::Email(email) => assignments.push("email = ").push_bind_unseparated(email),
            Self::Password(password) => {
                assignments.push("password = ").push_bind_unseparated(password)
            }
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

    let mut query = patch::update_query(User::TABLE, id, changes);

    query.build().execute(e).await.map(|_| ()).map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a user by id {}: {}",
            id,
            err
        );
        Error::from(err)
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a user by id {}: {}",
                id,
                err
            );
            Error::from(err)
        })
}
