use crate::utils::error::{Error, Result};
use serde_json::{Map, Value};
use sqlx::{query_builder::Separated, Postgres, QueryBuilder};

/// One allow-listed column assignment of a partial update.
pub trait Patch: Sized {
    /// Maps a body key to a change. `None` means the key is not patchable.
    fn parse(field: &str, value: Value) -> Option<serde_json::Result<Self>>;

    fn push_assignment(self, assignments: &mut Separated<'_, 'static, Postgres, &'static str>);
}

/// Turns a PATCH body into changes, rejecting keys outside the allow-list.
pub fn parse<P: Patch>(body: Map<String, Value>) -> Result<Vec<P>> {
    let mut changes = Vec::with_capacity(body.len());
    let mut unknown = vec![];
    let mut invalid = None;

    for (field, value) in body {
        match P::parse(&field, value) {
            Some(Ok(change)) => changes.push(change),
            Some(Err(err)) => {
                invalid.get_or_insert_with(|| format!("Invalid value for `{}`: {}", field, err));
            }
            None => unknown.push(field),
        }
    }

    if !unknown.is_empty() {
        return Err(Error::UnknownFields(unknown));
    }

    match invalid {
        Some(message) => Err(Error::InvalidBody(message)),
        None => Ok(changes),
    }
}

/// `UPDATE <table> SET ... WHERE id = $n` over a non-empty set of changes.
pub fn update_query<P: Patch>(
    table: &str,
    id: i32,
    changes: Vec<P>,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("UPDATE {} SET ", table));

    {
        let mut assignments = query.separated(", ");
        for change in changes {
            change.push_assignment(&mut assignments);
        }
    }

    query.push(" WHERE id = ").push_bind(id);
    query
}
