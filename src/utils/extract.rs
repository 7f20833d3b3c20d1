use crate::utils::error::Error;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    RequestPartsExt,
};

/// JSON body extractor whose rejections render as `{status: "error", message}`.
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                Err(Error::InvalidBody(rejection.body_text()))
            }
        }
    }
}

/// Integer record identifier taken from the `:id` path segment.
///
/// Only plain ASCII digits fitting an `INTEGER` column are accepted; anything
/// else, signs included, is treated as an unknown route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub i32);

impl std::str::FromStr for Id {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::RouteNotFound);
        }

        raw.parse::<u32>()
            .ok()
            .and_then(|id| i32::try_from(id).ok())
            .map(Id)
            .ok_or(Error::RouteNotFound)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Id {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Path<String>>().await {
            Ok(Path(raw)) => raw.parse(),
            Err(_) => Err(Error::RouteNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!("42".parse::<Id>().unwrap(), Id(42));
        assert_eq!("0".parse::<Id>().unwrap(), Id(0));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["abc", "-1", "1.5", "", "2147483648", "+", "+5", " 5"] {
            assert!(
                matches!(raw.parse::<Id>(), Err(Error::RouteNotFound)),
                "{raw:?} should not parse"
            );
        }
    }
}
