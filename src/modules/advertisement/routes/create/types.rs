pub mod request {
    use crate::{
        modules::advertisement::repository::CreateAdvertisementPayload, utils::error::Error,
    };
    use serde::{Deserialize, Deserializer};
    use validator::Validate;

    /// Marks a key as present even when its value is `null`.
    fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(required)]
        pub header: Option<String>,
        #[validate(required)]
        pub description: Option<String>,
        /// Outer `None` is an absent key; `Some(None)` an explicit `null`.
        #[serde(default, deserialize_with = "present")]
        #[validate(required)]
        pub owner: Option<Option<i32>>,
    }

    impl TryFrom<Payload> for CreateAdvertisementPayload {
        type Error = Error;

        fn try_from(payload: Payload) -> Result<Self, Self::Error> {
            payload.validate()?;

            match payload {
                Payload {
                    header: Some(header),
                    description: Some(description),
                    owner: Some(owner),
                } => Ok(Self {
                    header,
                    description,
                    owner,
                }),
                _ => Err(Error::Unexpected),
            }
        }
    }

}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::advertisement::repository::Advertisement;

    pub use crate::utils::error::Error;

    pub enum Success {
        AdvertisementCreated(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementCreated(advertisement) => (
                    StatusCode::OK,
                    Json(json!({ "status": "ok", "id": advertisement.id })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
