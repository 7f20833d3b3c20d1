pub mod request {
    use crate::{modules::user::repository::CreateUserPayload, utils::error::Error};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(required)]
        pub name: Option<String>,
        #[validate(required)]
        pub email: Option<String>,
        pub password: Option<String>,
    }

    impl TryFrom<Payload> for CreateUserPayload {
        type Error = Error;

        fn try_from(payload: Payload) -> Result<Self, Self::Error> {
            payload.validate()?;

            match payload {
                Payload {
                    name: Some(name),
                    email: Some(email),
                    password,
                } => Ok(Self {
                    name,
                    email,
                    password,
                }),
                _ => Err(Error::Unexpected),
            }
        }
    }

}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::user::repository::User;

    pub use crate::utils::error::Error;

    pub enum Success {
        UserCreated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserCreated(user) => (
                    StatusCode::OK,
                    Json(json!({ "status": "ok", "id": user.id })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
