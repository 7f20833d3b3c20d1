pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::user::repository::User;

    pub use crate::utils::error::Error;

    pub enum Success {
        User(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::User(user) => (
                    StatusCode::OK,
                    Json(json!({
                        "name": user.name,
                        "email": user.email,
                        "password": user.password,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
