pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::advertisement::repository::Advertisement;

    pub use crate::utils::error::Error;

    pub enum Success {
        Advertisement(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Advertisement(advertisement) => (
                    StatusCode::OK,
                    Json(json!({
                        "header": advertisement.header,
                        "registration_time": advertisement.registration_time,
                        "description": advertisement.description,
                        "owner": advertisement.owner,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
