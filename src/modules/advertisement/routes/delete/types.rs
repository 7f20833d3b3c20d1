pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub use crate::utils::error::Error;

    pub enum Success {
        AdvertisementDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementDeleted => {
                    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
