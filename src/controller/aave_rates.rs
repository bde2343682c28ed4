use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    configuration::{AppState, State},
    error::Error,
    rates,
};

/// Fresh read of every tracked reserve. All-or-nothing: any failing asset
/// turns the whole response into a generic 500, with the cause logged
/// server side only.
#[get("/aave-rates")]
async fn index(
    state: web::Data<AppState<State>>,
) -> Result<HttpResponse, Error> {
    match rates::build_envelope(&state.eth).await {
        Ok(envelope) => Ok(HttpResponse::Ok().json(envelope)),
        Err(e) => {
            error!("Error fetching Aave rates: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: String::from("Failed to fetch Aave rates"),
            }))
        },
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::ErrorResponse;

    #[test]
    fn error_body_is_generic() {
        let json = serde_json::to_value(ErrorResponse {
            error: String::from("Failed to fetch Aave rates"),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "error": "Failed to fetch Aave rates" })
        );
    }
}
