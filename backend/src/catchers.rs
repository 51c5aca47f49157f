use rocket::{catch, serde::json::Json, Request};
use shared::ErrorResponse;

// Message kept verbatim from the original service; clients match on it.
#[catch(404)]
pub fn api_not_found(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Endpoint de la API no encontrado"))
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("The requested resource was not found."))
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request parameters."))
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Request body is not valid JSON."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("An internal server error occurred."))
}
