use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareError {
    #[error("Internal server error. Error message: `{0}`")]
    InternalError(String),
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl actix_web::error::ResponseError for CareError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            CareError::BadClientData("".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CareError::NotFound("".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CareError::Conflict("".into()).status_code(),
            StatusCode::CONFLICT
        );
        let storage = CareError::InternalError("disk full".into());
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(storage.to_string().contains("disk full"));
    }
}
