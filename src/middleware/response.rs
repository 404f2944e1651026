use super::{MiddlewareError, Response};
use bytes::Bytes;
use http_body_util::Full;
use hyper::StatusCode;

/// 미들웨어 에러를 HTTP 응답으로 변환합니다.
pub fn error_response(err: &MiddlewareError) -> Response {
    let status = match err {
        MiddlewareError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::InvalidHeaderValue(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::Processing(_) => StatusCode::BAD_REQUEST,
        MiddlewareError::Execution { .. } => StatusCode::BAD_GATEWAY,
    };

    let mut response = Response::new(Full::new(Bytes::from(err.to_string())));
    *response.status_mut() = status;
    response
}
