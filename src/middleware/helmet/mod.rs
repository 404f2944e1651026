//! 브라우저 보안 헤더 미들웨어
//!
//! 응답에 X-XSS-Protection, X-Content-Type-Options, X-Frame-Options를 항상 설정하고,
//! 설정에 따라 Strict-Transport-Security, Content-Security-Policy(또는 Report-Only),
//! Referrer-Policy를 추가합니다. HSTS는 안전한 요청에만 붙습니다.

mod config;
mod middleware;

pub use config::{Filter, HelmetConfig, HelmetConfigBuilder};
pub use middleware::{
    is_secure, strict_transport_security_value, HelmetMiddleware, DEFAULT_CONTENT_TYPE_OPTIONS,
    DEFAULT_FRAME_OPTIONS, DEFAULT_XSS_PROTECTION, X_FORWARDED_PROTO,
};
