//! Helmet은 HTTP 응답에 브라우저 보안 헤더를 붙이는 미들웨어입니다.
//!
//! # 주요 기능
//!
//! - X-XSS-Protection, X-Content-Type-Options, X-Frame-Options 기본 설정
//! - TLS 또는 `X-Forwarded-Proto: https` 요청에 대한 HSTS
//! - Content-Security-Policy / Report-Only 선택
//! - Referrer-Policy
//! - 요청별 우회 필터
//!
//! # 예제
//!
//! ```
//! use helmet::middleware::{Endpoint, MiddlewareChain, MiddlewareError, Request, RequestContext};
//! use helmet::middleware::helmet::{HelmetConfig, HelmetMiddleware};
//! use http_body_util::Full;
//! use bytes::Bytes;
//! use std::time::Duration;
//!
//! struct Hello;
//!
//! #[async_trait::async_trait]
//! impl Endpoint for Hello {
//!     async fn call(&self, _ctx: &mut RequestContext) -> Result<(), MiddlewareError> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), MiddlewareError> {
//! let config = HelmetConfig::builder()
//!     .hsts_max_age(Duration::from_secs(31536000))
//!     .content_security_policy("default-src 'self'")
//!     .build();
//!
//! let mut chain = MiddlewareChain::new();
//! chain.add(HelmetMiddleware::new(config)?);
//!
//! let response = chain
//!     .handle(Request::new(Full::new(Bytes::new())), true, &Hello)
//!     .await?;
//! assert_eq!(response.headers()["strict-transport-security"], "max-age=31536000");
//! # Ok(())
//! # }
//! ```

pub mod logging;
pub mod middleware;
pub mod settings;

pub use middleware::helmet::{HelmetConfig, HelmetMiddleware};
