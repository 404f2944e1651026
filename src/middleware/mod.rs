//! 미들웨어 파이프라인
//!
//! 호스트 서버가 요청마다 [`RequestContext`]를 만들고 [`MiddlewareChain`]을 실행합니다.
//! 각 미들웨어는 컨텍스트를 수정한 뒤 [`Next`]로 나머지 파이프라인을 호출합니다.

use bytes::Bytes;
use http_body_util::Full;

pub mod chain;
pub mod context;
pub mod error;
pub mod helmet;
pub mod response;
pub mod traits;

pub use chain::{MiddlewareChain, Next};
pub use context::RequestContext;
pub use error::MiddlewareError;
pub use response::error_response;
pub use traits::{Endpoint, Middleware};

pub type Request = hyper::Request<Full<Bytes>>;
pub type Response = hyper::Response<Full<Bytes>>;
