use super::{MiddlewareError, Next, RequestContext};
use async_trait::async_trait;

/// 미들웨어 트레이트
///
/// 요청 컨텍스트를 수정한 뒤 `next`를 호출해 나머지 파이프라인을 실행합니다.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// 미들웨어의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 요청을 처리하고 다음 단계를 호출합니다.
    async fn handle(&self, ctx: &mut RequestContext, next: Next<'_>) -> Result<(), MiddlewareError>;
}

/// 파이프라인의 마지막 핸들러
#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn call(&self, ctx: &mut RequestContext) -> Result<(), MiddlewareError>;
}
