use super::{Endpoint, Middleware, MiddlewareError, Request, RequestContext, Response};
use std::sync::Arc;

/// 나머지 파이프라인을 가리키는 연속(continuation)
///
/// 남은 미들웨어가 있으면 그 미들웨어를, 없으면 엔드포인트를 호출합니다.
pub struct Next<'a> {
    middlewares: &'a [Arc<dyn Middleware>],
    endpoint: &'a dyn Endpoint,
}

impl<'a> Next<'a> {
    pub fn new(middlewares: &'a [Arc<dyn Middleware>], endpoint: &'a dyn Endpoint) -> Self {
        Self { middlewares, endpoint }
    }

    /// 다음 단계를 실행하고 그 결과를 그대로 반환합니다.
    pub async fn run(mut self, ctx: &mut RequestContext) -> Result<(), MiddlewareError> {
        let middlewares = self.middlewares;
        match middlewares.split_first() {
            Some((current, rest)) => {
                self.middlewares = rest;
                current.handle(ctx, self).await
            }
            None => self.endpoint.call(ctx).await,
        }
    }
}

#[derive(Default, Clone)]
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new()
        }
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Arc::new(middleware));
    }

    pub fn add_shared(&mut self, middleware: Arc<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// 등록 순서대로 미들웨어를 실행하고 마지막에 엔드포인트를 호출합니다.
    pub async fn execute(
        &self,
        ctx: &mut RequestContext,
        endpoint: &dyn Endpoint,
    ) -> Result<(), MiddlewareError> {
        Next::new(&self.middlewares, endpoint).run(ctx).await
    }

    pub async fn handle(
        &self,
        request: Request,
        is_tls: bool,
        endpoint: &dyn Endpoint,
    ) -> Result<Response, MiddlewareError> {
        let mut ctx = RequestContext::new(request, is_tls);
        self.execute(&mut ctx, endpoint).await?;
        Ok(ctx.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use http_body_util::Full;
    use hyper::header::HeaderValue;

    struct Tag(&'static str);

    #[async_trait]
    impl Middleware for Tag {
        fn name(&self) -> &str {
            self.0
        }

        async fn handle(&self, ctx: &mut RequestContext, next: Next<'_>) -> Result<(), MiddlewareError> {
            let headers = ctx.response_headers_mut();
            headers.append("x-order", HeaderValue::from_static(self.0));
            next.run(ctx).await
        }
    }

    struct Empty;

    #[async_trait]
    impl Endpoint for Empty {
        async fn call(&self, _ctx: &mut RequestContext) -> Result<(), MiddlewareError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_middlewares_run_in_order() {
        let mut chain = MiddlewareChain::new();
        chain.add(Tag("first"));
        chain.add(Tag("second"));
        assert_eq!(chain.len(), 2);

        let res = chain
            .handle(Request::new(Full::new(Bytes::new())), false, &Empty)
            .await
            .unwrap();

        let order: Vec<_> = res.headers().get_all("x-order").iter().collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_empty_chain_calls_endpoint() {
        let chain = MiddlewareChain::new();
        assert!(chain.is_empty());

        let res = chain
            .handle(Request::new(Full::new(Bytes::new())), false, &Empty)
            .await;
        assert!(res.is_ok());
    }
}
