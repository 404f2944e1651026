use super::{Request, Response};
use bytes::Bytes;
use http_body_util::Full;
use hyper::HeaderMap;

/// 요청 하나에 대한 처리 컨텍스트
///
/// 요청, 작성 중인 응답, 그리고 호스트 서버가 알려준 TLS 여부를 함께 보관합니다.
/// 요청마다 새로 만들어지며 다른 요청과 공유되지 않습니다.
#[derive(Debug)]
pub struct RequestContext {
    request: Request,
    response: Response,
    is_tls: bool,
}

impl RequestContext {
    pub fn new(request: Request, is_tls: bool) -> Self {
        Self {
            request,
            response: Response::new(Full::new(Bytes::new())),
            is_tls,
        }
    }

    /// 연결 자체가 TLS로 종료되었는지 여부
    pub fn is_tls(&self) -> bool {
        self.is_tls
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    pub fn response_headers_mut(&mut self) -> &mut HeaderMap {
        self.response.headers_mut()
    }

    /// 엔드포인트가 응답 전체를 교체할 때 사용합니다.
    pub fn set_response(&mut self, response: Response) {
        self.response = response;
    }

    pub fn into_response(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_new_context_has_empty_ok_response() {
        let req = Request::new(Full::new(Bytes::new()));
        let ctx = RequestContext::new(req, true);

        assert!(ctx.is_tls());
        assert_eq!(ctx.response().status(), StatusCode::OK);
        assert!(ctx.response().headers().is_empty());
    }

    #[test]
    fn test_set_response_replaces_headers() {
        let req = Request::new(Full::new(Bytes::new()));
        let mut ctx = RequestContext::new(req, false);
        ctx.response_headers_mut()
            .insert("x-old", "1".parse().unwrap());

        let mut replacement = Response::new(Full::new(Bytes::from("body")));
        *replacement.status_mut() = StatusCode::CREATED;
        ctx.set_response(replacement);

        let res = ctx.into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(!res.headers().contains_key("x-old"));
    }
}
