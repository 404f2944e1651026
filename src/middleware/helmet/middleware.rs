use crate::middleware::{Middleware, MiddlewareError, Next, RequestContext};
use super::config::{Filter, HelmetConfig};
use async_trait::async_trait;
use hyper::header::{
    HeaderName, HeaderValue, CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY_REPORT_ONLY,
    REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};
use std::time::Duration;
use tracing::{debug, instrument, trace};

pub const DEFAULT_XSS_PROTECTION: &str = "1; mode=block";
pub const DEFAULT_CONTENT_TYPE_OPTIONS: &str = "nosniff";
pub const DEFAULT_FRAME_OPTIONS: &str = "SAMEORIGIN";

/// 리버스 프록시가 원래 스킴을 알려주는 요청 헤더
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

const HTTPS: &[u8] = b"https";

/// Strict-Transport-Security 헤더 값을 조합합니다.
///
/// `max_age`가 0이면 `None`을 반환합니다. 초 단위 이하는 버립니다.
pub fn strict_transport_security_value(
    max_age: Duration,
    include_subdomains: bool,
    preload: bool,
) -> Option<String> {
    if max_age.is_zero() {
        return None;
    }

    let mut value = format!("max-age={}", max_age.as_secs());
    if include_subdomains {
        value.push_str("; includeSubdomains");
    }
    if preload {
        value.push_str("; preload");
    }
    Some(value)
}

/// 요청이 암호화된 채널로 들어왔는지 판단합니다.
///
/// 연결이 TLS이거나 `X-Forwarded-Proto` 값이 정확히 `https`이면 안전한 요청으로 봅니다.
/// 이 헤더는 검증하지 않으므로 클라이언트 값을 덮어쓰는 프록시 뒤에서만 신뢰해야 합니다.
pub fn is_secure(ctx: &RequestContext) -> bool {
    ctx.is_tls()
        || ctx
            .request_headers()
            .get(X_FORWARDED_PROTO)
            .map(|proto| proto.as_bytes() == HTTPS)
            .unwrap_or(false)
}

/// 브라우저 보안 헤더 미들웨어
///
/// 헤더 값은 생성 시 한 번만 검증, 변환되므로 요청 처리 중에는 실패하지 않습니다.
pub struct HelmetMiddleware {
    xss_protection: HeaderValue,
    content_type_options: HeaderValue,
    frame_options: HeaderValue,
    strict_transport_security: Option<HeaderValue>,
    content_security_policy: Option<(HeaderName, HeaderValue)>,
    referrer_policy: Option<HeaderValue>,
    filter: Option<Filter>,
}

impl HelmetMiddleware {
    pub fn new(config: HelmetConfig) -> Result<Self, MiddlewareError> {
        let xss_protection = header_value_or(&config.xss_protection, DEFAULT_XSS_PROTECTION)?;
        let content_type_options =
            header_value_or(&config.content_type_options, DEFAULT_CONTENT_TYPE_OPTIONS)?;
        let frame_options = header_value_or(&config.frame_options, DEFAULT_FRAME_OPTIONS)?;

        let strict_transport_security = strict_transport_security_value(
            config.hsts_max_age,
            config.hsts_include_subdomains,
            config.hsts_preload,
        )
        .map(|value| HeaderValue::from_str(&value))
        .transpose()?;

        let content_security_policy = optional_header_value(&config.content_security_policy)?
            .map(|value| {
                let name = if config.csp_report_only {
                    CONTENT_SECURITY_POLICY_REPORT_ONLY
                } else {
                    CONTENT_SECURITY_POLICY
                };
                (name, value)
            });

        let referrer_policy = optional_header_value(&config.referrer_policy)?;

        debug!(
            hsts = strict_transport_security.is_some(),
            csp = content_security_policy.is_some(),
            csp_report_only = config.csp_report_only,
            referrer_policy = referrer_policy.is_some(),
            filter = config.filter.is_some(),
            "보안 헤더 미들웨어 생성"
        );

        Ok(Self {
            xss_protection,
            content_type_options,
            frame_options,
            strict_transport_security,
            content_security_policy,
            referrer_policy,
            filter: config.filter,
        })
    }

    /// 응답에 보안 헤더를 설정합니다.
    ///
    /// 필터가 요청을 우회시키면 아무것도 하지 않고 `false`를 반환합니다.
    /// 모든 헤더는 덮어쓰기(`insert`)이므로 여러 번 호출해도 결과가 같습니다.
    pub fn apply(&self, ctx: &mut RequestContext) -> bool {
        if let Some(filter) = &self.filter {
            if filter(ctx) {
                debug!("필터 조건 일치, 보안 헤더 생략");
                return false;
            }
        }

        let secure = is_secure(ctx);
        let headers = ctx.response_headers_mut();

        headers.insert(X_XSS_PROTECTION, self.xss_protection.clone());
        headers.insert(X_CONTENT_TYPE_OPTIONS, self.content_type_options.clone());
        headers.insert(X_FRAME_OPTIONS, self.frame_options.clone());

        if secure {
            if let Some(hsts) = &self.strict_transport_security {
                debug!(value = ?hsts, "Strict-Transport-Security 설정");
                headers.insert(STRICT_TRANSPORT_SECURITY, hsts.clone());
            }
        }

        if let Some((name, value)) = &self.content_security_policy {
            trace!(header = %name, "CSP 설정");
            headers.insert(name.clone(), value.clone());
        }

        if let Some(policy) = &self.referrer_policy {
            headers.insert(REFERRER_POLICY, policy.clone());
        }

        true
    }
}

fn header_value_or(value: &str, default: &'static str) -> Result<HeaderValue, MiddlewareError> {
    if value.is_empty() {
        Ok(HeaderValue::from_static(default))
    } else {
        Ok(HeaderValue::from_str(value)?)
    }
}

fn optional_header_value(value: &str) -> Result<Option<HeaderValue>, MiddlewareError> {
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(HeaderValue::from_str(value)?))
    }
}

#[async_trait]
impl Middleware for HelmetMiddleware {
    fn name(&self) -> &str {
        "helmet"
    }

    #[instrument(skip(self, ctx, next))]
    async fn handle(&self, ctx: &mut RequestContext, next: Next<'_>) -> Result<(), MiddlewareError> {
        self.apply(ctx);
        next.run(ctx).await
    }
}
