use crate::middleware::RequestContext;
use crate::settings::{parse_optional_env_var, SettingsError, ENV_PREFIX};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// 요청별 미들웨어 우회 조건. `true`를 반환하면 헤더를 설정하지 않습니다.
pub type Filter = Arc<dyn Fn(&RequestContext) -> bool + Send + Sync>;

/// 보안 헤더 미들웨어 설정
///
/// 빈 문자열은 "설정하지 않음"을 뜻합니다. 항상 설정되는 세 헤더
/// (X-XSS-Protection, X-Content-Type-Options, X-Frame-Options)는
/// 미들웨어 생성 시 기본값으로 채워집니다.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct HelmetConfig {
    /// X-XSS-Protection 값 (기본값: "1; mode=block")
    pub xss_protection: String,

    /// X-Content-Type-Options 값 (기본값: "nosniff")
    pub content_type_options: String,

    /// X-Frame-Options 값 (기본값: "SAMEORIGIN")
    pub frame_options: String,

    /// HSTS max-age. 0이면 Strict-Transport-Security 헤더를 보내지 않습니다.
    /// 설정 파일에서는 초 단위 정수로 지정합니다.
    #[serde(deserialize_with = "duration_secs::deserialize")]
    pub hsts_max_age: Duration,

    /// includeSubdomains 지시어 추가 여부
    pub hsts_include_subdomains: bool,

    /// preload 지시어 추가 여부
    pub hsts_preload: bool,

    /// Content-Security-Policy 값. 비어 있으면 CSP 헤더를 보내지 않습니다.
    pub content_security_policy: String,

    /// true면 정책을 Content-Security-Policy-Report-Only 헤더로 보냅니다.
    pub csp_report_only: bool,

    /// Referrer-Policy 값. 비어 있으면 헤더를 보내지 않습니다.
    pub referrer_policy: String,

    /// 미들웨어 우회 조건 (선택)
    #[serde(skip)]
    pub filter: Option<Filter>,
}

impl fmt::Debug for HelmetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelmetConfig")
            .field("xss_protection", &self.xss_protection)
            .field("content_type_options", &self.content_type_options)
            .field("frame_options", &self.frame_options)
            .field("hsts_max_age", &self.hsts_max_age)
            .field("hsts_include_subdomains", &self.hsts_include_subdomains)
            .field("hsts_preload", &self.hsts_preload)
            .field("content_security_policy", &self.content_security_policy)
            .field("csp_report_only", &self.csp_report_only)
            .field("referrer_policy", &self.referrer_policy)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl HelmetConfig {
    pub fn builder() -> HelmetConfigBuilder {
        HelmetConfigBuilder::new()
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// TOML 파일에서 설정을 읽습니다.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|error| SettingsError::FileError {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_toml(&content)
    }

    /// `HELMET_` 접두사 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// 설정된 환경 변수로 현재 값을 덮어씁니다.
    pub fn apply_env(&mut self) -> Result<(), SettingsError> {
        let var = |name: &str| format!("{}{}", ENV_PREFIX, name);

        if let Some(value) = parse_optional_env_var(&var("XSS_PROTECTION"))? {
            self.xss_protection = value;
        }
        if let Some(value) = parse_optional_env_var(&var("CONTENT_TYPE_OPTIONS"))? {
            self.content_type_options = value;
        }
        if let Some(value) = parse_optional_env_var(&var("FRAME_OPTIONS"))? {
            self.frame_options = value;
        }
        if let Some(secs) = parse_optional_env_var::<u64>(&var("HSTS_MAX_AGE"))? {
            self.hsts_max_age = Duration::from_secs(secs);
        }
        if let Some(value) = parse_optional_env_var(&var("HSTS_INCLUDE_SUBDOMAINS"))? {
            self.hsts_include_subdomains = value;
        }
        if let Some(value) = parse_optional_env_var(&var("HSTS_PRELOAD"))? {
            self.hsts_preload = value;
        }
        if let Some(value) = parse_optional_env_var(&var("CSP"))? {
            self.content_security_policy = value;
        }
        if let Some(value) = parse_optional_env_var(&var("CSP_REPORT_ONLY"))? {
            self.csp_report_only = value;
        }
        if let Some(value) = parse_optional_env_var(&var("REFERRER_POLICY"))? {
            self.referrer_policy = value;
        }

        Ok(())
    }
}

/// HelmetConfig 빌더
#[must_use = "builder does nothing until you call build()"]
#[derive(Default)]
pub struct HelmetConfigBuilder {
    config: HelmetConfig,
}

impl HelmetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xss_protection(mut self, value: impl Into<String>) -> Self {
        self.config.xss_protection = value.into();
        self
    }

    pub fn content_type_options(mut self, value: impl Into<String>) -> Self {
        self.config.content_type_options = value.into();
        self
    }

    pub fn frame_options(mut self, value: impl Into<String>) -> Self {
        self.config.frame_options = value.into();
        self
    }

    pub fn hsts_max_age(mut self, max_age: Duration) -> Self {
        self.config.hsts_max_age = max_age;
        self
    }

    pub fn hsts_include_subdomains(mut self, include: bool) -> Self {
        self.config.hsts_include_subdomains = include;
        self
    }

    pub fn hsts_preload(mut self, preload: bool) -> Self {
        self.config.hsts_preload = preload;
        self
    }

    pub fn content_security_policy(mut self, policy: impl Into<String>) -> Self {
        self.config.content_security_policy = policy.into();
        self
    }

    pub fn csp_report_only(mut self, report_only: bool) -> Self {
        self.config.csp_report_only = report_only;
        self
    }

    pub fn referrer_policy(mut self, policy: impl Into<String>) -> Self {
        self.config.referrer_policy = policy.into();
        self
    }

    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        self.config.filter = Some(Arc::new(filter));
        self
    }

    pub fn build(self) -> HelmetConfig {
        self.config
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
