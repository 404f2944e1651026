//! 설정 로딩 공통 요소
//!
//! 환경 변수 파싱 헬퍼, 설정 에러 타입, 로깅 설정을 제공합니다.

use std::env;

mod error;
pub mod logging;

pub use error::SettingsError;
pub use logging::{LogFormat, LogSettings};

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 환경 변수 이름 접두사
pub const ENV_PREFIX: &str = "HELMET_";

/// 환경 변수를 읽어 파싱합니다. 변수가 없으면 `default`를 사용합니다.
pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}

/// 값이 있을 때만 `Some`을 돌려주는 [`parse_env_var`] 변형
pub fn parse_optional_env_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map(Some).map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_parse_env_var_default() {
        env::remove_var("HELMET_TEST_NUMBER");
        let value: u64 = parse_env_var("HELMET_TEST_NUMBER", || 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    #[serial]
    fn test_parse_env_var_invalid() {
        env::set_var("HELMET_TEST_NUMBER", "seven");
        let result: Result<u64> = parse_env_var("HELMET_TEST_NUMBER", || 7);
        env::remove_var("HELMET_TEST_NUMBER");

        match result {
            Err(SettingsError::EnvVarInvalid { var_name, value, .. }) => {
                assert_eq!(var_name, "HELMET_TEST_NUMBER");
                assert_eq!(value, "seven");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_optional_env_var() {
        env::remove_var("HELMET_TEST_FLAG");
        assert_eq!(parse_optional_env_var::<bool>("HELMET_TEST_FLAG").unwrap(), None);

        env::set_var("HELMET_TEST_FLAG", "true");
        assert_eq!(parse_optional_env_var::<bool>("HELMET_TEST_FLAG").unwrap(), Some(true));
        env::remove_var("HELMET_TEST_FLAG");
    }
}
