//! 애플리케이션 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, 메일 시간대 및 버전 설정을 관리합니다.

use std::env;
use std::fmt;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Tz;
use crate::core::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
///
/// * `HOST` - 바인딩할 호스트 (기본값: `127.0.0.1`)
/// * `PORT` - 바인딩할 포트 (기본값: 8080)
/// * `WORKERS` - 워커 스레드 수 (기본값: 4, 0은 기본값으로 대체)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
        }
    }
}

impl ServerConfig {
    /// 프로세스 환경 변수에서 서버 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 서버 설정을 구성합니다.
    ///
    /// 값이 없거나 해석할 수 없으면 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST")
                .map(|host| host.trim().to_string())
                .filter(|host| !host.is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(defaults.port),
            workers: lookup("WORKERS")
                .and_then(|workers| workers.trim().parse().ok())
                .filter(|workers| *workers > 0)
                .unwrap_or(defaults.workers),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 경고를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::warn!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::warn!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// 애플리케이션 설정
///
/// # Environment Variables
///
/// * `APP_ZONE` - 메일 알림 시각에 사용할 시간대 (기본값: `Z`)
/// * `APP_VERSION` - 시작 배너에 출력할 버전 (기본값: `1`)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub zone: String,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zone: "Z".to_string(),
            version: "1".to_string(),
        }
    }
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 구성합니다. 값이 비어 있으면 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };

        Self {
            zone: read("APP_ZONE", defaults.zone),
            version: read("APP_VERSION", defaults.version),
        }
    }
}

/// 메일 알림 시각을 표시할 시간대
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MailZone {
    /// UTC (`Z`)
    Utc,
    /// 고정 오프셋 (예: `+08:00`)
    Fixed(FixedOffset),
    /// IANA 시간대 (예: `Asia/Shanghai`)
    Named(Tz),
}

impl MailZone {
    /// 시간대 문자열을 해석합니다.
    ///
    /// `Z`, `+08:00` 형식의 고정 오프셋, IANA 시간대 이름(`UTC` 포함)을 지원합니다.
    /// 시간대 이름은 대소문자를 구분합니다.
    pub fn parse(value: &str) -> AppResult<Self> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("z") {
            return Ok(MailZone::Utc);
        }

        if value.starts_with('+') || value.starts_with('-') {
            return value
                .parse::<FixedOffset>()
                .map(MailZone::Fixed)
                .map_err(|e| AppError::ConfigError(format!("잘못된 시간대 오프셋 '{}': {}", value, e)));
        }

        value
            .parse::<Tz>()
            .map(MailZone::Named)
            .map_err(|e| AppError::ConfigError(format!("알 수 없는 시간대 '{}': {}", value, e)))
    }

    /// ISO-8601 zoned 형식으로 시각을 렌더링합니다.
    ///
    /// 소수 초는 필요한 경우에만 3/6/9자리로 출력합니다.
    /// 이름 있는 시간대는 `2024-01-01T10:00:00+08:00[Asia/Shanghai]`처럼
    /// 오프셋 뒤에 시간대 이름을 붙입니다. `UTC`도 `...Z[UTC]`로 이름이 유지됩니다.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self {
            MailZone::Utc => at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            MailZone::Fixed(offset) => at
                .with_timezone(offset)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            MailZone::Named(tz) => format!(
                "{}[{}]",
                at.with_timezone(tz).to_rfc3339_opts(SecondsFormat::AutoSi, true),
                tz.name()
            ),
        }
    }
}

impl fmt::Display for MailZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailZone::Utc => write!(f, "Z"),
            MailZone::Fixed(offset) => write!(f, "{}", offset),
            MailZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}
