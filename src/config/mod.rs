//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반 설정값을 중앙집중식으로 관리하며, `.env.{profile}` 파일은
//! `main`에서 `dotenv`로 먼저 로드됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 애플리케이션
//! export APP_ZONE="Asia/Seoul"   # Z, +09:00, IANA 이름
//! export APP_VERSION="1"
//! ```

pub mod app_config;

pub use app_config::*;
