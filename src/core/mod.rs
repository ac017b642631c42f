//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 명시적 의존성 조립
//! - **AppContext**: 리포지토리와 서비스를 한 번씩 생성해 생성자로 연결
//! - **핸들 공유**: 모든 컴포넌트는 `Arc<T>`로 공유되며 전역 상태가 없음
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `ErrorContext` 확장 trait
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use crate::config::AppConfig;
//! use crate::core::AppContext;
//!
//! let ctx = web::Data::new(AppContext::build(&AppConfig::from_env()));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(ctx.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod context;
pub mod errors;

pub use context::*;
pub use errors::*;
