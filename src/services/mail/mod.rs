//! 메일 알림 서비스 모듈
//!
//! [`Notifier`](mail_service::Notifier) trait과 로그 기반 구현체
//! [`MailService`](mail_service::MailService)를 제공합니다.

pub mod mail_service;

pub use mail_service::{MailService, Notifier};
