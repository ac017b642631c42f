//! # Application Context - 명시적 의존성 조립
//!
//! 애플리케이션 시작 시 모든 컴포넌트를 한 번씩 생성하고 생성자로 연결합니다.
//! 전역 싱글톤 없이, 조립된 컨텍스트는 `actix_web::web::Data`로 핸들러에 전달됩니다.
//!
//! ## 조립 순서
//!
//! ```text
//! AppConfig
//!    │
//!    ├─ 1. Repository  ─ UserRepository::with_default_users()
//!    │
//!    └─ 2. Services    ─ MailService::new(zone)
//!                        UserService::new(user_repo, mail_service)
//! ```
//!
//! 리포지토리가 먼저 생성되고, 서비스는 이미 생성된 `Arc` 핸들을 주입받습니다.

use std::sync::Arc;
use crate::{
    config::{AppConfig, MailZone},
    repositories::users::UserRepository,
    services::{
        mail::{MailService, Notifier},
        users::UserService,
    },
    utils::display_terminal::{
        print_boxed_title, print_context_summary, print_step_complete, print_step_start,
        print_sub_task,
    },
};

/// 조립된 애플리케이션 컴포넌트 묶음
pub struct AppContext {
    pub config: AppConfig,
    pub user_repo: Arc<UserRepository>,
    pub mail_service: Arc<MailService>,
    pub user_service: Arc<UserService>,
}

impl AppContext {
    /// 설정으로부터 기본 사용자가 시드된 컨텍스트를 조립합니다.
    ///
    /// 시간대 설정을 해석할 수 없으면 경고를 남기고 UTC를 사용합니다.
    pub fn build(config: &AppConfig) -> Self {
        Self::build_with_repository(config, UserRepository::with_default_users())
    }

    /// 주어진 디렉터리로 컨텍스트를 조립합니다.
    pub fn build_with_repository(config: &AppConfig, user_repo: UserRepository) -> Self {
        print_boxed_title("🔄 INITIALIZING APPLICATION CONTEXT");

        print_step_start(1, "Creating Repository instances");
        let user_repo = Arc::new(user_repo);
        print_sub_task("user_repository", "✓ Created");
        print_step_complete(1, "Repository instances created", 1);

        print_step_start(2, "Creating Service instances");
        let zone = MailZone::parse(&config.zone).unwrap_or_else(|e| {
            log::warn!("{}. UTC 시간대를 사용합니다", e);
            MailZone::Utc
        });
        let mail_service = Arc::new(MailService::new(zone));
        print_sub_task("mail_service", "✓ Created");

        let notifier: Arc<dyn Notifier> = mail_service.clone();
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo), notifier));
        print_sub_task("user_service", "✓ Created");
        print_step_complete(2, "Service instances created", 2);

        print_context_summary(1, 2);

        Self {
            config: config.clone(),
            user_repo,
            mail_service,
            user_service,
        }
    }
}
