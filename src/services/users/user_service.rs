//! # 사용자 접근 서비스 구현
//!
//! 사용자 디렉터리 위에서 로그인, ID 조회, 회원가입을 제공하는 비즈니스 로직입니다.
//! 성공한 로그인/회원가입에 대해서만 알림을 발송합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │                                               │
//! │  login ──────┐   get_user ──┐   register ──┐  │
//! └──────────────┼──────────────┼──────────────┼──┘
//!                ▼              ▼              ▼
//! ┌───────────────────────────────────────────────┐
//! │        UserRepository (in-memory, RwLock)     │
//! └───────────────────────────────────────────────┘
//!                │                             │
//!                ▼ 성공 시                      ▼ 성공 시
//!        Notifier::notify_login     Notifier::notify_registration
//! ```
//!
//! 각 호출은 메모리 상 디렉터리에 대한 단일 단계 트랜잭션이며 즉시 완료됩니다.

use std::sync::Arc;
use crate::{
    core::errors::AppResult,
    domain::entities::users::User,
    repositories::users::UserRepository,
    services::mail::Notifier,
};

/// 사용자 접근 비즈니스 로직 서비스
///
/// 의존성은 생성자로 명시적으로 주입됩니다.
///
/// ```rust,ignore
/// let user_repo = Arc::new(UserRepository::with_default_users());
/// let mail_service: Arc<dyn Notifier> = Arc::new(MailService::default());
/// let user_service = UserService::new(user_repo, mail_service);
///
/// let bob = user_service.login("bob@example.com", "password")?;
/// let carl = user_service.register("carl@example.com", "pw", "Carl")?;
/// assert_eq!(carl.id, 4);
/// ```
///
/// ## 에러 처리
///
/// - **NotFound**: 로그인 정보 불일치, 존재하지 않는 ID
/// - **ConflictError**: 이미 등록된 이메일
/// - **InternalError**: 디렉터리 잠금 실패
pub struct UserService {
    /// 사용자 디렉터리
    user_repo: Arc<UserRepository>,
    /// 로그인/회원가입 알림 발송자
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { user_repo, notifier }
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 이메일은 대소문자를 무시하고 비밀번호는 정확히 비교합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 (로그인 알림 발송 후)
    /// * `Err(AppError::NotFound)` - 일치하는 사용자 없음
    pub fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_credentials(email, password)
            .inspect_err(|e| log::warn!("로그인 실패 - 이메일: {}, 사유: {}", email, e))?;

        log::info!("로그인 성공 - 사용자: {}, ID: {}", user.email, user.id);
        self.notifier.notify_login(&user);

        Ok(user)
    }

    /// ID로 사용자 조회
    pub fn get_user(&self, id: i64) -> AppResult<User> {
        self.user_repo.find_by_id(id)
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - `최대 ID + 1`이 부여된 사용자 (가입 알림 발송 후)
    /// * `Err(AppError::ConflictError)` - 대소문자 무시 기준 이메일 중복
    pub fn register(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .insert(email, password, name)
            .inspect_err(|e| log::warn!("회원가입 실패 - 이메일: {}, 사유: {}", email, e))?;

        log::info!("회원가입 완료 - 사용자: {}, ID: {}", user.email, user.id);
        self.notifier.notify_registration(&user);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use std::sync::Mutex;

    /// 발송된 알림을 기록하는 테스트용 Notifier
    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify_login(&self, user: &User) {
            self.events.lock().unwrap().push(format!("login:{}", user.id));
        }

        fn notify_registration(&self, user: &User) {
            self.events.lock().unwrap().push(format!("register:{}", user.id));
        }
    }

    fn setup() -> (UserService, Arc<UserRepository>, Arc<RecordingNotifier>) {
        let repo = Arc::new(UserRepository::with_default_users());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = UserService::new(Arc::clone(&repo), notifier.clone());
        (service, repo, notifier)
    }

    #[test]
    fn test_login_each_seeded_user() {
        let (service, repo, _) = setup();

        for seeded in repo.find_all().unwrap() {
            assert_eq!(service.login(&seeded.email, "password").unwrap(), seeded);
            assert!(matches!(
                service.login(&seeded.email, "wrong-password"),
                Err(AppError::NotFound(_))
            ));
        }
    }

    #[test]
    fn test_login_is_case_insensitive_on_email() {
        let (service, _, notifier) = setup();

        let bob = service.login("BOB@EXAMPLE.COM", "password").unwrap();
        assert_eq!(bob, User::new(1, "bob@example.com", "password", "Bob"));
        assert_eq!(notifier.events(), vec!["login:1".to_string()]);
    }

    #[test]
    fn test_failed_login_sends_no_notification() {
        let (service, _, notifier) = setup();

        assert!(service.login("bob@example.com", "nope").is_err());
        assert!(service.login("nobody@example.com", "password").is_err());
        assert!(notifier.events().is_empty());
    }

    #[test]
    fn test_register_assigns_next_id_and_notifies() {
        let (service, _, notifier) = setup();

        let carl = service.register("carl@example.com", "pw", "Carl").unwrap();
        assert_eq!(carl.id, 4);
        assert_eq!(service.get_user(4).unwrap(), carl);
        assert_eq!(notifier.events(), vec!["register:4".to_string()]);

        // 새로 등록한 사용자로 로그인 가능
        assert_eq!(service.login("Carl@Example.com", "pw").unwrap().id, 4);
    }

    #[test]
    fn test_register_duplicate_email_conflicts() {
        let (service, repo, notifier) = setup();

        let result = service.register("bob@example.com", "x", "Bobby");
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        let result = service.register("ALICE@example.com", "x", "Alicia");
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        assert_eq!(repo.count().unwrap(), 3);
        assert!(notifier.events().is_empty());
    }

    #[test]
    fn test_get_user_bounds() {
        let (service, _, _) = setup();

        assert_eq!(service.get_user(1).unwrap().name, "Bob");
        assert_eq!(service.get_user(3).unwrap().name, "Tom");
        assert!(matches!(service.get_user(0), Err(AppError::NotFound(_))));
        assert!(matches!(service.get_user(4), Err(AppError::NotFound(_))));
        assert!(matches!(service.get_user(-1), Err(AppError::NotFound(_))));
    }
}
