//! # 메일 알림 서비스
//!
//! 로그인/회원가입 성공 시 사용자에게 보낼 알림 문구를 만들어 로그로 출력합니다.
//! 외부 전송 수단은 없으며 실패하지 않습니다.

use chrono::{DateTime, Utc};
use crate::{
    config::MailZone,
    domain::entities::users::User,
};

/// 사용자 이벤트 알림 인터페이스
///
/// `UserService`는 이 trait에만 의존하므로 테스트에서 기록용 구현으로 교체할 수 있습니다.
pub trait Notifier: Send + Sync {
    /// 로그인 성공 알림
    fn notify_login(&self, user: &User);

    /// 회원가입 성공 알림
    fn notify_registration(&self, user: &User);
}

/// 메일 알림 스텁
///
/// 설정된 시간대로 로그인 시각을 표시합니다.
/// 생성 시 초기화 로그를, 해제 시 종료 로그를 남깁니다.
///
/// ```rust,ignore
/// let mail_service = MailService::new(MailZone::parse("Asia/Seoul")?);
/// mail_service.notify_login(&user);
/// // [INFO] Hi, Bob! You are logged in at 2024-01-01T11:00:00+09:00[Asia/Seoul]
/// ```
#[derive(Debug)]
pub struct MailService {
    zone: MailZone,
}

impl MailService {
    pub fn new(zone: MailZone) -> Self {
        log::info!("Init mail service with zone = {}", zone);
        Self { zone }
    }

    pub fn zone(&self) -> MailZone {
        self.zone
    }

    /// 설정된 시간대 기준 현재 시각
    pub fn current_time(&self) -> String {
        self.zone.format(Utc::now())
    }

    pub fn login_message(&self, user: &User) -> String {
        self.login_message_at(user, Utc::now())
    }

    pub fn login_message_at(&self, user: &User, at: DateTime<Utc>) -> String {
        format!("Hi, {}! You are logged in at {}", user.name, self.zone.format(at))
    }

    pub fn registration_message(&self, user: &User) -> String {
        format!("Welcome, {}!", user.name)
    }
}

impl Default for MailService {
    fn default() -> Self {
        Self::new(MailZone::Utc)
    }
}

impl Notifier for MailService {
    fn notify_login(&self, user: &User) {
        log::info!("{}", self.login_message(user));
    }

    fn notify_registration(&self, user: &User) {
        log::info!("{}", self.registration_message(user));
    }
}

impl Drop for MailService {
    fn drop(&mut self) {
        log::info!("Shutdown mail service");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bob() -> User {
        User::new(1, "bob@example.com", "password", "Bob")
    }

    #[test]
    fn test_login_message_uses_configured_zone() {
        let service = MailService::new(MailZone::parse("+08:00").unwrap());
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();

        assert_eq!(
            service.login_message_at(&bob(), at),
            "Hi, Bob! You are logged in at 2024-01-01T10:00:00+08:00"
        );
    }

    #[test]
    fn test_login_message_defaults_to_utc() {
        let service = MailService::default();
        let at = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();

        assert_eq!(service.zone(), MailZone::Utc);
        assert!(service.login_message_at(&bob(), at).ends_with("2024-06-30T23:59:59Z"));
    }

    #[test]
    fn test_registration_message() {
        let service = MailService::default();
        assert_eq!(service.registration_message(&bob()), "Welcome, Bob!");
    }

    #[test]
    fn test_current_time_carries_zone_name() {
        let service = MailService::new(MailZone::parse("Asia/Seoul").unwrap());
        assert!(service.current_time().ends_with("+09:00[Asia/Seoul]"));
    }

    #[test]
    fn test_notifications_do_not_fail() {
        let service = MailService::default();
        service.notify_login(&bob());
        service.notify_registration(&bob());
    }
}
