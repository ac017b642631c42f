//! User Entity Implementation
//!
//! 사용자 디렉터리에 저장되는 사용자 레코드입니다.
//! 생성 이후에는 변경되지 않으며, 삭제 연산도 존재하지 않습니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 이메일은 대소문자를 구분하지 않는 유니크 키이고,
/// ID는 디렉터리가 `최대 ID + 1` 규칙으로 부여합니다.
///
/// 비밀번호는 평문으로 보관되므로 직렬화 대상에서 제외됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 ID (unique)
    pub id: i64,
    /// 사용자 이메일 (대소문자 무시 unique)
    pub email: String,
    /// 평문 비밀번호
    #[serde(skip_serializing)]
    pub password: String,
    /// 표시 이름
    pub name: String,
}

impl User {
    pub fn new(
        id: i64,
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// 이메일이 대소문자 구분 없이 일치하는지 확인
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// 이메일(대소문자 무시)과 비밀번호(정확히 일치)가 모두 맞는지 확인
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.has_email(email) && self.password == password
    }
}
