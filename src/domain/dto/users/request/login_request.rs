//! 로그인 요청 DTO
//!
//! 이메일/비밀번호 로그인 요청 정보를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_request() {
        let request = LoginRequest {
            email: "BOB@EXAMPLE.COM".to_string(),
            password: "password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_password_rejected() {
        let request = LoginRequest {
            email: "bob@example.com".to_string(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
