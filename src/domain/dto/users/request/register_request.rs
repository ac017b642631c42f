//! 회원가입 요청 DTO
//!
//! 새 사용자 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 이메일 중복 여부는 디렉터리에서 검사하므로 여기서는 형식만 확인합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새 사용자 등록 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, max = 100, message = "비밀번호는 1-100자 사이여야 합니다"))]
    pub password: String,

    /// 표시 이름 (1-50자, 공백만으로 구성 불가)
    #[validate(
        length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 구성될 수 없습니다".into()));
    }
    Ok(())
}
