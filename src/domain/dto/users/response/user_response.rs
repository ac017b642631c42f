use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 비밀번호를 제외한 공개 필드만 노출합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email, name, .. } = user;

        Self { id, email, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_user_drops_password() {
        let response = UserResponse::from(User::new(3, "tom@example.com", "password", "Tom"));

        assert_eq!(
            response,
            UserResponse {
                id: 3,
                email: "tom@example.com".to_string(),
                name: "Tom".to_string(),
            }
        );
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
    }
}
