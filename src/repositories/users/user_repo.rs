//! # 사용자 리포지토리 구현
//!
//! 사용자 디렉터리(in-memory)의 데이터 액세스 계층입니다.
//! 삽입 순서를 보존하는 `Vec<User>`를 `RwLock`으로 감싸 여러 워커에서 공유합니다.
//!
//! ## 특징
//!
//! - **명시적 소유권**: 디렉터리가 모든 사용자 레코드를 소유하고, 호출자는 복제본을 받습니다
//! - **원자적 등록**: 중복 검사, ID 부여, 추가가 하나의 쓰기 잠금 안에서 수행됩니다
//! - **불변 레코드**: 수정/삭제 연산이 없습니다

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::entities::users::User,
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 조회 규칙
///
/// - **자격 증명 조회**: 이메일은 대소문자 무시, 비밀번호는 정확히 일치.
///   삽입 순서상 처음 일치하는 레코드를 반환합니다
/// - **ID 조회**: 정확히 일치하는 레코드를 반환합니다
///
/// ## 등록 규칙
///
/// - 대소문자 무시로 같은 이메일이 있으면 `ConflictError`
/// - 새 ID는 `기존 최대 ID + 1` (디렉터리가 비어 있으면 1)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::UserRepository;
///
/// let repo = Arc::new(UserRepository::with_default_users());
///
/// let bob = repo.find_by_credentials("BOB@EXAMPLE.COM", "password")?;
/// let carl = repo.insert("carl@example.com", "pw", "Carl")?;
/// assert_eq!(carl.id, 4);
/// ```
#[derive(Debug, Default)]
pub struct UserRepository {
    users: RwLock<Vec<User>>,
}

impl UserRepository {
    /// 빈 디렉터리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 레코드로 디렉터리를 생성합니다. 순서는 그대로 보존됩니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// 기본 사용자(Bob, Alice, Tom)로 시드된 디렉터리를 생성합니다.
    pub fn with_default_users() -> Self {
        Self::with_users(vec![
            User::new(1, "bob@example.com", "password", "Bob"),
            User::new(2, "alice@example.com", "password", "Alice"),
            User::new(3, "tom@example.com", "password", "Tom"),
        ])
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users.read().context("사용자 디렉터리 읽기 잠금 실패")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users.write().context("사용자 디렉터리 쓰기 잠금 실패")
    }

    /// 이메일/비밀번호로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 처음으로 일치한 사용자
    /// * `Err(AppError::NotFound)` - 일치하는 사용자가 없음
    pub fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        self.read()?
            .iter()
            .find(|user| user.matches_credentials(email, password))
            .cloned()
            .ok_or_else(|| AppError::NotFound("로그인에 실패했습니다".to_string()))
    }

    /// ID로 사용자 조회
    pub fn find_by_id(&self, id: i64) -> AppResult<User> {
        self.read()?
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: id={}", id)))
    }

    /// 새 사용자 추가
    ///
    /// 중복 검사부터 추가까지 쓰기 잠금을 유지하므로,
    /// 동시에 등록해도 같은 ID가 두 번 부여되지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 새 ID가 부여된 사용자
    /// * `Err(AppError::ConflictError)` - 이미 등록된 이메일
    /// * `Err(AppError::InternalError)` - 최대 ID가 `i64::MAX`라 새 ID를 부여할 수 없음
    pub fn insert(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        let mut users = self.write()?;

        if users.iter().any(|user| user.has_email(email)) {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 이메일입니다: {}",
                email
            )));
        }

        let next_id = users
            .iter()
            .map(|user| user.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| AppError::InternalError("사용 가능한 사용자 ID가 없습니다".to_string()))?;
        let user = User::new(next_id, email, password, name);
        users.push(user.clone());

        log::debug!("사용자 추가됨 - ID: {}, 이메일: {}", user.id, user.email);

        Ok(user)
    }

    /// 등록된 사용자 수
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// 삽입 순서대로 전체 사용자 스냅샷을 반환합니다.
    pub fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.clone())
    }
}
