//! # User Management HTTP Handlers
//!
//! 회원가입과 사용자 조회 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 등록 | 201 Created |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK |
//!
//! 사용자 수정/삭제 엔드포인트는 없습니다. 디렉터리의 레코드는 불변입니다.
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::{context::AppContext, errors::AppError},
    domain::{RegisterUserRequest, UserResponse},
};

/// 회원가입 핸들러
///
/// # 응답
///
/// * `201 Created` - 새 ID가 부여된 사용자
/// * `400 Bad Request` - 이메일 형식 오류, 빈 이름 등
/// * `409 Conflict` - 대소문자 무시 기준 이미 등록된 이메일
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"carl@example.com","password":"pw","name":"Carl"}'
/// ```
#[post("")]
pub async fn register_user(
    ctx: web::Data<AppContext>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = ctx
        .user_service
        .register(&payload.email, &payload.password, &payload.name)?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 조회 핸들러
///
/// # 응답
///
/// * `200 OK` - 사용자 공개 정보
/// * `404 Not Found` - 존재하지 않는 ID
#[get("/{user_id}")]
pub async fn get_user(
    ctx: web::Data<AppContext>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = ctx.user_service.get_user(user_id.into_inner())?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
