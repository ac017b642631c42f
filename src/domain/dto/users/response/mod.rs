//! # 사용자 응답 DTO 모듈
//!
//! 엔티티를 HTTP 응답용 DTO로 변환합니다. 평문 비밀번호는 응답에 포함되지 않습니다.

pub mod user_response;

pub use user_response::UserResponse;
