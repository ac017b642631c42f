//! # Domain Entities
//!
//! 사용자 디렉터리가 소유하는 도메인 엔티티들입니다.

pub mod users;
