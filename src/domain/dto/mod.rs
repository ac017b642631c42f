//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이의 계약을 정의합니다.
//!
//! ```text
//! Client JSON ──▶ request::*  ──▶ UserService ──▶ User
//!                                                   │
//! Client JSON ◀── response::UserResponse ◀──────────┘
//! ```

pub mod users;
