//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 애플리케이션 컨텍스트에서 한 번 생성되며, 의존성은 생성자로 주입됩니다.
//!
//! # Features
//!
//! - 이메일/비밀번호 로그인
//! - ID 기반 사용자 조회
//! - 회원가입 (이메일 중복 방지, ID 자동 부여)
//! - 로그인/회원가입 메일 알림 (로그 출력)

pub mod users;
pub mod mail;
