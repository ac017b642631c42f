//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 시작 배너와 초기화 진행 상황 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::{print_banner, print_boxed_title};
//!
//! print_boxed_title("System Initialized");
//! print_banner("1");
//! ```

pub mod display_terminal;
