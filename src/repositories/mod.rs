//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 영속 저장소 없이 메모리 상의 디렉터리만 제공합니다.
//! 리포지토리는 애플리케이션 컨텍스트에서 한 번 생성되어 서비스에 주입됩니다.

pub mod users;
