//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 시작 배너와 컨텍스트 조립 과정의 진행 상황을 출력합니다.

/// 바이너리에 포함된 시작 배너 로고
pub const LOGO: &str = include_str!("../../resources/logo.txt");

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Creating Repository instances
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ user_repository: ✓ Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 컨텍스트 조립 완료 요약을 출력합니다
pub fn print_context_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 APPLICATION CONTEXT READY");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 로고와 버전 정보를 합친 배너 문자열
pub fn render_banner(logo: &str, version: &str) -> String {
    format!("{}\napp.version: {}", logo.trim_end(), version)
}

/// 시작 배너를 출력합니다
pub fn print_banner(version: &str) {
    println!("{}", render_banner(LOGO, version));
}
