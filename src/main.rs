//! 사용자 접근 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 애플리케이션 컨텍스트를 조립한 뒤,
//! 시작 배너를 출력하고 Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_access_service::config::{AppConfig, Environment, RateLimitConfig, ServerConfig};
use user_access_service::core::AppContext;
use user_access_service::routes::configure_all_routes;
use user_access_service::utils::display_terminal::print_banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let profile = load_env_file();
    init_logging();

    info!("🚀 사용자 접근 서비스 시작중... (profile: {})", profile);

    let app_config = AppConfig::from_env();
    let ctx = web::Data::new(AppContext::build(&app_config));

    print_banner(&app_config.version);

    info!("✅ 애플리케이션 컨텍스트가 준비되었습니다");

    start_http_server(ctx).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(ctx: web::Data<AppContext>) -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(server_config.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 로드 실패는 표준 에러로만 알립니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = loaded {
        eprintln!("환경 파일 로드 실패 (profile: {}): {}", profile, e);
    }

    profile
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경(`ENVIRONMENT`)에 따른 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=user_access_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    if environment == Environment::Production && std::env::var("RUST_LOG").is_err() {
        error!("RUST_LOG 미설정 - 프로덕션 기본 로그 필터를 사용합니다");
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(3000)와 자체 서버(8080)의 요청을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
