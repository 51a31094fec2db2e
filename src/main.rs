//! 唯一随机密码生成器 - 主程序入口

use std::env;
use unique_passgen::{
    config::AppConfig, database::PasswordRepository, error::Result, Database, PasswordGenerator,
    UniquePasswordService,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志
    init_logger();

    // 获取配置文件路径
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".to_string());
    log::info!("📖 加载配置: {}", config_path);
    let config = AppConfig::load(&config_path)?;

    log::info!("🗄️  数据库: {}", config.database.url);
    log::info!(
        "🔧 长度: {}, 数字: {}, 符号: {}, 最大尝试次数: {}",
        config.generator.length,
        config.generator.include_digits,
        config.generator.include_symbols,
        config.generator.max_attempts
    );

    let database = Database::new(&config.database.url).await?;
    database.ping().await?;
    let issued = PasswordRepository::count(database.pool()).await?;
    log::info!("📚 历史密码数量: {}", issued);
    if let Some(last) = PasswordRepository::list_recent(database.pool(), 1).await?.first() {
        log::info!("🕒 上次发放时间: {}", last.created_at);
    }

    let generator_config = config.generator.generator_config();
    let generator = match config.generator.seed {
        Some(seed) => {
            log::warn!("使用固定随机种子 {}，生成结果可被复现", seed);
            PasswordGenerator::with_seed(generator_config, seed)
        }
        None => PasswordGenerator::new(generator_config),
    };

    let mut service = UniquePasswordService::new(generator, database.clone())
        .with_max_attempts(config.generator.max_attempts);

    let result = match service.generate_unique().await {
        Ok(password) => PasswordRepository::find(database.pool(), &password)
            .await
            .map(|record| (password, record)),
        Err(e) => Err(e),
    };
    database.close().await;

    let (password, record) = result?;
    if let Some(record) = record {
        log::info!("💾 已记录 id={}，创建时间 {}", record.id, record.created_at);
    }
    println!("{}", password);
    Ok(())
}

/// 初始化日志记录器
fn init_logger() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&log_level))
        .format_timestamp_secs()
        .init();

    log::debug!("📝 日志级别: {}", log_level);
}
