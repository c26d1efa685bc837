use chrono::Utc;
use log::info;
use std::io::Write;

/// Inizializza env_logger con il formato del progetto.
///
/// `level` is an env_logger filter string (`info`, `consulta_ventas=debug`, ...);
/// `RUST_LOG` still wins when set.
pub fn init(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    // a second init (e.g. tests) keeps the first logger
    if result.is_ok() {
        info!("Logger initialized (level: {})", level);
    }
}
