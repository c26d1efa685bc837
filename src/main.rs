use consulta_ventas::client::config::ClientConfig;
use consulta_ventas::client::gui::app::ConsultaApp;
use consulta_ventas::client::services::query_client::QueryClient;
use consulta_ventas::utils::logger;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional), PATH_API_AWS lives there
    let config = ClientConfig::from_env()?;
    logger::init(&config.log_level);
    config.log_summary();

    let client = QueryClient::from_config(&config)?;
    let settings = iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(860.0, 900.0),
            ..Default::default()
        },
        ..iced::Settings::with_flags(client)
    };
    ConsultaApp::run(settings)?;
    Ok(())
}
