use esp_idf_sys as _;
use plategate::app::App;

use plategate_esp_idf::config::Config;
use plategate_esp_idf::platform::PlatformImpl;

fn main() -> anyhow::Result<()> {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let config = Config::load()?;

    log::info!("Create platform");
    let platform = PlatformImpl::new(&config)?;

    log::info!("Create app");
    let mut app = App::new(&platform, config.app, &config.wifi)?;

    log::info!("Start loop");
    app.run()
}
