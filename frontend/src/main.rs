use frontend::{config, App};
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    // Parse the build configuration up front so problems are logged before the first render.
    let site = config::site_config();
    log::debug!("Starting {} build", site.profile);

    Renderer::<App>::new().render();
}
