mod components;
mod config;
mod filter;
mod install;
mod logging;
mod model;
mod registry;
mod showcase;
mod source;
mod state;
mod util;

use components::app::App;

fn main() {
    logging::init();
    log::info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
