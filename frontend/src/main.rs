mod app_delegation;
mod app_initialized;
mod app_ui;
mod app_uninit;
mod egui_renderer;
mod graphics;

use tracing::info;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app_delegation::DelegatedApp;
use crate::app_uninit::App;

fn main() {
    tracing_subscriber::fmt::init();
    info!("paper town demos starting");

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DelegatedApp::Uninitialized(App::new());
    event_loop.run_app(&mut app).expect("event loop error");
}
