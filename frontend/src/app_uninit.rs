use std::sync::{mpsc, Arc};

use papertown_core::session::Session;
use papertown_core::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tracing::info;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::app_initialized::AppInitialized;
use crate::egui_renderer::EguiRenderer;
use crate::graphics::GraphicsContext;

/// Startup stage: owns everything as `Option`s until the window and the
/// graphics context both exist, then `about_to_wait` promotes the app.
pub struct App {
    pub session: Option<Session>,
    pub gc: Option<GraphicsContext>,
    pub window: Option<Arc<Window>>,
    pub egui_renderer: Option<EguiRenderer>,

    pub app_initialized: Option<AppInitialized>,

    pub gc_tx: mpsc::Sender<GraphicsContext>,
    pub gc_rx: mpsc::Receiver<GraphicsContext>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            session: Some(Session::new()),
            gc: None,
            window: None,
            egui_renderer: None,
            app_initialized: None,
            gc_tx: tx,
            gc_rx: rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) {
        info!("initializing...");
        let window_attributes = WindowAttributes::default()
            .with_title("Paper Town")
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH * 2, SCREEN_HEIGHT * 2))
            .with_min_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );
        self.window = Some(window.clone());

        let gc = pollster::block_on(GraphicsContext::new(window));
        self.gc_tx.send(gc).expect("couldn't send");

        self.try_graphics_context();

        info!("initialized");
    }

    fn try_graphics_context(&mut self) {
        if let Some(window) = self.window.as_ref() {
            if let Ok(gc) = self.gc_rx.try_recv() {
                let fmt = gc.surface_config.format;
                self.egui_renderer = Some(EguiRenderer::new(&gc.device, fmt, None, 1, window));
                self.gc = Some(gc);
                info!("adapter has been set up");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.init_window(event_loop);
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {
        if self.gc.is_none() {
            self.try_graphics_context();
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if self.gc.is_none() {
            self.try_graphics_context();
            return;
        }

        if self.egui_renderer.is_some() && self.window.is_some() && self.session.is_some() {
            info!("initialized app");
            let app_init = AppInitialized::from(&mut *self);
            app_init.window.request_redraw();
            self.app_initialized = Some(app_init);
        }
    }
}
