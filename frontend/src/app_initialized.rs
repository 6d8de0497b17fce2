use std::collections::HashMap;
use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use papertown_core::inputs::{Button, KeyState};
use papertown_core::session::Session;
use tracing::info;
use winit::application::ApplicationHandler;
use winit::event::ElementState::Pressed;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::NamedKey::{ArrowDown, ArrowLeft, ArrowRight, ArrowUp, Escape, Space, Tab};
use winit::keyboard::{self, Key};
use winit::window::{Window, WindowId};

use crate::app_ui::demo_screen::DemoScreen;
use crate::app_uninit::App;
use crate::egui_renderer::EguiRenderer;
use crate::graphics::GraphicsContext;

pub struct AppInitialized {
    pub session: Session,
    pub gc: GraphicsContext,
    pub window: Arc<Window>,
    pub egui_renderer: EguiRenderer,

    pub demo_screen: DemoScreen,

    pub input_bindings: HashMap<Key, Button>,
}

impl From<&mut App> for AppInitialized {
    fn from(app: &mut App) -> Self {
        let session = app.session.take().unwrap();
        let gc = app.gc.take().unwrap();
        let window = app.window.take().unwrap();
        let egui_renderer = app.egui_renderer.take().unwrap();
        let demo_screen = DemoScreen::init(egui_renderer.context());

        let mut input_bindings: HashMap<keyboard::Key, Button> = HashMap::new();
        input_bindings.insert(keyboard::Key::Named(ArrowUp), Button::Up);
        input_bindings.insert(keyboard::Key::Named(ArrowDown), Button::Down);
        input_bindings.insert(keyboard::Key::Named(ArrowLeft), Button::Left);
        input_bindings.insert(keyboard::Key::Named(ArrowRight), Button::Right);
        input_bindings.insert(keyboard::Key::Named(Space), Button::Confirm);

        Self {
            session,
            gc,
            window,
            egui_renderer,
            demo_screen,
            input_bindings,
        }
    }
}

impl AppInitialized {
    fn handle_redraw(&mut self) {
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [self.gc.surface_config.width, self.gc.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let surface_texture = self
            .gc
            .surface
            .get_current_texture()
            .expect("failed to acquire next swap chain texture");
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gc
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        self.egui_renderer.begin_frame(&self.window);

        let frame = egui::Frame {
            inner_margin: egui::Margin::same(0),
            outer_margin: egui::Margin::same(0),
            ..Default::default()
        };
        egui::CentralPanel::default()
            .frame(frame)
            .show(self.egui_renderer.context(), |ui| {
                self.demo_screen.draw(ui, &mut self.session);
            });

        self.egui_renderer.end_frame_and_draw(
            &self.gc.device,
            &self.gc.queue,
            &mut encoder,
            &self.window,
            &surface_view,
            screen_descriptor,
        );

        self.gc.queue.submit(Some(encoder.finish()));
        surface_texture.present();
    }

    fn handle_key(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;

        if let Some(button) = self.input_bindings.get(&logical_key).copied() {
            let next = match self.session.input_state.get(&button) {
                Some(ks) => ks.update_state(state == Pressed),
                None => KeyState::new(state == Pressed),
            };
            self.session.set_input(button, next);
            return;
        }

        if state == Pressed && !repeat && logical_key == Key::Named(Tab) {
            let next = self.session.scene.next();
            info!("switching demo: {}", next.title());
            self.session.select_scene(next);
        }
    }
}

impl ApplicationHandler for AppInitialized {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        self.egui_renderer.handle_input(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                info!("close requested; stopping");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                // one fixed simulation tick per presented frame
                self.session.advance();
                self.handle_redraw();
                self.window.request_redraw();
            }
            WindowEvent::Resized(new_size) => {
                self.gc.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == Pressed && event.logical_key == Key::Named(Escape) {
                    event_loop.exit();
                    return;
                }
                self.handle_key(event);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {}
}
