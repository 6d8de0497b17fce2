use std::collections::HashMap;
use std::io::{BufRead, Cursor, Seek};

use egui::{
    pos2, vec2, Align2, Color32, ColorImage, Context, FontId, Rect, Sense, TextureHandle,
    TextureOptions, Ui,
};
use image::ImageFormat;
use papertown_core::draw::{DrawCommand, MeasureText, Rgba, SpriteSheet};
use papertown_core::session::Session;
use papertown_core::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Renders the 240x160 logical screen into the window at an integer scale
/// and answers the core's text-measurement queries from egui's font atlas.
pub struct DemoScreen {
    textures: HashMap<String, TextureHandle>,
}

fn load_png_bytes_to_image<R: BufRead + Seek>(bytes: R) -> ColorImage {
    let img = image::load(bytes, ImageFormat::Png).expect("failed to load image from bytes");
    let rgba_image = img.to_rgba8();
    let size = [rgba_image.width() as usize, rgba_image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba_image.as_raw())
}

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

struct ScreenMeasure {
    ctx: Context,
}

impl MeasureText for ScreenMeasure {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let galley = self.ctx.fonts(|fonts| {
            fonts.layout_no_wrap(text.to_owned(), FontId::monospace(size), Color32::BLACK)
        });
        (galley.size().x, galley.size().y)
    }
}

impl DemoScreen {
    pub fn init(context: &Context) -> Self {
        let options = TextureOptions::NEAREST;
        let mut textures = HashMap::new();

        let borders = context.load_texture(
            "border_tiles",
            load_png_bytes_to_image(Cursor::new(include_bytes!("../assets/borders.png"))),
            options,
        );
        let walk = context.load_texture(
            "walk_frames",
            load_png_bytes_to_image(Cursor::new(include_bytes!("../assets/walk.png"))),
            options,
        );
        textures.insert("borders".into(), borders);
        textures.insert("walk".into(), walk);

        Self { textures }
    }

    fn sheet_texture(&self, sheet: SpriteSheet) -> &TextureHandle {
        let key = match sheet {
            SpriteSheet::Borders => "borders",
            SpriteSheet::Walker => "walk",
        };
        // both textures are inserted at init; a miss is a programming error
        self.textures.get(key).expect("missing sprite sheet")
    }

    pub fn draw(&mut self, ui: &mut Ui, session: &mut Session) {
        let available = ui.available_size();
        let scale = (available.x / SCREEN_WIDTH as f32)
            .min(available.y / SCREEN_HEIGHT as f32)
            .floor()
            .max(1.0);
        let size = vec2(SCREEN_WIDTH as f32 * scale, SCREEN_HEIGHT as f32 * scale);

        let (frame_rect, _) = ui.allocate_exact_size(available, Sense::hover());
        ui.painter()
            .rect_filled(frame_rect, 0, Color32::from_gray(8));

        let screen_rect = Rect::from_center_size(frame_rect.center(), size);
        let painter = ui.painter_at(screen_rect);
        painter.rect_filled(screen_rect, 0, Color32::BLACK);

        let measure = ScreenMeasure {
            ctx: ui.ctx().clone(),
        };
        let mut commands = Vec::new();
        session.render(&measure, &mut commands);

        let origin = screen_rect.min;
        for command in commands {
            match command {
                DrawCommand::Rect {
                    x, y, w, h, color, ..
                } => {
                    let rect = Rect::from_min_size(
                        origin + vec2(x * scale, y * scale),
                        vec2(w * scale, h * scale),
                    );
                    painter.rect_filled(rect, 0, to_color32(color));
                }
                DrawCommand::Sprite {
                    sheet,
                    src_x,
                    src_y,
                    src_w,
                    src_h,
                    x,
                    y,
                } => {
                    let texture = self.sheet_texture(sheet);
                    let tex_size = texture.size_vec2();
                    let uv = Rect::from_min_max(
                        pos2(src_x as f32 / tex_size.x, src_y as f32 / tex_size.y),
                        pos2(
                            (src_x + src_w) as f32 / tex_size.x,
                            (src_y + src_h) as f32 / tex_size.y,
                        ),
                    );
                    let dest = Rect::from_min_size(
                        origin + vec2(x * scale, y * scale),
                        vec2(src_w as f32 * scale, src_h as f32 * scale),
                    );
                    painter.image(texture.id(), dest, uv, Color32::WHITE);
                }
                DrawCommand::Text {
                    x,
                    y,
                    size,
                    color,
                    text,
                } => {
                    painter.text(
                        origin + vec2(x * scale, y * scale),
                        Align2::LEFT_TOP,
                        text,
                        FontId::monospace(size * scale),
                        to_color32(color),
                    );
                }
            }
        }
    }
}
