use crate::controllers::interactive::FrameData;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::fractals::mandelbrot::mandelbrot_config::ViewerConfig;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

const OPAQUE_BLACK: [u8; BYTES_PER_PIXEL] = [0, 0, 0, 255];

/// Presents generated frames through a `pixels` framebuffer.
///
/// The framebuffer has the configured frame resolution; `pixels` scales it
/// into the surface and fills any margin with black.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = PixelsBuilder::new(config.window_size(), config.window_size(), surface_texture)
            .clear_color(wgpu::Color::BLACK)
            .build()
            .map_err(GuiError::Surface)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    fn maybe_draw_frame(&mut self, frame: Option<&FrameData>) {
        let Some(frame) = frame else {
            if !self.has_frame {
                fill_opaque_black(self.pixels.frame_mut());
            }
            return;
        };

        if frame.generation <= self.last_presented_generation {
            return;
        }

        if copy_pixel_buffer_into_frame(&frame.pixel_buffer, self.pixels.frame_mut()) {
            self.has_frame = true;
            self.last_presented_generation = frame.generation;
        } else {
            warn!(
                "skipping frame {}: {}x{} does not fit the framebuffer",
                frame.generation,
                frame.pixel_buffer.pixel_rect().width(),
                frame.pixel_buffer.pixel_rect().height()
            );
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        frame: Option<&FrameData>,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.maybe_draw_frame(frame);

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels
            .render_with(|encoder, render_target, context| {
                // Framebuffer first, scaled and letterboxed onto the surface
                context.scaling_renderer.render(encoder, render_target);

                let clipped_primitives =
                    egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: surface_size,
                    pixels_per_point: egui_ctx.pixels_per_point(),
                };

                let textures_delta = egui_output.textures_delta;

                for (id, delta) in &textures_delta.set {
                    egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
                }

                egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load, // keep the fractal underneath
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
                }

                for id in &textures_delta.free {
                    egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(GuiError::Surface)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(GuiError::Resize)
    }

    fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }
}

fn fill_opaque_black(dest: &mut [u8]) {
    for pixel in dest.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&OPAQUE_BLACK);
    }
}

/// Copies RGBA pixels into `dest`. Returns `false` and leaves `dest`
/// untouched when the sizes differ.
fn copy_pixel_buffer_into_frame(pixel_buffer: &PixelBuffer, dest: &mut [u8]) -> bool {
    let src = pixel_buffer.buffer();

    if src.len() != dest.len() {
        return false;
    }

    dest.copy_from_slice(src);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn fill_opaque_black_sets_every_pixel() {
        let mut dest = vec![7u8; 3 * BYTES_PER_PIXEL];

        fill_opaque_black(&mut dest);

        assert_eq!(dest, [0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn copy_keeps_rgba_layout() {
        let mut pixel_buffer = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());
        pixel_buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour::opaque(1, 2, 3))
            .unwrap();
        let mut dest = vec![9u8; 2 * 2 * BYTES_PER_PIXEL];

        assert!(copy_pixel_buffer_into_frame(&pixel_buffer, &mut dest));

        assert_eq!(&dest[4..8], &[1, 2, 3, 255]);
        assert_eq!(dest, pixel_buffer.buffer());
    }

    #[test]
    fn copy_rejects_mismatched_sizes() {
        let pixel_buffer = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());
        let mut dest = vec![9u8; 3 * 3 * BYTES_PER_PIXEL];

        assert!(!copy_pixel_buffer_into_frame(&pixel_buffer, &mut dest));
        assert!(dest.iter().all(|&b| b == 9));
    }
}
