use sdl2::pixels::PixelFormatEnum;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::state::FrameBuffer;

const SCALE: usize = 10;

/// # Display
/// Presents the machine's 64x32 1-bit frame buffer as a scaled sdl2
/// window. `render` is only called when the machine hands out a changed
/// frame, so between draws the canvas keeps showing the last one.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Opens the emulator window on an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "vip8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Expands a frame buffer into an RGB24 texture payload by
    /// concatenating its rows, triplicating each pixel into its three
    /// channel bytes, and scaling the 0/1 pixel state to full intensity.
    ///
    /// # Arguments
    /// * `frame` a machine frame buffer
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| std::iter::repeat(pixel).take(3))
            .map(|pixel| pixel * 255)
            .collect()
    }

    /// Streams the frame into an RGB24 texture and presents it.
    ///
    /// # Arguments
    /// * `frame` a machine frame buffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&Display::frame_to_texture(frame));
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture() {
        let mut frame: FrameBuffer = [[0; 64]; 32];
        frame[0][0..2].copy_from_slice(&[0, 1]);
        frame[1][0..2].copy_from_slice(&[1, 0]);
        let texture = Display::frame_to_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }
}
