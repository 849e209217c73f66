use crate::systems::hsla;

use super::frame::Dot;
use super::FieldCore;

/// Fixed saturation/lightness; hue and alpha come from each dot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub saturation: f32,
    pub lightness: f32,
}

impl Palette {
    pub fn fill_style(&self, dot: &Dot) -> String {
        hsla(dot.hue, self.saturation, self.lightness, dot.alpha)
    }
}

/// Something a frame can be drawn onto (a 2D canvas in the browser)
pub trait Surface {
    /// Wipe the previous frame
    fn clear(&mut self, width: u32, height: u32);

    /// Filled circle at the dot's screen position
    fn fill_dot(&mut self, dot: &Dot, palette: &Palette);
}

pub(super) fn render<S: Surface>(field: &FieldCore, surface: &mut S) -> usize {
    surface.clear(field.width, field.height);

    let palette = field.palette();
    let mut drawn = 0;
    for dot in field.frame_buffer.iter() {
        surface.fill_dot(&dot, &palette);
        drawn += 1;
    }
    drawn
}
