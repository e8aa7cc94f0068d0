// src/sheet/style.rs
use rust_xlsxwriter::{Color, Format};

use crate::data::Answer;

// Fill / font pairs
const GREEN: (u32, u32) = (0xC6EFCE, 0x006100);
const RED: (u32, u32) = (0xFFC7CE, 0x9C0006);
const AMBER: (u32, u32) = (0xFFEB9C, 0x9C5700);

fn fill((bg, fg): (u32, u32)) -> Format {
    Format::new()
        .set_background_color(Color::RGB(bg))
        .set_font_color(Color::RGB(fg))
}

pub struct Styles {
    pub label: Format,
    pub yes: Format,
    pub no: Format,
    pub maybe: Format,
    /// Total below threshold.
    pub warning: Format,
    /// Total at or above threshold.
    pub success: Format,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            label: Format::new().set_bold(),
            yes: fill(GREEN),
            no: fill(RED),
            maybe: fill(AMBER),
            warning: fill(RED),
            success: fill(GREEN),
        }
    }

    pub fn for_answer(&self, answer: Answer) -> &Format {
        match answer {
            Answer::Yes => &self.yes,
            Answer::No => &self.no,
            Answer::Maybe => &self.maybe,
        }
    }
}

impl Default for Styles {
    fn default() -> Self { Self::new() }
}
