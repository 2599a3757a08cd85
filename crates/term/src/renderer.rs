//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw. The stage is small and ticks slowly, so there is
//! no diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Style changes are only emitted where the tone changes along a row.
pub fn encode_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Tone> = None;

    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            if current != Some(cell.tone) {
                apply_tone_into(out, cell.tone)?;
                current = Some(cell.tone);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    let (fg, bg, bold) = tone_colors(tone);
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetBackgroundColor(bg))?;
    if bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

/// Foreground, background and boldness for a tone
fn tone_colors(tone: Tone) -> (Color, Color, bool) {
    let black = Color::Rgb { r: 0, g: 0, b: 0 };
    let well = Color::Rgb { r: 24, g: 24, b: 32 };
    match tone {
        Tone::Blank => (Color::Rgb { r: 220, g: 220, b: 220 }, black, false),
        Tone::Border => (Color::Rgb { r: 200, g: 200, b: 200 }, black, false),
        Tone::Floor => (Color::Rgb { r: 70, g: 70, b: 80 }, well, false),
        Tone::Falling => (Color::Rgb { r: 240, g: 240, b: 240 }, well, true),
        Tone::Fixed => (Color::Rgb { r: 140, g: 140, b: 150 }, well, false),
        Tone::Shadow => (Color::Rgb { r: 220, g: 200, b: 60 }, well, false),
        Tone::GameOver => (Color::Rgb { r: 200, g: 60, b: 60 }, well, false),
        Tone::Label => (Color::Rgb { r: 255, g: 255, b: 255 }, black, true),
        Tone::Text => (Color::Rgb { r: 200, g: 200, b: 200 }, black, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "ab", Tone::Text);
        fb.put(2, 1, 'z', Tone::Fixed);

        let mut out = Vec::new();
        encode_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains('a'));
        assert!(text.contains('b'));
        assert!(text.contains('z'));
    }

    #[test]
    fn style_is_emitted_once_per_tone_run() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", Tone::Text);

        let mut single = Vec::new();
        encode_into(&fb, &mut single).unwrap();

        fb.put(2, 0, 'c', Tone::Label);
        let mut split = Vec::new();
        encode_into(&fb, &mut split).unwrap();

        assert!(split.len() > single.len());
    }

    #[test]
    fn game_over_differs_from_fixed() {
        assert_ne!(tone_colors(Tone::GameOver), tone_colors(Tone::Fixed));
    }
}
