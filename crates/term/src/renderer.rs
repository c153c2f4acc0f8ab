//! Terminal output: raw mode setup and frame presentation.
//!
//! A frame is small (a few hundred cells for a 10x20 well), so every repaint
//! rewrites the whole screen. Identical consecutive frames are skipped.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    shown: Option<FrameBuffer>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch to raw mode, the alternate screen and mouse capture.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::DisableLineWrap
        )
        .context("enter alternate screen")?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo everything [`enter`](Self::enter) did.
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )
        .context("leave alternate screen")?;
        self.out.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
            shown: None,
        }
    }

    /// Forget what is on screen so the next frame is always written.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `fb` on screen unless it is already showing.
    ///
    /// Returns whether anything was written.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<bool> {
        if self.shown.as_ref() == Some(fb) {
            return Ok(false);
        }

        self.buf.clear();
        encode_frame(fb, &mut self.buf).context("encode frame")?;
        self.out
            .write_all(&self.buf)
            .context("write frame to terminal")?;
        self.out.flush()?;

        match &mut self.shown {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(true)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Encode a whole frame as terminal commands.
///
/// Each row starts with a cursor move; consecutive glyphs sharing a style are
/// printed as one string after a single style change.
pub fn encode_frame(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;

    let mut run = String::new();
    for y in 0..fb.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        let mut glyphs = fb.row(y).iter().peekable();
        while let Some(first) = glyphs.next() {
            run.clear();
            run.push(first.ch);
            while let Some(g) = glyphs.next_if(|g| g.style == first.style) {
                run.push(g.ch);
            }
            set_style(out, first.style)?;
            queue!(out, Print(&run))?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

fn set_style(out: &mut Vec<u8>, style: Style) -> io::Result<()> {
    let weight = if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    };
    queue!(
        out,
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg)),
        SetAttribute(weight)
    )
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_style_glyphs_print_as_one_run() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.text(0, 0, "abc", Style::default());
        fb.text(3, 0, "def", Style::default().bold());
        let text = encoded(&fb);

        assert!(text.contains("abc"));
        assert!(text.contains("def"));
        // One style switch per run
        assert_eq!(text.matches("\x1b[38;2;").count(), 2);
    }

    #[test]
    fn every_row_gets_a_cursor_move() {
        let fb = FrameBuffer::new(2, 3);
        let text = encoded(&fb);
        for row in 1..=3 {
            assert!(text.contains(&format!("\x1b[{};1H", row)), "row {}", row);
        }
    }

    #[test]
    fn unchanged_frame_is_not_rewritten() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 2);
        fb.text(0, 0, "hi", Style::default());

        assert!(renderer.present(&fb).unwrap());
        let written = renderer.writer().len();
        assert!(written > 0);

        assert!(!renderer.present(&fb).unwrap());
        assert_eq!(renderer.writer().len(), written);

        fb.put(3, 1, '!', Style::default());
        assert!(renderer.present(&fb).unwrap());
        assert!(renderer.writer().len() > written);
    }

    #[test]
    fn invalidate_forces_a_rewrite() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let fb = FrameBuffer::new(3, 1);
        renderer.present(&fb).unwrap();
        renderer.invalidate();
        assert!(renderer.present(&fb).unwrap());
    }
}
