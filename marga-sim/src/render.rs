//! Console renderer.

use std::io::Write;

use marga_map::{Pose, Renderer};

use crate::track::TrackLayout;

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the track with the vehicle as its heading arrow.
pub struct ConsoleRenderer<W: Write> {
    layout: TrackLayout,
    out: W,
    enabled: bool,
    clear_screen: bool,
    frames: u64,
}

impl ConsoleRenderer<std::io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout(layout: TrackLayout, enabled: bool, clear_screen: bool) -> Self {
        Self::new(layout, std::io::stdout(), enabled, clear_screen)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer writing to `out`.
    pub fn new(layout: TrackLayout, out: W, enabled: bool, clear_screen: bool) -> Self {
        Self {
            layout,
            out,
            enabled,
            clear_screen,
            frames: 0,
        }
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Text of one frame, without any terminal control codes.
    pub fn frame(&self, pose: &Pose) -> String {
        let capacity = (self.layout.width() + 1) * self.layout.height();
        let mut text = String::with_capacity(capacity);
        for (y, row) in self.layout.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let here = x as i32 == pose.location.x && y as i32 == pose.location.y;
                text.push(if here {
                    pose.orientation.symbol()
                } else {
                    cell.glyph()
                });
            }
            text.push('\n');
        }
        text
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, pose: &Pose) {
        if !self.enabled {
            return;
        }

        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&self.frame(pose));
        frame.push_str(&format!("{}\n", pose));

        let written = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush());
        match written {
            Ok(()) => self.frames += 1,
            // Drawing is best effort.
            Err(e) => tracing::debug!("Render failed: {}", e),
        }
    }
}
