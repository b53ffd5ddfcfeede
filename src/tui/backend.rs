use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

/// Raw-mode terminal drawing below the cursor when the widget fits,
/// falling back to the alternate screen on very small terminals.
pub struct InlineTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    inline_mode: bool,
    height: u16,
}

impl InlineTerminal {
    pub fn new(height: u16) -> io::Result<Self> {
        let (_, term_height) = terminal::size()?;
        let inline_mode = height < term_height;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if !inline_mode {
            execute!(stdout, EnterAlternateScreen)?;
        }

        let viewport = if inline_mode {
            Viewport::Inline(height)
        } else {
            Viewport::Fullscreen
        };
        let terminal =
            Terminal::with_options(CrosstermBackend::new(stdout), TerminalOptions { viewport })?;

        Ok(Self {
            terminal,
            inline_mode,
            height,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for InlineTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut stdout = io::stdout();
        if self.inline_mode {
            // Leave no trace of the dropdown behind the prompt
            let _ = execute!(
                stdout,
                cursor::MoveUp(self.height),
                Clear(ClearType::FromCursorDown),
            );
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = stdout.flush();
    }
}
