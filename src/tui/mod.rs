pub mod app;
pub mod apps;
pub mod command;
pub mod element;
mod macros;
pub mod renderer;
pub mod resource;
pub mod runtime;
pub mod state;
pub mod subscription;
pub mod widgets;

pub use app::App;
pub use command::{Command, DispatchTarget};
pub use element::{Element, FocusId, LayoutConstraint};
pub use resource::Resource;
pub use runtime::Runtime;
pub use state::{RuntimeConfig, Theme, ThemeVariant};
pub use subscription::{KeyBinding, Subscription};

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run an app until it quits: terminal setup, the event/render loop,
/// and teardown.
pub async fn run<A: App>() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop::<A>(&mut terminal).await;

    // Always restore the terminal, even if the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<A: App>(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut runtime: Runtime<A> = Runtime::new();

    loop {
        // Drain all pending input before rendering
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    runtime.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    runtime.handle_mouse(mouse);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        runtime.poll_async_commands();

        terminal.draw(|frame| runtime.render(frame))?;

        if runtime.should_quit() {
            return Ok(());
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }
}
