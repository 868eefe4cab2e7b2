use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::drivers::InputDriver;
use crate::error::ShellError;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::shell::Desktop;

/// Drives `desktop` until it asks to quit: redraw, then feed every queued
/// input event through [`Desktop::handle_event`].
pub fn run_desktop<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> Result<(), ShellError>
where
    B: Backend,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    event_loop.run(|_, event| -> Result<ControlFlow, ShellError> {
        match event {
            None => {
                terminal
                    .draw(|frame| desktop.render(frame))
                    .map_err(|err| ShellError::Io(io::Error::other(err.to_string())))?;
                Ok(ControlFlow::Continue)
            }
            Some(event) => Ok(desktop.handle_event(&event)),
        }
    })
}
