//! Terminal host for the window core.
//!
//! [`Desktop`] owns the registry and the interaction controller, turns
//! crossterm input into core calls, and paints the registry state every
//! frame. Terminal cells are mapped to viewport pixels through a
//! [`CellScale`], so the core never sees cell units.

pub mod apps;
pub mod chrome;
pub mod decorator;
pub mod scale;
pub mod taskbar;

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellArea;
use ratatui::style::Style;

use crate::components::{Component, ComponentContext};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::event_loop::ControlFlow;
use crate::geometry::{Point, Rect, Viewport};
use crate::theme;
use crate::ui::{fill, safe_set_string};
use crate::window::{InteractionController, PointerEvent, PointerTarget, WindowId, WindowRegistry};

use chrome::ChromeRegion;
use decorator::{TitleBarDecorator, WindowDecorator};
use scale::CellScale;
use taskbar::{Taskbar, TaskbarEntry, TaskbarHit};

const EMPTY_HINT: &str = "Click a launcher below to open an app. Ctrl+Q quits.";

pub type HostedContent = Box<dyn Component>;

pub struct Desktop {
    registry: WindowRegistry<HostedContent>,
    interaction: InteractionController,
    scale: CellScale,
    taskbar: Taskbar,
    decorator: Box<dyn WindowDecorator>,
    screen: CellArea,
    managed: CellArea,
}

impl Desktop {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            registry: WindowRegistry::new(),
            interaction: InteractionController::new(),
            scale: config.scale,
            taskbar: Taskbar::new(config.taskbar_rows),
            decorator: Box::new(TitleBarDecorator),
            screen: CellArea::default(),
            managed: CellArea::default(),
        }
    }

    /// Opens a window for a catalog app.
    pub fn open_app(&mut self, app_id: &str) -> Result<WindowId, ShellError> {
        let app =
            apps::find(app_id).ok_or_else(|| ShellError::UnknownApp(app_id.to_string()))?;
        let id = self.registry.open(app.id, app.title, app.instantiate());
        tracing::info!(window_id = %id, app = app.id, "opened app");
        Ok(id)
    }

    pub fn registry(&self) -> &WindowRegistry<HostedContent> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry<HostedContent> {
        &mut self.registry
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Viewport the core sees for the current screen.
    pub fn viewport(&self) -> Viewport {
        self.scale.viewport(
            self.screen.width,
            self.screen.height,
            self.taskbar.rows().min(self.screen.height),
        )
    }

    /// Adopts a new screen size. Called on every render and on resize events.
    pub fn resize(&mut self, area: CellArea) {
        if area == self.screen {
            return;
        }
        tracing::debug!(width = area.width, height = area.height, "screen resized");
        self.screen = area;
        self.managed = self.taskbar.split_area(area);
    }

    /// Signed cell rectangle a window currently covers.
    pub fn window_cells(&self, id: WindowId) -> Option<Rect> {
        let viewport = self.viewport();
        self.registry
            .get(id)
            .map(|window| self.scale.to_cells(window.frame(&viewport)))
    }

    /// Classifies the cell under the pointer against the topmost visible
    /// window covering it.
    pub fn target_at(&self, column: u16, row: u16) -> PointerTarget {
        let viewport = self.viewport();
        let Some(window) = self
            .registry
            .topmost_overlapping(self.scale.cell_rect(column, row), &viewport)
            .and_then(|id| self.registry.get(id))
        else {
            return PointerTarget::Desktop;
        };
        let id = window.id();
        let cells = self.scale.to_cells(window.frame(&viewport));
        let cell = Point::new(i32::from(column), i32::from(row));
        match chrome::classify(cells, window.is_maximized(), cell) {
            Some(ChromeRegion::Border(edge)) => PointerTarget::ResizeHandle(id, edge),
            Some(ChromeRegion::TitleBar) => PointerTarget::TitleBar(id),
            Some(ChromeRegion::Control(control)) => PointerTarget::Control(id, control),
            Some(ChromeRegion::Body) | None => PointerTarget::Body(id),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return ControlFlow::Quit;
                }
                if key.code == KeyCode::Esc {
                    self.interaction.cancel(&mut self.registry);
                }
            }
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
            }
            Event::Resize(width, height) => self.resize(CellArea::new(0, 0, *width, *height)),
            _ => {}
        }
        ControlFlow::Continue
    }

    /// Returns `true` when the event changed or could have changed state.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let (column, row) = (mouse.column, mouse.row);
        let point = self.scale.to_viewport(column, row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.interaction.is_active() && self.taskbar.contains(column, row) {
                    return self.handle_taskbar_click(column, row);
                }
                let target = self.target_at(column, row);
                self.interaction
                    .handle(&mut self.registry, &PointerEvent::down(target, point))
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => self
                .interaction
                .handle(&mut self.registry, &PointerEvent::moved(point)),
            MouseEventKind::Up(MouseButton::Left) => self
                .interaction
                .handle(&mut self.registry, &PointerEvent::up(point)),
            _ => false,
        }
    }

    fn handle_taskbar_click(&mut self, column: u16, row: u16) -> bool {
        match self.taskbar.hit_test(column, row) {
            Some(TaskbarHit::Launch(app_id)) => match self.open_app(app_id) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(%err, "launcher failed");
                    false
                }
            },
            Some(TaskbarHit::Window(id)) => {
                self.interaction.reset_double_click();
                self.registry.focus(id);
                true
            }
            None => false,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.resize(frame.area());
        self.render_into(frame.buffer_mut());
    }

    fn render_into(&mut self, buffer: &mut Buffer) {
        let managed = self.managed.intersection(buffer.area);
        let desktop_style = Style::default()
            .bg(theme::desktop_bg())
            .fg(theme::desktop_fg());
        fill(buffer, managed, desktop_style);

        if self.registry.is_empty() && managed.height > 0 {
            let width = EMPTY_HINT.chars().count() as u16;
            let x = managed.x + managed.width.saturating_sub(width) / 2;
            let y = managed.y + managed.height / 2;
            safe_set_string(buffer, managed, x, y, EMPTY_HINT, desktop_style);
        }

        let viewport = self.viewport();
        let active = self.registry.active_id();
        let stack: Vec<(WindowId, Rect, String)> = self
            .registry
            .visible_in_stacking_order()
            .iter()
            .map(|w| {
                (
                    w.id(),
                    self.scale.to_cells(w.frame(&viewport)),
                    w.title().to_string(),
                )
            })
            .collect();

        let window_style = Style::default().bg(theme::window_bg()).fg(theme::window_fg());
        for (id, cells, title) in stack {
            let focused = active == Some(id);
            if let Some(visible) = clip(cells, managed) {
                fill(buffer, visible, window_style);
            }
            self.decorator
                .render_window(buffer, managed, cells, &title, focused);
            let content = chrome::content_rect(cells);
            if let Some(area) = clip(content, managed)
                && let Some(component) = self.registry.content_mut(id)
            {
                let hidden_cols = (i32::from(area.x) - content.x).max(0) as u16;
                let hidden_rows = (i32::from(area.y) - content.y).max(0) as u16;
                let ctx = ComponentContext::new(focused).with_hidden(hidden_cols, hidden_rows);
                component.render(buffer, area, &ctx);
            }
        }

        let entries: Vec<TaskbarEntry<'_>> = self
            .registry
            .windows()
            .map(|w| TaskbarEntry {
                id: w.id(),
                title: w.title(),
                minimized: w.is_minimized(),
                active: active == Some(w.id()),
            })
            .collect();
        self.taskbar.render(buffer, apps::CATALOG, &entries);
    }
}

/// Part of a signed cell rectangle that falls inside `bounds`.
fn clip(rect: Rect, bounds: CellArea) -> Option<CellArea> {
    let left = rect.x.max(i32::from(bounds.x));
    let top = rect.y.max(i32::from(bounds.y));
    let right = rect.right().min(i32::from(bounds.right()));
    let bottom = rect.bottom().min(i32::from(bounds.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(CellArea::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
