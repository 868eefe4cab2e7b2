use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::apps::AppSpec;
use crate::theme;
use crate::ui::{fill, safe_set_string, truncate_to_width};
use crate::window::WindowId;

const MAX_TITLE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarHit {
    Launch(&'static str),
    Window(WindowId),
}

/// One running window as the taskbar shows it.
#[derive(Debug, Clone, Copy)]
pub struct TaskbarEntry<'a> {
    pub id: WindowId,
    pub title: &'a str,
    pub minimized: bool,
    pub active: bool,
}

/// Bottom strip with one launcher per app followed by one button per running
/// window. Minimized windows stay listed so they can be brought back.
#[derive(Debug)]
pub struct Taskbar {
    rows: u16,
    area: Rect,
    hits: Vec<(Rect, TaskbarHit)>,
}

impl Taskbar {
    pub fn new(rows: u16) -> Self {
        Self {
            rows: rows.max(1),
            area: Rect::default(),
            hits: Vec::new(),
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Splits `area` into the window area above and the taskbar strip below,
    /// returning the window area.
    pub fn split_area(&mut self, area: Rect) -> Rect {
        let height = self.rows.min(area.height);
        self.area = Rect {
            x: area.x,
            y: area.bottom().saturating_sub(height),
            width: area.width,
            height,
        };
        Rect {
            height: area.height.saturating_sub(height),
            ..area
        }
    }

    pub fn render(
        &mut self,
        buffer: &mut Buffer,
        catalog: &[AppSpec],
        entries: &[TaskbarEntry<'_>],
    ) {
        self.hits.clear();
        let bounds = self.area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let base = Style::default().bg(theme::panel_bg()).fg(theme::panel_fg());
        fill(buffer, bounds, base);

        let y = bounds.y;
        let max_x = bounds.right();
        let mut x = bounds.x;

        let launcher_style = base.fg(theme::launcher_fg()).add_modifier(Modifier::BOLD);
        for app in catalog {
            let chunk = format!(" +{} ", app.launcher);
            let hit = TaskbarHit::Launch(app.id);
            if !self.place(buffer, bounds, &mut x, y, &chunk, launcher_style, hit) {
                return;
            }
        }

        if x < max_x {
            safe_set_string(buffer, bounds, x, y, "│", base);
            x = x.saturating_add(1);
        }

        for entry in entries {
            let title = truncate_to_width(entry.title, MAX_TITLE);
            let chunk = if entry.minimized {
                format!(" ({title}) ")
            } else {
                format!(" {title} ")
            };
            let style = if entry.active {
                Style::default()
                    .bg(theme::panel_active_bg())
                    .fg(theme::panel_active_fg())
                    .add_modifier(Modifier::BOLD)
            } else if entry.minimized {
                base.fg(theme::panel_inactive_fg())
                    .add_modifier(Modifier::ITALIC)
            } else {
                base
            };
            let hit = TaskbarHit::Window(entry.id);
            if !self.place(buffer, bounds, &mut x, y, &chunk, style, hit) {
                return;
            }
        }
    }

    /// Writes one button and records its hit rect. Returns `false` once the
    /// strip is full.
    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        buffer: &mut Buffer,
        bounds: Rect,
        x: &mut u16,
        y: u16,
        chunk: &str,
        style: Style,
        hit: TaskbarHit,
    ) -> bool {
        let width = chunk.chars().count() as u16;
        if x.saturating_add(width) > bounds.right() {
            return false;
        }
        safe_set_string(buffer, bounds, *x, y, chunk, style);
        self.hits.push((
            Rect {
                x: *x,
                y,
                width,
                height: 1,
            },
            hit,
        ));
        *x = x.saturating_add(width);
        true
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains((column, row).into())
    }

    /// Button under the cell, from the most recent render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TaskbarHit> {
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains((column, row).into()))
            .map(|(_, hit)| *hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::apps::CATALOG;

    fn row(buffer: &Buffer, y: u16) -> String {
        (buffer.area.x..buffer.area.right())
            .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(""))
            .collect()
    }

    fn id(raw: u64) -> WindowId {
        WindowId::from_raw(raw)
    }

    #[test]
    fn split_keeps_strip_at_bottom() {
        let mut bar = Taskbar::new(2);
        let managed = bar.split_area(Rect::new(0, 0, 80, 24));
        assert_eq!(managed, Rect::new(0, 0, 80, 22));
        assert_eq!(bar.area(), Rect::new(0, 22, 80, 2));
        assert!(bar.contains(5, 23));
        assert!(!bar.contains(5, 21));
    }

    #[test]
    fn launchers_then_windows() {
        let mut bar = Taskbar::new(1);
        let area = Rect::new(0, 0, 120, 3);
        bar.split_area(area);
        let mut buffer = Buffer::empty(area);
        let entries = [
            TaskbarEntry {
                id: id(1),
                title: "Notes",
                minimized: false,
                active: true,
            },
            TaskbarEntry {
                id: id(2),
                title: "Weather",
                minimized: true,
                active: false,
            },
        ];
        bar.render(&mut buffer, &CATALOG[..2], &entries);
        let text = row(&buffer, 2);
        assert!(text.starts_with(" +Calc  +Term │ Notes  (Weather) "), "{text}");

        assert_eq!(bar.hit_test(0, 2), Some(TaskbarHit::Launch("calculator")));
        assert_eq!(bar.hit_test(8, 2), Some(TaskbarHit::Launch("terminal")));
        assert_eq!(bar.hit_test(14, 2), None);
        assert_eq!(bar.hit_test(16, 2), Some(TaskbarHit::Window(id(1))));
        assert_eq!(bar.hit_test(23, 2), Some(TaskbarHit::Window(id(2))));
        assert_eq!(bar.hit_test(16, 1), None);
    }

    #[test]
    fn stops_when_strip_is_full() {
        let mut bar = Taskbar::new(1);
        let area = Rect::new(0, 0, 10, 1);
        bar.split_area(area);
        let mut buffer = Buffer::empty(area);
        bar.render(&mut buffer, CATALOG, &[]);
        assert_eq!(bar.hit_test(0, 0), Some(TaskbarHit::Launch("calculator")));
        assert_eq!(bar.hit_test(8, 0), None);
    }
}
