//! Mock applications. Each one is a title plus a block of static text; they
//! exist so there is something to open, drag, and stack.

use indoc::indoc;

use crate::components::{Component, TextPanelComponent};

#[derive(Debug)]
pub struct AppSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Short name for the taskbar launcher.
    pub launcher: &'static str,
    pub body: &'static str,
}

impl AppSpec {
    pub fn instantiate(&self) -> Box<dyn Component> {
        Box::new(TextPanelComponent::new(self.body))
    }
}

pub const CATALOG: &[AppSpec] = &[
    AppSpec {
        id: "calculator",
        title: "Calculator",
        launcher: "Calc",
        body: indoc! {"
            ┌───────────────┐
            │             0 │
            └───────────────┘
             7   8   9   /
             4   5   6   *
             1   2   3   -
             0   .   =   +
        "},
    },
    AppSpec {
        id: "terminal",
        title: "Terminal",
        launcher: "Term",
        body: indoc! {"
            guest@desk:~$ uname -a
            DeskOS 1.0 simulated x86_64
            guest@desk:~$ ls
            Documents  Downloads  Pictures
            guest@desk:~$ _
        "},
    },
    AppSpec {
        id: "notes",
        title: "Notes",
        launcher: "Notes",
        body: indoc! {"
            Shopping
            - coffee
            - bread

            Drag a window by its title bar.
            Resize from any border or corner.
            Double-click a title bar to maximize.
        "},
    },
    AppSpec {
        id: "weather",
        title: "Weather",
        launcher: "Wthr",
        body: indoc! {"
            Lisbon        21°C  partly cloudy
            Humidity      58%
            Wind          12 km/h NW

            Tue  23°   Wed  19°   Thu  20°
        "},
    },
    AppSpec {
        id: "calendar",
        title: "Calendar",
        launcher: "Cal",
        body: indoc! {"
                 October
            Mo Tu We Th Fr Sa Su
                      1  2  3  4
             5  6  7  8  9 10 11
            12 13 14 15 16 17 18
            19 20 21 22 23 24 25
            26 27 28 29 30 31
        "},
    },
    AppSpec {
        id: "browser",
        title: "Browser",
        launcher: "Web",
        body: indoc! {"
            [<] [>] [⟳]  desk://home

            Welcome to the desktop.
            This page is offline.
        "},
    },
];

pub fn find(id: &str) -> Option<&'static AppSpec> {
    CATALOG.iter().find(|app| app.id == id)
}
