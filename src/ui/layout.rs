//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Every rect here is a pure function of the terminal area, so the renderer
//! and the click dispatcher always agree on where a button or grid cell is.

use ratatui::layout::{Position, Rect};

use crate::board::GRID_SIZE;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 9;
/// Terminal rows per grid cell.
pub const CELL_HEIGHT: u16 = 3;

const GRID_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16;
const GRID_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16;

const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;
const ARROW_WIDTH: u16 = 5;

/// Geometry of the title screen.
#[derive(Debug, Clone, Copy)]
pub struct StartLayout {
    /// Title banner.
    pub title: Rect,
    /// Start button.
    pub start_button: Rect,
    /// Key hints at the bottom.
    pub help: Rect,
}

/// Geometry of the character-selection screen.
#[derive(Debug, Clone, Copy)]
pub struct SelectLayout {
    /// Title banner.
    pub title: Rect,
    /// Character portrait panel.
    pub portrait: Rect,
    /// Previous-character arrow button.
    pub prev_button: Rect,
    /// Next-character arrow button.
    pub next_button: Rect,
    /// Confirm button.
    pub confirm_button: Rect,
    /// Key hints at the bottom.
    pub help: Rect,
}

/// Geometry of the playing screen.
#[derive(Debug, Clone, Copy)]
pub struct PlayingLayout {
    /// Title banner.
    pub title: Rect,
    /// The 3x3 grid, exactly `GRID_WIDTH` x `GRID_HEIGHT`.
    pub grid: Rect,
    /// Key hints at the bottom.
    pub help: Rect,
}

/// Geometry of the end screen.
#[derive(Debug, Clone, Copy)]
pub struct EndLayout {
    /// Result banner.
    pub banner: Rect,
    /// Fun-fact panel.
    pub fact: Rect,
    /// Restart button.
    pub restart_button: Rect,
    /// Menu button.
    pub menu_button: Rect,
    /// Session stats panel.
    pub stats: Rect,
    /// Recent match history panel.
    pub history: Rect,
    /// Key hints at the bottom.
    pub help: Rect,
}

/// Computes the title-screen geometry.
pub fn start_layout(area: Rect) -> StartLayout {
    StartLayout {
        title: band(area, area.height / 4, 3),
        start_button: centered(area, BUTTON_WIDTH, BUTTON_HEIGHT, 0),
        help: bottom_band(area),
    }
}

/// Computes the character-selection geometry.
pub fn select_layout(area: Rect) -> SelectLayout {
    let portrait = centered(area, BUTTON_WIDTH, 7, 0);
    let arrow_y = portrait.y + portrait.height / 2 - BUTTON_HEIGHT / 2;
    SelectLayout {
        title: band(area, 1, 3),
        portrait,
        prev_button: Rect {
            x: portrait.x.saturating_sub(ARROW_WIDTH + 2),
            y: arrow_y,
            width: ARROW_WIDTH,
            height: BUTTON_HEIGHT,
        },
        next_button: Rect {
            x: portrait.x + portrait.width + 2,
            y: arrow_y,
            width: ARROW_WIDTH,
            height: BUTTON_HEIGHT,
        },
        confirm_button: Rect {
            x: portrait.x,
            y: portrait.y + portrait.height + 1,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        },
        help: bottom_band(area),
    }
}

/// Computes the playing-screen geometry.
pub fn playing_layout(area: Rect) -> PlayingLayout {
    PlayingLayout {
        title: band(area, 1, 3),
        grid: centered(area, GRID_WIDTH, GRID_HEIGHT, 1),
        help: bottom_band(area),
    }
}

/// Computes the end-screen geometry.
pub fn end_layout(area: Rect) -> EndLayout {
    let banner = band(area, 1, 3);
    let body_top = banner.y + banner.height + 1;
    let body_height = area
        .height
        .saturating_sub(banner.height + 4)
        .max(BUTTON_HEIGHT * 2 + 2);
    let left_width = area.width / 2;
    let right_x = area.x + left_width + 1;
    let right_width = area.width.saturating_sub(left_width + 1);

    let fact_height = body_height.saturating_sub(BUTTON_HEIGHT * 2 + 1).max(3);
    let fact = Rect {
        x: area.x + 1,
        y: body_top,
        width: left_width.saturating_sub(2),
        height: fact_height,
    };
    let restart_button = Rect {
        x: area.x + 1,
        y: fact.y + fact.height + 1,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };
    let menu_button = Rect {
        x: area.x + 1,
        y: restart_button.y + BUTTON_HEIGHT,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };

    let stats_height = 5;
    let stats = Rect {
        x: right_x,
        y: body_top,
        width: right_width.saturating_sub(1),
        height: stats_height,
    };
    let history = Rect {
        x: right_x,
        y: body_top + stats_height,
        width: right_width.saturating_sub(1),
        height: body_height.saturating_sub(stats_height),
    };

    EndLayout {
        banner,
        fact,
        restart_button,
        menu_button,
        stats,
        history,
        help: bottom_band(area),
    }
}

/// Checks whether a terminal coordinate lies inside a rect.
pub fn hit(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

/// Maps a click inside the grid rect to a `(row, col)` cell by cell-size
/// division. Clicks outside the grid map to `None`.
pub fn cell_at(grid: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    if !hit(grid, x, y) {
        return None;
    }
    let col = ((x - grid.x) / CELL_WIDTH) as usize;
    let row = ((y - grid.y) / CELL_HEIGHT) as usize;
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    Some((row, col))
}

/// A full-width horizontal band at the given offset from the area top.
fn band(area: Rect, offset_y: u16, height: u16) -> Rect {
    Rect {
        x: area.x,
        y: (area.y + offset_y).min(area.y + area.height.saturating_sub(height)),
        width: area.width,
        height: height.min(area.height),
    }
}

/// The key-hint band pinned to the bottom of the area.
fn bottom_band(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(3),
        width: area.width,
        height: 3.min(area.height),
    }
}

/// A rect of the given size centered in the area, shifted down by `offset_y`.
fn centered(area: Rect, width: u16, height: u16, offset_y: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2 + offset_y,
        width,
        height,
    }
}
