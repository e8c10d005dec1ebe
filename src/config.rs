use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Board width in grid cells.
pub const BOARD_WIDTH: u16 = 20;

/// Board height in grid cells.
pub const BOARD_HEIGHT: u16 = 16;

/// The single fixed board every game is played on.
pub const BOARD: GridSize = GridSize {
    width: BOARD_WIDTH,
    height: BOARD_HEIGHT,
};

/// Interval between two snake movement ticks.
pub const DEFAULT_SNAKE_TICK_MS: u64 = 250;

/// Interval between two brick spawns.
pub const DEFAULT_BRICK_TICK_MS: u64 = 5_000;

/// Segments added for every apple eaten.
pub const DEFAULT_GROWTH_PER_APPLE: u32 = 5;

/// Score awarded for every apple eaten.
pub const DEFAULT_POINTS_PER_APPLE: u32 = 1;

/// Body length at or above which a blocked snake counts as a win.
pub const DEFAULT_WIN_LENGTH: usize = 60;

/// Column of the spawned head; the tail spawns one cell to its left.
pub const SPAWN_HEAD_X: i32 = 1;

/// Directory name used under the platform config and data dirs.
pub const APP_DIR_NAME: &str = "brick-snake";

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub apple: Color,
    pub brick: Color,
    pub field_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub hud_muted: Color,
}

pub const THEME: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    apple: Color::Red,
    brick: Color::Rgb(178, 34, 34),
    field_bg: Color::Black,
    border_fg: Color::White,
    hud_text: Color::White,
    hud_accent: Color::Yellow,
    hud_muted: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_BRICK: &str = "▓▓";
pub const GLYPH_APPLE: &str = "()";
pub const GLYPH_SNAKE_HEAD_UP: &str = "/\\";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "\\/";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "<:";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = ":>";
pub const GLYPH_SNAKE_BODY_HORIZONTAL: &str = "══";
pub const GLYPH_SNAKE_BODY_VERTICAL: &str = "║ ";
pub const GLYPH_SNAKE_CORNER_DOWN_RIGHT: &str = "╔═";
pub const GLYPH_SNAKE_CORNER_DOWN_LEFT: &str = "╗ ";
pub const GLYPH_SNAKE_CORNER_UP_RIGHT: &str = "╚═";
pub const GLYPH_SNAKE_CORNER_UP_LEFT: &str = "╝ ";
pub const GLYPH_SNAKE_TAIL: &str = "░░";

/// Separator between HUD entries.
pub const GLYPH_TABLE_SEPARATOR: &str = "│";

#[cfg(test)]
mod tests {
    use super::{BOARD, GridSize};

    #[test]
    fn total_cells_multiplies_dimensions() {
        assert_eq!(BOARD.total_cells(), 320);
        assert_eq!(
            GridSize {
                width: 3,
                height: 0
            }
            .total_cells(),
            0
        );
    }
}
