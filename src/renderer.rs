use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_APPLE, GLYPH_BRICK, GLYPH_SNAKE_BODY_HORIZONTAL,
    GLYPH_SNAKE_BODY_VERTICAL, GLYPH_SNAKE_CORNER_DOWN_LEFT, GLYPH_SNAKE_CORNER_DOWN_RIGHT,
    GLYPH_SNAKE_CORNER_UP_LEFT, GLYPH_SNAKE_CORNER_UP_RIGHT, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GridSize,
    THEME, Theme,
};
use crate::game::Game;
use crate::geometry::{Direction, Position};
use crate::snake::{Segment, SegmentKind};
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_outcome_menu, render_pause_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, paused: bool) {
    let theme = &THEME;
    let (board_area, hud_area) = layout(frame.area(), game.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.field_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_bricks(frame, inner, game, theme);
    render_apple(frame, inner, game, theme);
    render_snake(frame, inner, game, theme);
    render_hud(frame, hud_area, game, paused, theme);

    if let Some(outcome) = game.outcome() {
        render_outcome_menu(frame, board_area, outcome, game.score, game.snake.len());
    } else if paused {
        render_pause_menu(frame, board_area);
    }
}

// Board plus border, centred, with the HUD directly underneath.
fn layout(area: Rect, bounds: GridSize) -> (Rect, Rect) {
    let board_width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = bounds.height.saturating_add(2);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(board_width),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, board, hud, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(board_height),
        Constraint::Length(HUD_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(column);

    (board, hud)
}

fn render_bricks(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let style = Style::new().fg(theme.brick).bg(theme.field_bg);
    let buffer = frame.buffer_mut();

    for brick in &game.bricks {
        if let Some((x, y)) = logical_to_terminal(inner, game.bounds(), *brick) {
            buffer.set_string(x, y, GLYPH_BRICK, style);
        }
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let Some(apple) = game.apple else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, game.bounds(), apple) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_APPLE,
        Style::new()
            .fg(theme.apple)
            .bg(theme.field_bg)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let mut ahead: Option<&Segment> = None;

    for segment in game.snake.segments() {
        let glyph = segment_glyph(segment, ahead);
        ahead = Some(segment);

        let Some((x, y)) = logical_to_terminal(inner, game.bounds(), segment.position) else {
            continue;
        };

        let style = match segment.kind {
            SegmentKind::Head => Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
            SegmentKind::Torso => Style::new().fg(theme.snake_body),
            SegmentKind::Tail => Style::new().fg(theme.snake_tail),
        };
        buffer.set_string(x, y, glyph, style.bg(theme.field_bg));
    }
}

/// Picks the glyph for `segment`, given the segment directly ahead of it.
///
/// A torso whose direction is perpendicular to the one ahead sits on a turn
/// and gets a corner glyph.
#[must_use]
pub fn segment_glyph(segment: &Segment, ahead: Option<&Segment>) -> &'static str {
    match segment.kind {
        SegmentKind::Head => head_glyph(segment.direction),
        SegmentKind::Tail => GLYPH_SNAKE_TAIL,
        SegmentKind::Torso => match ahead {
            Some(ahead)
                if !segment.direction.is_none()
                    && !ahead.direction.is_none()
                    && segment.direction.is_perpendicular(ahead.direction) =>
            {
                corner_glyph(segment.direction, ahead.direction)
            }
            _ => straight_glyph(segment.direction),
        },
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right | Direction::None => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn straight_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up | Direction::Down => GLYPH_SNAKE_BODY_VERTICAL,
        Direction::Left | Direction::Right | Direction::None => GLYPH_SNAKE_BODY_HORIZONTAL,
    }
}

// `entered` is the heading the segment arrived with, so the cell connects to
// the side it came from and to the side the next segment left through.
fn corner_glyph(entered: Direction, leaves: Direction) -> &'static str {
    let from = match entered {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::None => Direction::None,
    };
    let up = from == Direction::Up || leaves == Direction::Up;
    let left = from == Direction::Left || leaves == Direction::Left;

    match (up, left) {
        (false, false) => GLYPH_SNAKE_CORNER_DOWN_RIGHT,
        (false, true) => GLYPH_SNAKE_CORNER_DOWN_LEFT,
        (true, false) => GLYPH_SNAKE_CORNER_UP_RIGHT,
        (true, true) => GLYPH_SNAKE_CORNER_UP_LEFT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::{
        BOARD, GLYPH_BRICK, GLYPH_SNAKE_BODY_HORIZONTAL, GLYPH_SNAKE_CORNER_DOWN_LEFT,
        GLYPH_SNAKE_CORNER_UP_RIGHT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_TAIL,
    };
    use crate::game::Game;
    use crate::geometry::{Direction, Position};
    use crate::settings::Settings;
    use crate::snake::{Segment, SegmentKind};

    use super::{logical_to_terminal, render, segment_glyph};

    fn torso(direction: Direction) -> Segment {
        Segment::new(SegmentKind::Torso, Position::new(3, 3), direction)
    }

    fn ahead(direction: Direction) -> Segment {
        Segment::new(SegmentKind::Torso, Position::new(4, 3), direction)
    }

    #[test]
    fn straight_torso_uses_body_glyph() {
        let glyph = segment_glyph(&torso(Direction::Right), Some(&ahead(Direction::Right)));
        assert_eq!(glyph, GLYPH_SNAKE_BODY_HORIZONTAL);
    }

    #[test]
    fn perpendicular_torso_uses_corner_glyph() {
        // Arrived moving right, next segment went down: joins left and down.
        let glyph = segment_glyph(&torso(Direction::Right), Some(&ahead(Direction::Down)));
        assert_eq!(glyph, GLYPH_SNAKE_CORNER_DOWN_LEFT);

        // Arrived moving left, next segment went up: joins right and up.
        let glyph = segment_glyph(&torso(Direction::Left), Some(&ahead(Direction::Up)));
        assert_eq!(glyph, GLYPH_SNAKE_CORNER_UP_RIGHT);
    }

    #[test]
    fn head_and_tail_glyphs_ignore_neighbours() {
        let head = Segment::new(SegmentKind::Head, Position::new(1, 1), Direction::Right);
        let tail = Segment::new(SegmentKind::Tail, Position::new(0, 1), Direction::Up);

        assert_eq!(segment_glyph(&head, None), GLYPH_SNAKE_HEAD_RIGHT);
        assert_eq!(segment_glyph(&tail, Some(&head)), GLYPH_SNAKE_TAIL);
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let inner = Rect::new(10, 5, 40, 16);

        assert_eq!(
            logical_to_terminal(inner, BOARD, Position::new(0, 0)),
            Some((10, 5))
        );
        assert_eq!(
            logical_to_terminal(inner, BOARD, Position::new(3, 2)),
            Some((16, 7))
        );
        assert_eq!(
            logical_to_terminal(inner, BOARD, Position::new(20, 0)),
            None
        );
    }

    #[test]
    fn frame_shows_snake_and_bricks() {
        let mut game = Game::with_seed(BOARD, Settings::default(), 9);
        game.start();
        game.apple = Some(Position::new(15, 12));
        game.bricks.insert(Position::new(10, 2));

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &game, false))
            .expect("draw should succeed");

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains(GLYPH_SNAKE_HEAD_RIGHT));
        assert!(content.contains(GLYPH_BRICK));
        assert!(content.contains("Score"));
    }
}
