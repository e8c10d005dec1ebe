use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{GLYPH_TABLE_SEPARATOR, Theme};
use crate::game::{Game, Outcome};

/// Rows taken by the HUD under the board.
pub const HUD_HEIGHT: u16 = 2;

const CONTROLS_HINT: &str = "Arrows/WASD move  P pause  Q quit";

/// Renders the stats row and the status row.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, game: &Game, paused: bool, theme: &Theme) {
    let [stats_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let size_color = if game.snake.len() >= game.settings().win_length {
        theme.hud_accent
    } else {
        theme.hud_text
    };

    frame.render_widget(
        Paragraph::new(stats_line(
            game.snake.len(),
            game.score,
            game.bricks.len(),
            usize::from(stats_area.width),
            size_color,
            theme.hud_text,
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.hud_muted)),
        stats_area,
    );

    frame.render_widget(
        Paragraph::new(status_line(game, paused, theme)).alignment(Alignment::Center),
        status_area,
    );
}

fn stats_line(
    length: usize,
    score: u32,
    bricks: usize,
    available_width: usize,
    size_color: Color,
    value_color: Color,
) -> Line<'static> {
    let compact = stats_width(length, score, bricks, false) > available_width;
    let size_label = if compact { "L" } else { "Size" };
    let score_label = if compact { "S" } else { "Score" };
    let bricks_label = if compact { "B" } else { "Bricks" };
    let sep = format!(" {GLYPH_TABLE_SEPARATOR} ");

    Line::from(vec![
        Span::raw(format!("{size_label}: ")),
        Span::styled(length.to_string(), Style::default().fg(size_color)),
        Span::raw(sep.clone()),
        Span::raw(format!("{score_label}: ")),
        Span::styled(score.to_string(), Style::default().fg(value_color)),
        Span::raw(sep),
        Span::raw(format!("{bricks_label}: ")),
        Span::styled(bricks.to_string(), Style::default().fg(value_color)),
    ])
}

fn stats_width(length: usize, score: u32, bricks: usize, compact: bool) -> usize {
    let size_label = if compact { "L" } else { "Size" };
    let score_label = if compact { "S" } else { "Score" };
    let bricks_label = if compact { "B" } else { "Bricks" };
    let sep_width = format!(" {GLYPH_TABLE_SEPARATOR} ").width();

    format!("{size_label}: {length}").width()
        + sep_width
        + format!("{score_label}: {score}").width()
        + sep_width
        + format!("{bricks_label}: {bricks}").width()
}

fn status_line(game: &Game, paused: bool, theme: &Theme) -> Line<'static> {
    let accent = Style::default()
        .fg(theme.hud_accent)
        .add_modifier(Modifier::BOLD);

    if let Some(outcome) = game.outcome() {
        return Line::from(Span::styled(outcome_text(outcome), accent));
    }

    if paused {
        return Line::from(Span::styled("Paused", accent));
    }

    if game.snake.is_growing() {
        return Line::from(Span::styled(
            format!("Growing +{}", game.snake.pending_growth()),
            Style::default().fg(theme.snake_body),
        ));
    }

    Line::from(Span::styled(
        CONTROLS_HINT,
        Style::default().fg(theme.hud_muted),
    ))
}

/// Message shown once the snake can no longer move.
#[must_use]
pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You Win!",
        Outcome::Lose => "You Lose!",
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::game::Outcome;

    use super::{outcome_text, stats_line, stats_width};

    fn plain(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn stats_line_uses_full_labels_when_they_fit() {
        let line = stats_line(12, 3, 7, 80, Color::White, Color::White);
        assert_eq!(plain(&line), "Size: 12 │ Score: 3 │ Bricks: 7");
    }

    #[test]
    fn stats_line_compacts_on_narrow_areas() {
        let line = stats_line(12, 3, 7, 10, Color::White, Color::White);
        assert_eq!(plain(&line), "L: 12 │ S: 3 │ B: 7");
    }

    #[test]
    fn stats_width_matches_rendered_text() {
        let line = stats_line(5, 10, 0, 80, Color::White, Color::White);
        assert_eq!(stats_width(5, 10, 0, false), plain(&line).chars().count());
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(outcome_text(Outcome::Win), "You Win!");
        assert_eq!(outcome_text(Outcome::Lose), "You Lose!");
    }
}
