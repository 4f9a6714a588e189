pub mod charting;

use blink::{
    app::App,
    game::GameState,
    layout::{screen_areas, target_rect},
    progress::ProgressState,
    session::SessionSummary,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
    Frame,
};

pub fn draw(app: &App, f: &mut Frame) {
    let area = f.area();
    render(app, area, f.buffer_mut());
}

pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let [header, field, footer] = screen_areas(area);

    render_progress(app, header, buf);

    match app.game.state() {
        GameState::Initial => {
            render_welcome(app, field, buf);
            legend("(space) or click to start / (esc)ape").render(footer, buf);
        }
        GameState::Playing => {
            render_field(app, field, buf);
            let hint = if app.config.keyboard_taps {
                "click the target or hit (space) / (r)eset / (esc)ape"
            } else {
                "click the target / (r)eset / (esc)ape"
            };
            legend(hint).render(footer, buf);
        }
        GameState::Completed => {
            render_results(app.last_summary.as_ref(), app.game.first_reaction_ms(), field, buf);
            legend("(space) new game / (r)eset / (esc)ape").render(footer, buf);
        }
    }
}

fn legend(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        text,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
}

fn render_progress(app: &App, area: Rect, buf: &mut Buffer) {
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut spans = app
        .game
        .progress()
        .iter()
        .map(|slot| match slot {
            ProgressState::Completed => Span::styled("● ", Style::default().fg(Color::Green)),
            ProgressState::Current => Span::styled(
                "◉ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            ProgressState::Future => Span::styled("○ ", dim),
        })
        .collect::<Vec<Span>>();

    if let Some(round) = app.game.current_round().filter(|_| app.game.is_playing()) {
        spans.push(Span::styled(
            format!("  round {}/{}", round + 1, app.game.rounds()),
            dim,
        ));
    }

    Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_welcome(app: &App, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let block = Block::bordered();
    let inner = block.inner(area);
    block.render(area, buf);

    let text = vec![
        Line::from(Span::styled("blink", bold.fg(Color::Magenta))),
        Line::from(""),
        Line::from(format!(
            "{} rounds, the target jumps every {:.1}s",
            app.session.rounds,
            app.session.relocation_interval.as_secs_f64()
        )),
        Line::from("hit it as fast as you can"),
    ];

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(inner);

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(middle, buf);
}

fn render_field(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM));
    let inner = block.inner(area);
    block.render(area, buf);

    let rect = target_rect(inner, app.game.target());
    let target_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD);

    Paragraph::new(Span::styled("●", target_style))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(target_style))
        .render(rect, buf);
}

fn render_results(
    summary: Option<&SessionSummary>,
    first_reaction_ms: Option<f64>,
    area: Rect,
    buf: &mut Buffer,
) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let magenta_style = Style::default().fg(Color::Magenta);

    let Some(summary) = summary else {
        let text = match first_reaction_ms {
            Some(ms) => format!("first reaction {ms:.0} ms\nplay more than one round to get intervals"),
            None => "no taps recorded".to_string(),
        };
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().title("results"))
            .render(area, buf);
        return;
    };

    let [chart_area, stats_area, rounds_area, reaction_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let (last_round, y_max) = charting::compute_chart_params(&summary.points());
    let tuples: Vec<(f64, f64)> = summary.points().into_iter().map(Into::into).collect();
    let datasets = vec![Dataset::default()
        .marker(ratatui::symbols::Marker::Braille)
        .style(magenta_style)
        .graph_type(GraphType::Line)
        .data(&tuples)];

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("round")
                .bounds([1.0, last_round])
                .labels(vec![
                    Span::styled("1", bold_style),
                    Span::styled(charting::format_label(last_round), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("ms")
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(y_max), bold_style),
                ]),
        )
        .render(chart_area, buf);

    Paragraph::new(Span::styled(
        format!(
            "avg {:.0} ms   best {:.0} ms   {:.1} sd",
            summary.average_ms, summary.best_ms, summary.std_dev_ms
        ),
        bold_style,
    ))
    .alignment(Alignment::Center)
    .render(stats_area, buf);

    let rounds = summary
        .intervals
        .iter()
        .enumerate()
        .map(|(i, ms)| {
            let style = if i == summary.best_index {
                bold_style.fg(Color::Green)
            } else {
                Style::default()
            };
            Span::styled(format!("#{} {:.0}  ", i + 1, ms), style)
        })
        .collect::<Vec<Span>>();

    Paragraph::new(Line::from(rounds))
        .alignment(Alignment::Center)
        .render(rounds_area, buf);

    if let Some(ms) = summary.first_reaction_ms {
        Paragraph::new(Span::styled(
            format!("first reaction {ms:.0} ms"),
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(reaction_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blink::{config::Config, game::Game};
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::{Duration, Instant};

    fn create_test_app() -> App {
        let config = Config::default();
        let game = Game::with_rng(
            config.rounds,
            config.relocation_interval(),
            StdRng::seed_from_u64(3),
        );
        App::with_game(game, config, Rect::new(0, 0, 80, 24))
    }

    fn rendered(app: &App) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        render(app, area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_ui_initial_screen() {
        let app = create_test_app();
        let text = rendered(&app);

        assert!(text.contains("blink"));
        assert!(text.contains("5 rounds"));
        assert!(text.contains("to start"));
    }

    #[test]
    fn test_ui_playing_draws_target() {
        let mut app = create_test_app();
        app.game.start_at(Instant::now());
        let text = rendered(&app);

        assert!(text.contains("●"));
        assert!(text.contains("◉"));
        assert!(text.contains("round 1/5"));
        assert!(text.contains("click the target / (r)eset"));
        assert!(!text.contains("hit (space)"));
    }

    #[test]
    fn test_ui_playing_legend_mentions_space_in_keyboard_mode() {
        let mut app = create_test_app();
        app.config.keyboard_taps = true;
        app.game.start_at(Instant::now());

        assert!(rendered(&app).contains("click the target or hit (space)"));
    }

    #[test]
    fn test_ui_target_drawn_where_hit_test_looks() {
        let mut app = create_test_app();
        app.game.start_at(Instant::now());

        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        render(&app, area, &mut buffer);

        let target = app.target_area();
        let centre = buffer
            .cell((target.x + target.width / 2, target.y + target.height / 2))
            .unwrap();
        assert_eq!(centre.symbol(), "●");
    }

    #[test]
    fn test_ui_results_screen() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.game.start_at(t0);
        for i in 1..=5u64 {
            app.game.tap_at(t0 + Duration::from_millis(i * 200));
        }
        app.last_summary = SessionSummary::from_game(&app.game);

        let text = rendered(&app);
        assert!(text.contains("avg 200 ms"));
        assert!(text.contains("#4 200"));
        assert!(text.contains("(space) new game"));
    }

    #[test]
    fn test_ui_results_without_intervals() {
        let mut app = create_test_app();
        app.game = Game::with_rng(1, Duration::from_secs(3), StdRng::seed_from_u64(3));
        let t0 = Instant::now();
        app.game.start_at(t0);
        app.game.tap_at(t0 + Duration::from_millis(320));
        app.last_summary = SessionSummary::from_game(&app.game);
        assert!(app.last_summary.is_none());

        let text = rendered(&app);
        assert!(text.contains("first reaction 320 ms"));
    }
}
