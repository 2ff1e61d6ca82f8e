pub mod passage;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::{app::App, session::SessionState};

use self::passage::{visible_lines, word_style, VISIBLE_LINES};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const TITLE: &str = "🔥 Fast Fingers";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.session.state();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // padding
                Constraint::Min(0),    // body
            ])
            .split(area);

        Paragraph::new(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        if state.is_over() {
            render_over(state, chunks[2], buf);
        } else {
            render_test(state, chunks[2], buf);
        }
    }
}

fn counts_line(state: &SessionState) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let tally = state.tally();

    Line::from(vec![
        Span::styled("Total Words: ", bold.fg(Color::Gray)),
        Span::styled(tally.total.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("Correct Words: ", bold.fg(Color::Green)),
        Span::styled(tally.correct.to_string(), Style::default().fg(Color::Green)),
        Span::raw("   "),
        Span::styled("Incorrect Words: ", bold.fg(Color::Red)),
        Span::styled(tally.incorrect.to_string(), Style::default().fg(Color::Red)),
    ])
}

fn render_test(state: &SessionState, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                         // timer
            Constraint::Length(1),                         // counts
            Constraint::Length(VISIBLE_LINES as u16 + 2), // passage
            Constraint::Length(3),                         // input
            Constraint::Length(1),                         // legend
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(Line::from(vec![
        Span::styled("Time ", bold_style),
        Span::raw(state.clock()),
    ]))
    .render(chunks[0], buf);

    Paragraph::new(counts_line(state)).render(chunks[1], buf);

    render_passage(state, chunks[2], buf);

    let mut input = vec![Span::raw(state.pending_input().to_owned())];
    if state.is_running() {
        input.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    Paragraph::new(Line::from(input))
        .block(Block::bordered().title("Type here"))
        .render(chunks[3], buf);

    Paragraph::new(Span::styled(
        "(space) next word / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[4], buf);
}

fn render_passage(state: &SessionState, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    let words = state.words();

    let lines = visible_lines(words, state.current_index(), inner.width, VISIBLE_LINES)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.len() * 2);
            for (n, index) in line.into_iter().enumerate() {
                if n > 0 {
                    spans.push(Span::raw(" "));
                }
                let word = &words[index];
                spans.push(Span::styled(
                    word.text.clone(),
                    word_style(word, index == state.current_index()),
                ));
            }
            Line::from(spans)
        })
        .collect::<Vec<Line>>();

    Paragraph::new(lines).block(block).render(area, buf);

    if !state.is_running() {
        // idle overlay until the first key press starts the countdown
        Clear.render(inner, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(inner);

        Paragraph::new(Span::styled(
            "PRESS ANY KEY TO START",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
    }
}

fn render_over(state: &SessionState, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(1), // reason
            Constraint::Length(1), // counts
            Constraint::Length(1), // padding
            Constraint::Length(1), // legend
            Constraint::Min(0),
        ])
        .split(area);

    Paragraph::new(Span::styled(
        "Test is over",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .render(chunks[0], buf);

    if let Some(reason) = state.finish_reason() {
        Paragraph::new(Span::styled(
            format!("{} with {} left", reason, state.clock()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[1], buf);
    }

    Paragraph::new(counts_line(state)).render(chunks[2], buf);

    Paragraph::new(Span::styled(
        "(enter) or (r)etry / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[4], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    fn rendered_text(buffer: &Buffer) -> String {
        let area = buffer.area();
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn test_app(passage: &str, secs: u64) -> App {
        App::new(SessionConfig::new(passage, secs))
    }

    #[test]
    fn test_idle_shows_overlay_and_clock() {
        let app = test_app("hello world", 60);
        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("Fast Fingers"));
        assert!(text.contains("PRESS ANY KEY TO START"));
        assert!(text.contains("Time 01:00"));
        assert!(text.contains("Total Words: 0"));
        assert!(!text.contains("hello"));
        assert!(!text.contains("(r)etry"));
    }

    #[test]
    fn test_running_shows_words_and_input() {
        let mut app = test_app("hello world", 60);
        app.session.focus();
        app.session.submit_word("hello");
        app.session.change_input("wor");

        let text = rendered_text(&render(&app, 80, 24));

        assert!(!text.contains("PRESS ANY KEY TO START"));
        assert!(text.contains("hello world"));
        assert!(text.contains("wor"));
        assert!(text.contains("Correct Words: 1"));
        assert!(text.contains("Incorrect Words: 0"));
        assert!(text.contains("Total Words: 1"));
    }

    #[test]
    fn test_word_cells_are_styled_by_result() {
        let mut app = test_app("good bad next", 60);
        app.session.focus();
        app.session.submit_word("good");
        app.session.submit_word("bda");

        let buffer = render(&app, 80, 24);
        let find = |needle: &str| {
            let text = rendered_text(&buffer);
            let (row, line) = text
                .lines()
                .enumerate()
                .find(|(_, line)| line.contains("good bad next"))
                .unwrap();
            // border glyphs are multi-byte, so count chars rather than bytes
            let col = line[..line.find(needle).unwrap()].chars().count();
            (col as u16, row as u16)
        };

        assert_eq!(buffer[find("good")].fg, Color::Green);
        assert_eq!(buffer[find("bad")].fg, Color::Red);
        assert_eq!(buffer[find("next")].bg, Color::Gray);
    }

    #[test]
    fn test_passage_scrolls_to_current_word() {
        let passage = (0..60)
            .map(|n| format!("w{n:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut app = test_app(&passage, 60);
        app.session.focus();
        for n in 0..40 {
            app.session.submit_word(&format!("w{n:02}"));
        }

        let text = rendered_text(&render(&app, 40, 24));

        assert!(text.contains("w40"));
        assert!(!text.contains("w00"));
    }

    #[test]
    fn test_over_shows_retry_and_counts() {
        let mut app = test_app("the cat sat", 1);
        app.session.focus();
        app.session.submit_word("the");
        app.session.submit_word("dog");
        app.session.tick();

        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("Test is over"));
        assert!(text.contains("Time is up with 00:00 left"));
        assert!(text.contains("(enter) or (r)etry"));
        assert!(text.contains("Correct Words: 1"));
        assert!(text.contains("Incorrect Words: 1"));
        assert!(text.contains("Total Words: 2"));
        assert!(!text.contains("Type here"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let mut app = test_app("hello world", 60);
        let buffer = render(&app, 12, 4);
        assert_eq!(*buffer.area(), Rect::new(0, 0, 12, 4));

        app.session.focus();
        render(&app, 1, 1);
    }

    #[test]
    fn test_empty_passage_renders() {
        let mut app = test_app("", 60);
        render(&app, 80, 24);

        app.session.focus();
        let text = rendered_text(&render(&app, 80, 24));
        assert!(text.contains("Passage complete"));
    }

    #[test]
    fn test_ui_constants() {
        assert_eq!(HORIZONTAL_MARGIN, 5);
        assert_eq!(VERTICAL_MARGIN, 1);
    }
}
