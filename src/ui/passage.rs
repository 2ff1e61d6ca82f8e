use itertools::Itertools;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::tokenizer::{Word, WordResult};

/// Number of passage lines shown at once
pub const VISIBLE_LINES: usize = 3;

/// Columns between two words on the same line
const WORD_GAP: usize = 1;

/// Greedily pack word indices into lines no wider than `width` columns.
/// A word wider than the line gets a line of its own.
pub fn wrap_words(words: &[Word], width: u16) -> Vec<Vec<usize>> {
    let width = usize::from(width.max(1));
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut used = 0;

    for word in words {
        let word_width = word.text.width();
        match lines.last_mut() {
            Some(line) if used + WORD_GAP + word_width <= width => {
                line.push(word.index);
                used += WORD_GAP + word_width;
            }
            _ => {
                lines.push(vec![word.index]);
                used = word_width;
            }
        }
    }

    lines
}

pub fn line_of(lines: &[Vec<usize>], index: usize) -> Option<usize> {
    lines
        .iter()
        .find_position(|line| line.contains(&index))
        .map(|(line, _)| line)
}

/// First visible line: the current word's line goes to the top unless that
/// would leave the last page short.
pub fn scroll_offset(total_lines: usize, current_line: usize, visible: usize) -> usize {
    current_line.min(total_lines.saturating_sub(visible))
}

/// The wrapped lines that should be on screen for `current_index`
pub fn visible_lines(
    words: &[Word],
    current_index: usize,
    width: u16,
    visible: usize,
) -> Vec<Vec<usize>> {
    let lines = wrap_words(words, width);
    let current_line = line_of(&lines, current_index).unwrap_or(0);
    let offset = scroll_offset(lines.len(), current_line, visible);

    lines.into_iter().skip(offset).take(visible).collect()
}

pub fn word_style(word: &Word, is_current: bool) -> Style {
    if is_current {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD);
    }

    match word.result {
        WordResult::Untested => Style::default().fg(Color::DarkGray),
        WordResult::Correct => Style::default().fg(Color::Green),
        WordResult::Incorrect => Style::default().fg(Color::Red),
    }
}
