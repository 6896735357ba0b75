use raylib::prelude::*;

use crate::deck::{Deck, SlideContent};
use crate::text::{estimated_chars_per_line, wrap_estimated};

const TITLE_FONT_SIZE: i32 = 32;
const BODY_FONT_SIZE: i32 = 20;

/// Narrative column for the current step: title, wrapped body text, bulleted
/// list items, and a step counter.
pub fn draw_narrative(
    d: &mut RaylibDrawHandle,
    deck: &Deck,
    current: Option<usize>,
    column: Rectangle,
) {
    let Some(slide) = current.and_then(|step| deck.slide(step)) else {
        return;
    };

    let x = (column.x + 24.0) as i32;
    let mut y = (column.y + column.height * 0.18) as i32;
    let budget = estimated_chars_per_line(column.width - 48.0, BODY_FONT_SIZE);

    if !slide.title.is_empty() {
        d.draw_text(&slide.title, x, y, TITLE_FONT_SIZE, Color::RAYWHITE);
        y += TITLE_FONT_SIZE + 18;
    }
    for line in wrap_estimated(&slide.text, budget) {
        d.draw_text(&line, x, y, BODY_FONT_SIZE, Color::LIGHTGRAY);
        y += BODY_FONT_SIZE + 8;
    }
    if let SlideContent::List { items } = &slide.content {
        y += 10;
        for item in items {
            for (i, line) in wrap_estimated(item, budget.saturating_sub(2)).iter().enumerate() {
                let bullet = if i == 0 { "- " } else { "  " };
                d.draw_text(
                    &format!("{bullet}{line}"),
                    x,
                    y,
                    BODY_FONT_SIZE,
                    Color::LIGHTGRAY,
                );
                y += BODY_FONT_SIZE + 6;
            }
        }
    }

    let counter = format!("{} / {}", slide.step + 1, deck.len());
    d.draw_text(
        &counter,
        x,
        (column.y + column.height - 40.0) as i32,
        16,
        Color::GRAY,
    );
}
