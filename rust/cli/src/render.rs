//! ASCII table renderer.
//!
//! Every pile occupies one column of the grid ([`COL_WIDTH`] characters) on
//! the row given by its coordinate. Each row starts with a header line
//! naming the piles in it, so the labels match what the player types.
//!
//! ```text
//! D0      S0              F0      F1      F2      F3
//!  -----           -----   -----   -----   -----
//! |\ \ \|         |     | |     | |     | |     |
//! ```

use patience_engine::cards::Card;
use patience_engine::pile::{Pile, PileRef, PrintStyle};
use patience_engine::table::Table;

use crate::formatters::{rank_initial, suit_initial};

pub const CARD_WIDTH: usize = 7;
pub const CARD_HEIGHT: usize = 5;
/// Lines left showing of a face-up card covered by another
pub const CARD_HEIGHT_OVERLAP: usize = 3;
/// Lines left showing of a face-down card covered by another
pub const CARD_HEIGHT_OVERLAP_FACE_DOWN: usize = 1;
pub const COL_WIDTH: usize = CARD_WIDTH + 1;
/// Header line, a card and a blank separator line
pub const ROW_HEIGHT: usize = CARD_HEIGHT + 2;

const EDGE: &str = " ----- ";
const COVERED_EDGE: &str = "|-----|";
const BLANK: &str = "|     |";
const BACK_A: &str = "|\\ \\ \\|";
const BACK_B: &str = "| \\ \\ |";

/// Card line `line` (0..5), face up or down. Empty slots draw face up.
fn card_line(line: usize, face_up: bool) -> &'static str {
    match (line, face_up) {
        (0, _) | (4, _) => EDGE,
        (2, false) => BACK_B,
        (_, false) => BACK_A,
        (_, true) => BLANK,
    }
}

struct Canvas {
    width: usize,
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            lines: vec![vec![' '; width]; height],
        }
    }

    fn put(&mut self, x: usize, y: usize, text: &str) {
        let Some(line) = self.lines.get_mut(y) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            if x + i >= self.width {
                break;
            }
            line[x + i] = ch;
        }
    }

    fn finish(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            let s: String = line.into_iter().collect();
            out.push_str(s.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Lines of a pile's own drawing, excluding header and separator.
fn pile_height(table: &Table, pile: &Pile) -> usize {
    match pile.print_style() {
        PrintStyle::Nothing => 0,
        PrintStyle::BottomCardUnlessEmpty if pile.is_empty() => 0,
        PrintStyle::Cascade if !pile.is_empty() => {
            let covered: usize = pile
                .cards()
                .take(pile.card_count() - 1)
                .map(|id| covered_height(table.card(id)))
                .sum();
            covered + CARD_HEIGHT
        }
        _ => CARD_HEIGHT,
    }
}

fn covered_height(card: Option<&Card>) -> usize {
    if card.is_some_and(|c| !c.is_face_up()) {
        CARD_HEIGHT_OVERLAP_FACE_DOWN
    } else {
        CARD_HEIGHT_OVERLAP
    }
}

/// Draws one card at (x, y) and returns the number of lines used.
///
/// `on_card` marks a card lying on another one in a cascade; `covered` marks
/// a card with another one on top of it, which only shows its upper lines.
fn imprint_card(
    canvas: &mut Canvas,
    card: Option<&Card>,
    x: usize,
    y: usize,
    on_card: bool,
    covered: bool,
) -> usize {
    let face_up = card.map_or(true, |c| c.is_face_up());
    let line_count = if covered { covered_height(card) } else { CARD_HEIGHT };

    let mut first = 0;
    if on_card {
        canvas.put(x, y, COVERED_EDGE);
        first = 1;
    }
    for line in first..line_count {
        let row = y + line;
        canvas.put(x, row, card_line(line, face_up));
        let Some(c) = card.filter(|c| c.is_face_up()) else {
            continue;
        };
        match line {
            1 => canvas.put(x + 1, row, rank_initial(c.rank())),
            2 => canvas.put(x + 3, row, suit_initial(c.suit())),
            3 => {
                let rank = rank_initial(c.rank());
                canvas.put(x + CARD_WIDTH - 1 - rank.len(), row, rank);
            }
            _ => {}
        }
    }
    line_count
}

fn imprint_pile(canvas: &mut Canvas, table: &Table, pile: &Pile, x: usize, y: usize) {
    let card = |id| table.card(id);
    let mut cursor = pile.cursor();
    match pile.print_style() {
        PrintStyle::Nothing => {}
        PrintStyle::Cascade => {
            let Some(mut id) = cursor.bottom_card() else {
                imprint_card(canvas, None, x, y, false, false);
                return;
            };
            let mut row = y;
            loop {
                let on_card = cursor.peek(-1).is_some();
                let covered = cursor.peek(1).is_some();
                row += imprint_card(canvas, card(id), x, row, on_card, covered);
                match cursor.previous_card() {
                    Some(next) => id = next,
                    None => break,
                }
            }
        }
        PrintStyle::BottomCardOnly => {
            let bottom = cursor.bottom_card().and_then(card);
            imprint_card(canvas, bottom, x, y, false, false);
        }
        PrintStyle::BottomCardUnlessEmpty => {
            if let Some(id) = cursor.bottom_card() {
                imprint_card(canvas, card(id), x, y, false, false);
            }
        }
        PrintStyle::TopCardOnly => {
            let top = cursor.top_card().and_then(card);
            imprint_card(canvas, top, x, y, false, false);
        }
    }
}

/// Draws every registered pile. An empty table renders as an empty string.
pub fn render_table(table: &Table) -> String {
    let piles: Vec<(PileRef, &Pile)> = table.iter().collect();
    if piles.is_empty() {
        return String::new();
    }

    let columns = piles.iter().map(|(_, p)| p.coord().x + 1).max().unwrap_or(0);
    let rows = piles.iter().map(|(_, p)| p.coord().y + 1).max().unwrap_or(0);

    let mut heights = vec![ROW_HEIGHT; rows];
    for (_, pile) in &piles {
        let y = pile.coord().y;
        heights[y] = heights[y].max(pile_height(table, pile) + 2);
    }
    let mut tops = Vec::with_capacity(rows);
    let mut acc = 0;
    for h in &heights {
        tops.push(acc);
        acc += h;
    }

    let mut canvas = Canvas::new(columns * COL_WIDTH, acc);
    for (r, pile) in &piles {
        if pile.print_style() == PrintStyle::Nothing {
            continue;
        }
        let coord = pile.coord();
        let x = coord.x * COL_WIDTH;
        let top = tops[coord.y];
        canvas.put(x, top, &r.to_string());
        imprint_pile(&mut canvas, table, pile, x, top + 1);
    }
    canvas.finish()
}
