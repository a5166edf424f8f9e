use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Grid, Label, Orientation};

use crate::game::logic::GameState;
use crate::game::record::QUARTERS;
use crate::game::types::Side;
use crate::i18n::I18n;

const COLUMNS: usize = 4;
const ROWS: usize = QUARTERS + 2;

/// Caption plus a grid of labels showing one team's score table.
pub struct TeamTable {
    side: Side,
    root: GtkBox,
    cells: Vec<[Label; COLUMNS]>,
}

impl TeamTable {
    pub fn new(side: Side, i18n: &I18n) -> Self {
        let root = GtkBox::new(Orientation::Vertical, 4);
        let caption = Label::new(Some(&i18n.side(side)));
        caption.add_css_class("team-caption");
        root.append(&caption);

        let grid = Grid::new();
        grid.set_column_homogeneous(true);
        grid.set_row_spacing(5);
        grid.set_column_spacing(5);
        grid.set_margin_start(16);
        grid.set_margin_end(16);

        let mut cells = Vec::with_capacity(ROWS);
        for row in 0..ROWS {
            let labels: [Label; COLUMNS] = std::array::from_fn(|col| {
                let label = Label::new(None);
                grid.attach(&label, col as i32, row as i32, 1, 1);
                label
            });
            cells.push(labels);
        }
        root.append(&grid);

        Self { side, root, cells }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    /// Rewrite every cell from the current game state.
    pub fn update(&self, game: &GameState, i18n: &I18n) {
        let highlighted = game.last_played_quarter();
        for (i, (row, labels)) in game.rows(self.side).iter().zip(&self.cells).enumerate() {
            let texts = i18n.row_cells(row);
            let active = highlighted == Some(i);
            for (col, (label, text)) in labels.iter().zip(texts).enumerate() {
                label.set_text(&text);
                // First and last columns are always bold
                set_class(label, "cell-bold", row.is_emphasized() || col == 0 || col == COLUMNS - 1);
                set_class(label, "cell-active", active);
            }
        }
    }
}

fn set_class(label: &Label, class: &str, on: bool) {
    if on {
        label.add_css_class(class);
    } else {
        label.remove_css_class(class);
    }
}
