//! Board render model.

use serde::{Deserialize, Serialize};

use crate::core::CardIndex;
use crate::session::GameSession;

/// Heading of the completion banner.
pub const BANNER_TITLE: &str = "Congratulations! 🎉";

/// What a cell shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down; selectable unless the board is locked.
    Hidden,
    /// Face-up from a pick.
    Revealed(String),
    /// Matched: face-up, dimmed, disabled.
    Matched(String),
}

impl CardFace {
    /// The glyph, if the face is showing.
    #[must_use]
    pub fn glyph(&self) -> Option<&str> {
        match self {
            CardFace::Hidden => None,
            CardFace::Revealed(glyph) | CardFace::Matched(glyph) => Some(glyph),
        }
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: CardIndex,
    pub face: CardFace,
}

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub columns: usize,
    pub cells: Vec<CellView>,
    pub moves: u32,
    pub score: u32,
    pub locked: bool,
    pub complete: bool,
}

impl BoardView {
    /// Snapshot a session for rendering.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let symbols = session.symbols();
        let cells = session
            .deck()
            .iter()
            .map(|card| {
                let glyph = || symbols.glyph(card.face).unwrap_or("?").to_string();
                let face = if card.matched {
                    CardFace::Matched(glyph())
                } else if card.revealed {
                    CardFace::Revealed(glyph())
                } else {
                    CardFace::Hidden
                };
                CellView {
                    index: card.index,
                    face,
                }
            })
            .collect();

        Self {
            columns: session.config().columns.max(1),
            cells,
            moves: session.moves(),
            score: session.score(),
            locked: session.is_locked(),
            complete: session.is_complete(),
        }
    }

    /// Cells grouped into grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// The status line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Score: {}  Moves: {}", self.score, self.moves)
    }

    /// The completion message, once the game is over.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        self.complete.then(|| {
            format!(
                "You completed the game in {} moves with a score of {}!",
                self.moves, self.score
            )
        })
    }

    /// Whether a cell accepts a pick right now.
    #[must_use]
    pub fn is_clickable(&self, index: CardIndex) -> bool {
        !self.locked
            && self
                .cells
                .get(index.as_usize())
                .is_some_and(|cell| cell.face == CardFace::Hidden)
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status_line())?;
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match &cell.face {
                    CardFace::Hidden => format!("[{:>2}]", cell.index.raw()),
                    CardFace::Revealed(glyph) => format!("[{}]", glyph),
                    CardFace::Matched(glyph) => format!("({})", glyph),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        if let Some(banner) = self.banner() {
            writeln!(f, "{}", BANNER_TITLE)?;
            writeln!(f, "{}", banner)?;
        }
        Ok(())
    }
}
