//! Presentation model.
//!
//! Front ends never read the session directly. They take a [`BoardView`]
//! snapshot, draw it, and send picks and resets back to the session. The
//! view is serializable so a browser host can receive it as JSON.

mod board;

pub use board::{BoardView, CardFace, CellView, BANNER_TITLE};
