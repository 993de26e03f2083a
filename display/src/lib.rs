//! Text renderers for dice sessions. The engine knows nothing about
//! presentation; every front end goes through [`RollRenderer`]. Three
//! renderers are bundled: plain glyphs, ASCII faces with a style toggle,
//! and a two-column stats dashboard.

pub mod faces;
pub mod glyphs;
pub mod panel;

use dice_engine::Session;

pub use faces::{FaceRenderer, FaceStyle};
pub use glyphs::GlyphRenderer;
pub use panel::DashboardRenderer;

/// Seam between the engine and any presentation technology: a renderer
/// turns the session's public queries into a displayable string.
pub trait RollRenderer {
    fn render(&self, session: &Session) -> String;
}

pub(crate) const NO_ROLLS: &str = "No rolls yet";
