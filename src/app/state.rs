/// Application State: Szene plus transiente Editier-Session.
mod app_state;
mod session;

pub use app_state::AppState;
pub use session::{EditMode, EditSession, Selection};
