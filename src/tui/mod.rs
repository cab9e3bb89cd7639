//! Interactive terminal dashboard using ratatui.
//!
//! [`App`] wraps the [`Store`](crate::state::Store) with terminal-only
//! state (cursors, focused text field, help overlay). [`run_dashboard`]
//! owns the terminal and the event loop; views in `views` are pure
//! functions of `&App`.

mod app;
mod events;
pub mod state;
mod status;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use theme::{colors, set_theme, ColorScheme, FooterHints, PaletteSurface, Styles, Theme};

pub use state::CardCursor;
pub use status::StatusMessage;

pub use app::{App, InputTarget, OverviewSection};
pub use events::{handle_key_event, Event, EventHandler};
pub use ui::{render, run_dashboard};
