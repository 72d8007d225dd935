// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod forms;
pub mod poller;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use forms::{FlagFormState, FormField, MovieSearchState, SearchField};
pub use poller::{poll_once, StatusPoller, StatusUpdate};
pub use state::{App, AppState, AsyncAction, Backends, View};
