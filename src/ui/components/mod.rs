//! UI components: board lanes, dialogs, and overlays.

pub mod board;
pub mod help_panel;
pub mod loading_dialog;
pub mod logs_panel;
pub mod reason_dialog;
pub mod status_bar;
pub mod toast;

pub use board::{Board, BoardView};
pub use help_panel::HelpPanel;
pub use loading_dialog::LoadingDialog;
pub use logs_panel::LogsPanel;
pub use reason_dialog::ReasonDialog;
pub use status_bar::StatusBar;
pub use toast::Toast;
