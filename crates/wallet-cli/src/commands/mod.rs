pub mod balance;
pub mod list;
pub mod menu;
pub mod misc;
pub mod search;

pub use balance::handle_balance;
pub use list::handle_list;
pub use menu::handle_menu;
pub use misc::handle_completions;
pub use search::handle_search;
