mod state;
mod view;

pub use state::UserSelectorState;
pub use view::UserSelectorView;
