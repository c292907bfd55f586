mod state;
mod view;

pub use state::PostsState;
pub use view::PostsRegionView;
