mod state;
mod view;

pub use state::PostDetailsState;
pub use view::PostDetailsView;
