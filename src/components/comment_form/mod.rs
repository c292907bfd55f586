mod state;
mod view;

pub use state::{CommentFormState, FieldState};
pub use view::CommentFormView;
