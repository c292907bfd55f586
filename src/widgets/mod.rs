mod stacks;
pub use stacks::*;

mod spinner;
pub use spinner::*;

mod errors;
pub use errors::*;
