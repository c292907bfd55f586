mod reducer;
mod view;

pub use reducer::{Action, BoardState, ViewStore};
pub use view::BoardApp;

pub struct BoardReducer;
use navicula::reducer::Reducer;

impl Reducer for BoardReducer {
    type Message = Action;

    type DelegateMessage = Action;

    type Action = Action;

    type State = BoardState;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
