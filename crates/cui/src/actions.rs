use crate::app::{App, Modal};
use crate::input::InputAction;
use crate::view;
use pokerslots_core::InputEvent;

pub fn dispatch(app: &mut App, action: InputAction) {
    if action == InputAction::Quit {
        app.should_quit = true;
        return;
    }
    match app.modal {
        Some(Modal::Notice(_)) => {
            if action != InputAction::None {
                app.close_modal();
            }
        }
        Some(Modal::BetSelector { .. }) => dispatch_bet_selector(app, action),
        None => dispatch_table(app, action),
    }
}

fn dispatch_bet_selector(app: &mut App, action: InputAction) {
    match action {
        InputAction::MoveUp => app.move_bet_cursor(false),
        InputAction::MoveDown => app.move_bet_cursor(true),
        InputAction::Primary => app.confirm_bet(),
        InputAction::Dismiss => app.close_modal(),
        InputAction::Click { column, row } => {
            let Some(Modal::BetSelector { options, cursor }) = app.modal.as_mut() else {
                return;
            };
            match view::bet_option_at(app.surface, options.len(), column, row) {
                Some(index) => {
                    *cursor = index;
                    app.confirm_bet();
                }
                None => app.close_modal(),
            }
        }
        _ => {}
    }
}

fn dispatch_table(app: &mut App, action: InputAction) {
    match action {
        InputAction::Primary => app.queue(InputEvent::Primary),
        InputAction::ToggleHold(position) => app.queue(InputEvent::ToggleHold(position)),
        InputAction::OpenBetSelector => app.queue(InputEvent::BetSelector),
        InputAction::Click { column, row } => {
            if let Some(point) = view::unproject(app.surface, column, row) {
                app.queue(InputEvent::Click(point));
            }
        }
        InputAction::None
        | InputAction::Quit
        | InputAction::MoveUp
        | InputAction::MoveDown
        | InputAction::Dismiss => {}
    }
}
