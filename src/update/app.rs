//! App message handlers (persistence, exit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SaveLayout => {
            if let Err(e) = model.save_layout() {
                tracing::error!("Failed to save layout: {}", e);
            }
            None
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
