//! 地址表格消息处理

use crate::message::{Command, TableMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: TableMessage) -> Option<Command> {
    let state = &mut app.addresses;
    match msg {
        TableMessage::SelectPrevious => state.select_previous(),
        TableMessage::SelectNext => state.select_next(),
        TableMessage::SelectFirst => state.select_first(),
        TableMessage::SelectLast => state.select_last(),
        TableMessage::DeleteSelected => {
            return state
                .selected_record()
                .map(|record| Command::Delete {
                    id: record.id.clone(),
                });
        }
    }
    None
}
