//! Modal message handling.

use crate::message::ModalMessage;
use crate::model::App;

pub fn handle(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
    }
}
