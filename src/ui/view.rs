use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    frame::Frame,
    prelude::*,
    text::TextBuffer,
    window::Window,
};

use crate::app::messages::Message;
use crate::app::view::EditorView;

/// The editor's buffer, window title and status bar.
///
/// User edits reach the session as `Message::BufferChanged`; text replaced
/// through `set_text` is not reported.
pub struct FltkView {
    buffer: TextBuffer,
    window: Window,
    status_bar: Frame,
    suppress_edits: Rc<Cell<bool>>,
}

impl FltkView {
    pub fn new(mut buffer: TextBuffer, window: Window, status_bar: Frame, sender: Sender<Message>) -> Self {
        let suppress_edits = Rc::new(Cell::new(false));

        let suppress = suppress_edits.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if (inserted > 0 || deleted > 0) && !suppress.get() {
                sender.send(Message::BufferChanged);
            }
        });

        Self {
            buffer,
            window,
            status_bar,
            suppress_edits,
        }
    }
}

impl EditorView for FltkView {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.suppress_edits.set(true);
        self.buffer.set_text(text);
        self.suppress_edits.set(false);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn set_status(&mut self, message: &str) {
        self.status_bar.set_label(message);
        self.status_bar.redraw();
    }
}
