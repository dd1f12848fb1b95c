use fltk::{
    app::Sender,
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::settings::AppSettings;
use crate::app::text_ops::{window_title, APP_NAME};

const MENU_HEIGHT: i32 = 30;
const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&window_title(None, false));
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_margin(10);
    flex.set_spacing(6);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_size(settings.font_size as i32);
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    set_line_numbers(&mut text_editor, settings.line_numbers_enabled);
    set_word_wrap(&mut text_editor, settings.word_wrap_enabled);

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label_size(13);
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the close button through the unsaved-changes check.
    // Escape also fires the window callback; only a real close counts.
    let s = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        buffer,
        status_bar,
    }
}

pub fn set_line_numbers(editor: &mut TextEditor, enabled: bool) {
    editor.set_linenumber_width(if enabled { 40 } else { 0 });
    editor.redraw();
}

pub fn set_word_wrap(editor: &mut TextEditor, enabled: bool) {
    if enabled {
        editor.wrap_mode(WrapMode::AtBounds, 0);
    } else {
        editor.wrap_mode(WrapMode::None, 0);
    }
    editor.redraw();
}
