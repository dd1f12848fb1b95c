use fltk::{app, prelude::*};

use simple_text_editor::app::{AppSettings, EditorSession, Message};
use simple_text_editor::ui::dialogs::FltkDialogs;
use simple_text_editor::ui::main_window::{build_main_window, set_line_numbers, set_word_wrap};
use simple_text_editor::ui::menu::build_menu;
use simple_text_editor::ui::theme::apply_theme;
use simple_text_editor::ui::view::FltkView;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let mut w = build_main_window(&settings, &sender);
    build_menu(&mut w.menu, &sender, &settings);
    apply_theme(
        &mut w.text_editor,
        &mut w.wind,
        &mut w.menu,
        &mut w.status_bar,
        settings.dark_mode,
    );

    let mut show_linenumbers = settings.line_numbers_enabled;
    let mut word_wrap = settings.word_wrap_enabled;

    let view = FltkView::new(w.buffer.clone(), w.wind.clone(), w.status_bar.clone(), sender);
    let mut session = EditorSession::new(view, FltkDialogs::new());

    w.wind.show();
    let _ = w.text_editor.take_focus();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        tracing::debug!("Dispatch {:?}", msg);

        match msg {
            Message::FileNew => {
                session.file_new();
            }
            Message::FileOpen => {
                session.file_open();
            }
            Message::FileSave => {
                session.file_save();
            }
            Message::FileSaveAs => {
                session.file_save_as();
            }
            Message::FileQuit | Message::WindowClose => {
                if session.request_close() {
                    app.quit();
                }
            }
            Message::BufferChanged => session.buffer_changed(),
            Message::ToggleLineNumbers => {
                show_linenumbers = !show_linenumbers;
                set_line_numbers(&mut w.text_editor, show_linenumbers);
            }
            Message::ToggleWordWrap => {
                word_wrap = !word_wrap;
                set_word_wrap(&mut w.text_editor, word_wrap);
            }
        }
    }
}
