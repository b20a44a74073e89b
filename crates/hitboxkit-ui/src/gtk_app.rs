use gtk4::prelude::*;
use gtk4::{ApplicationWindow, CssProvider, HeaderBar, Label};
use libadwaita::Application as AdwApplication;
use std::rc::Rc;
use tracing::info;

use crate::ui::gtk::editor_window::HitboxEditor;
use hitboxkit_settings::SettingsManager;

pub fn main() {
    let app = AdwApplication::builder()
        .application_id("com.github.hitboxkit.hitboxkit")
        .build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        let settings = SettingsManager::load_or_default();
        let config = settings.config().clone();
        info!("Using configuration at {}", settings.path().display());

        // Build UI
        let window = ApplicationWindow::builder()
            .application(app)
            .title("HitboxKit")
            .default_width(config.ui.window_width as i32)
            .default_height(config.ui.window_height as i32)
            .build();

        let header = HeaderBar::new();
        header.set_title_widget(Some(&Label::new(Some("HitboxKit"))));
        window.set_titlebar(Some(&header));

        let editor = HitboxEditor::new(config);
        window.set_child(Some(&editor.widget));

        // Actions
        let actions: [(&str, Rc<dyn Fn()>); 5] = [
            ("upload", {
                let editor = editor.clone();
                Rc::new(move || editor.upload_image())
            }),
            ("export", {
                let editor = editor.clone();
                Rc::new(move || editor.export())
            }),
            ("undo", {
                let editor = editor.clone();
                Rc::new(move || editor.undo())
            }),
            ("clear", {
                let editor = editor.clone();
                Rc::new(move || editor.clear())
            }),
            ("copy", {
                let editor = editor.clone();
                Rc::new(move || editor.copy_export())
            }),
        ];

        for (name, handler) in actions {
            let action = gio::SimpleAction::new(name, None);
            action.connect_activate(move |_, _| handler());
            app.add_action(&action);
        }

        let quit_action = gio::SimpleAction::new("quit", None);
        let app_quit = app.clone();
        quit_action.connect_activate(move |_, _| app_quit.quit());
        app.add_action(&quit_action);

        // Set Keyboard Shortcuts (Accelerators)
        app.set_accels_for_action("app.upload", &["<Control>o"]);
        app.set_accels_for_action("app.export", &["<Control>e"]);
        app.set_accels_for_action("app.undo", &["<Control>z"]);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        window.present();
    });

    app.run();
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => tracing::warn!("No display available, skipping stylesheet"),
    }
}
