use std::cell::RefCell;
use std::rc::Rc;

use glib::clone;
use gtk4::gdk::Display;
use gtk4::gio::{Menu, SimpleAction};
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, ButtonsType, CssProvider,
    HeaderBar, Label, MenuButton, MessageDialog, MessageType, Orientation,
    STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use tracing::{info, warn};

use super::table::TeamTable;
use crate::game::logic::GameState;
use crate::game::types::Side;
use crate::i18n::I18n;
use crate::storage::{self, Settings};

const DEFAULT_WIDTH: i32 = 420;
const DEFAULT_HEIGHT: i32 = 640;

/// Widgets that mirror the game state.
struct View {
    status: Label,
    tables: Vec<TeamTable>,
    action: Button,
}

impl View {
    fn refresh(&self, game: &GameState, i18n: &I18n) {
        self.status.set_text(&i18n.status(&game.status()));
        for table in &self.tables {
            table.update(game, i18n);
        }
        self.action.set_label(&i18n.action(game));
    }
}

fn save_window_geometry(win: &ApplicationWindow) {
    let mut settings = storage::load_settings();
    settings.window_width = Some(win.width());
    settings.window_height = Some(win.height());
    if let Err(e) = storage::save_settings(&settings) {
        warn!(error = %e, "could not save window geometry");
    }
}

/// Build and present the main application window.
pub fn build_ui(app: &Application, settings: &Settings) {
    // ── Shared state ──
    let state = Rc::new(RefCell::new(GameState::new()));
    let i18n = Rc::new(I18n::load(settings.language.as_deref()));
    info!(lang = i18n.current_language(), "starting game window");

    // ── CSS ──
    let provider = CssProvider::new();
    let css = "
        .title-label   { font-weight: 700; font-size: 15px; }
        .game-title    { font-weight: 700; font-size: 28px; }
        .team-caption  { font-weight: 700; }
        .cell-bold     { font-weight: 700; }
        .cell-active   { color: #1c71d8; }
        .roll-button   { min-width: 250px; min-height: 50px; border-radius: 25px; }
    ";
    provider.load_from_data(css);
    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    // ── Window ──
    let window = ApplicationWindow::builder()
        .application(app)
        .title(&i18n.t("app-title"))
        .default_width(settings.window_width.unwrap_or(DEFAULT_WIDTH))
        .default_height(settings.window_height.unwrap_or(DEFAULT_HEIGHT))
        .resizable(true)
        .build();

    // ── Header bar ──
    let header = HeaderBar::new();
    header.set_show_title_buttons(true);
    let header_title = Label::new(Some(&i18n.t("app-title")));
    header_title.add_css_class("title-label");
    header.set_title_widget(Some(&header_title));

    let menu = Menu::new();
    menu.append(Some(&i18n.t("menu-info")), Some("win.info"));
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));
    header.pack_end(&menu_button);

    // ── Main layout ──
    let main_box = GtkBox::new(Orientation::Vertical, 16);
    main_box.set_margin_top(24);
    main_box.set_margin_bottom(24);
    main_box.set_valign(Align::Center);

    let title = Label::new(Some(&i18n.t("app-title")));
    title.add_css_class("game-title");
    main_box.append(&title);

    let status = Label::new(None);
    main_box.append(&status);

    let tables: Vec<TeamTable> = Side::ALL
        .iter()
        .map(|side| TeamTable::new(*side, &i18n))
        .collect();
    for table in &tables {
        main_box.append(table.widget());
    }

    let action = Button::new();
    action.add_css_class("roll-button");
    action.add_css_class("suggested-action");
    action.set_halign(Align::Center);
    main_box.append(&action);

    let view = Rc::new(View {
        status,
        tables,
        action: action.clone(),
    });
    view.refresh(&state.borrow(), &i18n);

    action.connect_clicked(clone!(@strong state, @strong view, @strong i18n => move |_| {
        let mut game = state.borrow_mut();
        game.advance();
        view.refresh(&game, &i18n);
    }));

    // ── Actions ──
    {
        let info_action = SimpleAction::new("info", None);
        let window_for_info = window.clone();
        info_action.connect_activate(clone!(@strong state, @strong i18n => move |_, _| {
            let body = i18n.info_body(env!("CARGO_PKG_VERSION"), &state.borrow());
            let dialog = MessageDialog::builder()
                .transient_for(&window_for_info)
                .modal(true)
                .destroy_with_parent(true)
                .message_type(MessageType::Info)
                .buttons(ButtonsType::Ok)
                .text(i18n.t("menu-info"))
                .secondary_text(body)
                .build();
            dialog.connect_response(|dialog, _| dialog.close());
            dialog.show();
        }));
        window.add_action(&info_action);
    }

    window.connect_close_request(|win| {
        save_window_geometry(win);
        gtk4::Inhibit(false)
    });

    window.set_titlebar(Some(&header));
    window.set_child(Some(&main_box));
    window.present();
}
