use chaincheck_core::content;
use chaincheck_core::{AppViewModel, InputMode, Msg};
use egui::{Context, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Ui};

use super::constants::*;
use super::layout;

/// Draws one frame from the view model and returns the messages the user
/// produced during it.
pub fn render(ctx: &Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::top("nav")
        .frame(Frame::new().fill(NAV_FILL).inner_margin(Margin::symmetric(24, 12)))
        .show(ctx, layout::nav_bar);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    layout::hero(ui);
                    analysis_card(ui, view, &mut msgs);
                    layout::features(ui);
                    layout::call_to_action(ui);
                    layout::footer(ui);
                });
            });
    });

    msgs
}

fn analysis_card(ui: &mut Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    layout::card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(content::ANALYSIS_TITLE)
                    .size(30.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.label(RichText::new(content::ANALYSIS_SUBTITLE).size(17.0).color(TEXT_MUTED));
        });
        ui.add_space(16.0);

        mode_tabs(ui, view.mode, msgs);
        ui.add_space(16.0);

        match view.mode {
            InputMode::Text => text_input(ui, &view.text, msgs),
            InputMode::File => file_drop_zone(ui, view, msgs),
            InputMode::Url => url_input(ui, &view.url, msgs),
        }
        ui.add_space(16.0);

        analyze_button(ui, view, msgs);

        if view.show_scanning_banner {
            ui.add_space(16.0);
            scanning_banner(ui);
        }
    });
    ui.add_space(32.0);
}

fn mode_tabs(ui: &mut Ui, current: InputMode, msgs: &mut Vec<Msg>) {
    ui.columns(InputMode::ALL.len(), |columns| {
        for (column, mode) in columns.iter_mut().zip(InputMode::ALL) {
            column.vertical_centered_justified(|ui| {
                let caption = format!("{} {}", tab_icon(mode), mode.label());
                if ui.selectable_label(current == mode, caption).clicked() && current != mode {
                    msgs.push(Msg::ModeSelected(mode));
                }
            });
        }
    });
}

fn tab_icon(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Text => "📄",
        InputMode::File => "⬆",
        InputMode::Url => "🔗",
    }
}

fn text_input(ui: &mut Ui, current: &str, msgs: &mut Vec<Msg>) {
    let mut text = current.to_owned();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text(content::TEXT_PLACEHOLDER)
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(Msg::TextChanged(text));
    }
}

fn url_input(ui: &mut Ui, current: &str, msgs: &mut Vec<Msg>) {
    let mut url = current.to_owned();
    let response = ui.add(
        egui::TextEdit::singleline(&mut url)
            .hint_text(content::URL_PLACEHOLDER)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(Msg::UrlChanged(url));
    }
}

fn file_drop_zone(ui: &mut Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let hovering_file = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let stroke_color = if hovering_file { ACCENT_CYAN } else { CARD_STROKE };

    let response = Frame::new()
        .fill(INPUT_FILL)
        .stroke(Stroke::new(2.0, stroke_color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🖼").size(40.0).color(TEXT_FAINT));
                ui.add_space(8.0);
                ui.label(RichText::new(&view.file_label).color(TEXT_MUTED));
                if let Some(size) = view.file_size {
                    ui.label(RichText::new(format_size(size)).size(12.0).color(TEXT_FAINT));
                }
                ui.label(RichText::new(content::FILE_SUPPORT_HINT).size(13.0).color(TEXT_FAINT));
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if response.clicked() {
        msgs.push(Msg::ChooseFileClicked);
    }
}

fn analyze_button(ui: &mut Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let button_view = &view.analyze_button;
    let caption = if button_view.busy {
        button_view.label.to_string()
    } else {
        format!("🧠 {}", button_view.label)
    };

    ui.horizontal(|ui| {
        if button_view.busy {
            ui.add(egui::Spinner::new().size(20.0).color(TEXT_PRIMARY));
        }
        let button = egui::Button::new(
            RichText::new(caption)
                .size(18.0)
                .strong()
                .color(TEXT_PRIMARY),
        )
        .fill(BUTTON_FILL)
        .min_size(egui::vec2(ui.available_width(), ANALYZE_BUTTON_HEIGHT));

        if ui.add_enabled(button_view.enabled, button).clicked() {
            msgs.push(Msg::AnalyzeClicked);
        }
    });
}

fn scanning_banner(ui: &mut Ui) {
    Frame::new()
        .fill(WARNING_FILL)
        .stroke(Stroke::new(1.0, WARNING_STROKE))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(WARNING_TEXT));
                ui.label(RichText::new(content::SCANNING_BANNER).color(WARNING_TEXT));
            });
        });
}

fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KB", value / KIB)
    } else {
        format!("{bytes} bytes")
    }
}
