//! Static page sections around the analysis card. Buttons here are
//! decorative and produce no messages.

use chaincheck_core::content::{self, FeatureCard, TechBadge};
use egui::{CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use super::constants::*;

pub fn nav_bar(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🛡").size(24.0).color(ACCENT_CYAN));
        ui.label(
            RichText::new(content::BRAND_NAME)
                .size(22.0)
                .strong()
                .color(ACCENT_CYAN),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let _ = ui.add(egui::Button::new(content::CONNECT_WALLET).fill(BUTTON_FILL));
            for link in content::NAV_LINKS.iter().rev() {
                let _ = ui.add(egui::Button::new(*link).frame(false));
            }
        });
    });
}

pub fn hero(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        pill(ui, content::HERO_BADGE, ACCENT_CYAN.linear_multiply(0.2), ACCENT_CYAN);
        ui.add_space(16.0);
        let [first, second] = content::HERO_HEADLINE;
        ui.label(RichText::new(first).size(52.0).strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(second).size(52.0).strong().color(ACCENT_PURPLE));
        ui.add_space(16.0);
        ui.label(RichText::new(content::HERO_TAGLINE).size(18.0).color(TEXT_MUTED));
        ui.add_space(24.0);
        tech_stack(ui, &content::TECH_STACK);
        ui.add_space(32.0);
    });
}

fn tech_stack(ui: &mut Ui, badges: &[TechBadge]) {
    ui.horizontal_wrapped(|ui| {
        for badge in badges {
            pill(ui, badge.name, badge_fill(badge.color), TEXT_PRIMARY);
        }
    });
}

fn pill(ui: &mut Ui, text: &str, fill: egui::Color32, text_color: egui::Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(13.0).color(text_color));
        });
}

pub fn features(ui: &mut Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(content::FEATURES_HEADING)
                .size(36.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
        ui.label(RichText::new(content::FEATURES_SUBHEADING).size(18.0).color(TEXT_MUTED));
    });
    ui.add_space(24.0);
    ui.columns(content::FEATURES.len(), |columns| {
        for (column, feature) in columns.iter_mut().zip(content::FEATURES.iter()) {
            feature_card(column, feature);
        }
    });
}

fn feature_card(ui: &mut Ui, feature: &FeatureCard) {
    card_frame().show(ui, |ui| {
        ui.set_min_height(180.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(feature.icon).size(40.0).color(ACCENT_CYAN));
            ui.add_space(8.0);
            ui.label(RichText::new(feature.title).size(18.0).strong().color(TEXT_PRIMARY));
            ui.add_space(6.0);
            ui.label(RichText::new(feature.description).color(TEXT_MUTED));
        });
    });
}

pub fn call_to_action(ui: &mut Ui) {
    ui.add_space(48.0);
    ui.separator();
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(content::CTA_HEADING)
                .size(36.0)
                .strong()
                .color(TEXT_PRIMARY),
        );
        ui.add_space(12.0);
        ui.label(RichText::new(content::CTA_BODY).size(18.0).color(TEXT_MUTED));
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            let _ = ui.add(
                egui::Button::new(RichText::new(content::CTA_PRIMARY).size(18.0))
                    .fill(BUTTON_FILL),
            );
            let _ = ui.add(
                egui::Button::new(RichText::new(content::CTA_SECONDARY).size(18.0))
                    .stroke(Stroke::new(1.0, CARD_STROKE)),
            );
        });
    });
    ui.add_space(40.0);
}

pub fn footer(ui: &mut Ui) {
    ui.separator();
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("🛡").color(ACCENT_CYAN));
        ui.label(RichText::new(content::BRAND_NAME).strong().color(TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(content::FOOTER_NOTE).size(12.0).color(TEXT_FAINT));
        });
    });
    ui.add_space(16.0);
}

pub fn card_frame() -> Frame {
    Frame::new()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
}
