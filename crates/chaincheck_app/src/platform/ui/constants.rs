use chaincheck_core::content::BadgeColor;
use egui::{Color32, Visuals};

pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 560.0];
pub const CONTENT_MAX_WIDTH: f32 = 960.0;
pub const ANALYZE_BUTTON_HEIGHT: f32 = 44.0;

pub const BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
pub const NAV_FILL: Color32 = Color32::from_rgb(10, 12, 24);
pub const CARD_FILL: Color32 = Color32::from_rgb(30, 27, 58);
pub const CARD_STROKE: Color32 = Color32::from_rgb(55, 55, 85);
pub const INPUT_FILL: Color32 = Color32::from_rgb(12, 14, 28);
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(34, 211, 238);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(192, 132, 252);
pub const BUTTON_FILL: Color32 = Color32::from_rgb(6, 182, 212);
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(209, 213, 219);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(107, 114, 128);
pub const WARNING_FILL: Color32 = Color32::from_rgb(56, 48, 16);
pub const WARNING_STROKE: Color32 = Color32::from_rgb(113, 94, 22);
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 224, 71);

pub fn badge_fill(color: BadgeColor) -> Color32 {
    match color {
        BadgeColor::Orange => Color32::from_rgb(249, 115, 22),
        BadgeColor::Red => Color32::from_rgb(239, 68, 68),
        BadgeColor::Blue => Color32::from_rgb(59, 130, 246),
        BadgeColor::Purple => Color32::from_rgb(168, 85, 247),
        BadgeColor::Cyan => Color32::from_rgb(6, 182, 212),
        BadgeColor::Green => Color32::from_rgb(34, 197, 94),
    }
}

pub fn visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CARD_FILL;
    visuals.extreme_bg_color = INPUT_FILL;
    visuals.selection.bg_fill = ACCENT_CYAN.linear_multiply(0.35);
    visuals.hyperlink_color = ACCENT_CYAN;
    visuals
}
