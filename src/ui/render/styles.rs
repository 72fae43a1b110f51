use crate::config::Rgb;
use lipgloss::{Color, Style};
use once_cell::sync::Lazy;

// Status line chrome; bar and title colours come from RenderConfig.
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_MODE: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .bold(true)
});
pub static STYLE_KEY: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_DIM: Lazy<Style> = Lazy::new(|| STYLE_MODELINE.clone().faint(true));

pub fn fg(rgb: Rgb) -> Style {
    let (r, g, b) = rgb;
    Style::new().foreground(Color::from_rgb(r, g, b))
}
