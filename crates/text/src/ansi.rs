use crate::{ColorCode, TextColor, TextComponent};
use owo_colors::{AnsiColors, OwoColorize, Style};
use std::fmt::Write;

fn ansi_color(code: ColorCode) -> Option<AnsiColors> {
    Some(match code {
        ColorCode::Black => AnsiColors::Black,
        ColorCode::DarkBlue => AnsiColors::Blue,
        ColorCode::DarkGreen => AnsiColors::Green,
        ColorCode::DarkAqua => AnsiColors::Cyan,
        ColorCode::DarkRed => AnsiColors::Red,
        ColorCode::DarkPurple => AnsiColors::Magenta,
        ColorCode::Gold => AnsiColors::Yellow,
        ColorCode::Gray => AnsiColors::White,
        ColorCode::DarkGray => AnsiColors::BrightBlack,
        ColorCode::Blue => AnsiColors::BrightBlue,
        ColorCode::Green => AnsiColors::BrightGreen,
        ColorCode::Aqua => AnsiColors::BrightCyan,
        ColorCode::Red => AnsiColors::BrightRed,
        ColorCode::LightPurple => AnsiColors::BrightMagenta,
        ColorCode::Yellow => AnsiColors::BrightYellow,
        ColorCode::White => AnsiColors::BrightWhite,
        _ => return None,
    })
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

fn style_of(component: &TextComponent) -> Style {
    let mut style = Style::new();
    match &component.color {
        Some(TextColor::ColorCode(code)) => {
            if let Some(color) = ansi_color(*code) {
                style = style.color(color);
            }
        }
        Some(TextColor::Hex(hex)) => {
            if let Some((r, g, b)) = hex_rgb(hex) {
                style = style.truecolor(r, g, b);
            }
        }
        None => {}
    }
    if component.bold {
        style = style.bold();
    }
    if component.italic {
        style = style.italic();
    }
    if component.underlined {
        style = style.underline();
    }
    if component.strikethrough {
        style = style.strikethrough();
    }
    style
}

pub(crate) fn render(components: &[TextComponent]) -> String {
    let mut out = String::new();
    for component in components {
        if component.is_text_only() {
            out.push_str(&component.text);
        } else {
            let _ = write!(out, "{}", component.text.style(style_of(component)));
        }
        out.push_str(&render(&component.extra));
    }
    out
}
