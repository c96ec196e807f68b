mod ansi;
mod legacy;
mod tags;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use tags::{escape_tags, strip_tags};

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new("([a-zA-Z0-9§\\-:/]+\\.[a-zA-Z/0-9§\\-:_#]+(\\.[a-zA-Z/0-9.§\\-:#\\?\\+=_]+)?)")
        .unwrap()
});

fn is_valid_hex(ch: char) -> bool {
    ch.is_ascii_digit() || ('a'..='f').contains(&ch) || ('A'..='F').contains(&ch)
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ColorCode {
    /// Parses the character following a `&` in legacy formatted text.
    pub fn from_legacy(code: char) -> Option<ColorCode> {
        Some(match code.to_ascii_lowercase() {
            '0' => ColorCode::Black,
            '1' => ColorCode::DarkBlue,
            '2' => ColorCode::DarkGreen,
            '3' => ColorCode::DarkAqua,
            '4' => ColorCode::DarkRed,
            '5' => ColorCode::DarkPurple,
            '6' => ColorCode::Gold,
            '7' => ColorCode::Gray,
            '8' => ColorCode::DarkGray,
            '9' => ColorCode::Blue,
            'a' => ColorCode::Green,
            'b' => ColorCode::Aqua,
            'c' => ColorCode::Red,
            'd' => ColorCode::LightPurple,
            'e' => ColorCode::Yellow,
            'f' => ColorCode::White,
            'k' => ColorCode::Obfuscated,
            'l' => ColorCode::Bold,
            'm' => ColorCode::Strikethrough,
            'n' => ColorCode::Underline,
            'o' => ColorCode::Italic,
            'r' => ColorCode::Reset,
            _ => return None,
        })
    }

    /// Parses a color or decoration name as used in `<tag>` markup.
    pub fn from_name(name: &str) -> Option<ColorCode> {
        Some(match name.to_ascii_lowercase().as_str() {
            "black" => ColorCode::Black,
            "dark_blue" => ColorCode::DarkBlue,
            "dark_green" => ColorCode::DarkGreen,
            "dark_aqua" => ColorCode::DarkAqua,
            "dark_red" => ColorCode::DarkRed,
            "dark_purple" => ColorCode::DarkPurple,
            "gold" => ColorCode::Gold,
            "gray" | "grey" => ColorCode::Gray,
            "dark_gray" | "dark_grey" => ColorCode::DarkGray,
            "blue" => ColorCode::Blue,
            "green" => ColorCode::Green,
            "aqua" => ColorCode::Aqua,
            "red" => ColorCode::Red,
            "light_purple" => ColorCode::LightPurple,
            "yellow" => ColorCode::Yellow,
            "white" => ColorCode::White,
            "obf" | "obfuscated" => ColorCode::Obfuscated,
            "b" | "bold" => ColorCode::Bold,
            "st" | "strikethrough" => ColorCode::Strikethrough,
            "u" | "underlined" => ColorCode::Underline,
            "i" | "em" | "italic" => ColorCode::Italic,
            "r" | "reset" => ColorCode::Reset,
            _ => return None,
        })
    }

    /// The canonical tag name, the inverse of [`ColorCode::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            ColorCode::Black => "black",
            ColorCode::DarkBlue => "dark_blue",
            ColorCode::DarkGreen => "dark_green",
            ColorCode::DarkAqua => "dark_aqua",
            ColorCode::DarkRed => "dark_red",
            ColorCode::DarkPurple => "dark_purple",
            ColorCode::Gold => "gold",
            ColorCode::Gray => "gray",
            ColorCode::DarkGray => "dark_gray",
            ColorCode::Blue => "blue",
            ColorCode::Green => "green",
            ColorCode::Aqua => "aqua",
            ColorCode::Red => "red",
            ColorCode::LightPurple => "light_purple",
            ColorCode::Yellow => "yellow",
            ColorCode::White => "white",
            ColorCode::Obfuscated => "obfuscated",
            ColorCode::Bold => "bold",
            ColorCode::Strikethrough => "strikethrough",
            ColorCode::Underline => "underlined",
            ColorCode::Italic => "italic",
            ColorCode::Reset => "reset",
        }
    }

    pub fn is_formatting(self) -> bool {
        use ColorCode::*;
        matches!(
            self,
            Obfuscated | Bold | Strikethrough | Underline | Italic | Reset
        )
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TextColor {
    Hex(String),
    ColorCode(ColorCode),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum ClickEventType {
    OpenUrl,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    action: ClickEventType,
    value: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(field: &bool) -> bool {
    !*field
}

#[derive(Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct TextComponent {
    pub text: String,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub obfuscated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "clickEvent")]
    pub click_event: Option<ClickEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    /// Parses text using `&` color codes and `#rrggbb` hex colors.
    pub fn from_legacy_text(message: &str) -> Vec<TextComponent> {
        link_urls(legacy::parse(message))
    }

    /// Parses text using `<gold>`, `<bold>`, `</bold>` and `<#rrggbb>` style markup.
    ///
    /// Unknown tags are kept as literal text, so unresolved placeholders remain visible.
    pub fn from_tagged_text(message: &str) -> Vec<TextComponent> {
        link_urls(tags::parse(message))
    }

    pub fn encode_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn is_text_only(&self) -> bool {
        !self.bold
            && !self.italic
            && !self.underlined
            && !self.strikethrough
            && !self.obfuscated
            && self.color.is_none()
            && self.click_event.is_none()
    }

    fn with_text(&self, text: &str) -> TextComponent {
        TextComponent {
            text: text.to_string(),
            ..self.clone()
        }
    }

    /// Copies the styling of this component without text, click event or children.
    fn style_only(&self) -> TextComponent {
        TextComponent {
            bold: self.bold,
            italic: self.italic,
            underlined: self.underlined,
            strikethrough: self.strikethrough,
            obfuscated: self.obfuscated,
            color: self.color.clone(),
            ..Default::default()
        }
    }

    fn apply_decoration(&mut self, code: ColorCode, enabled: bool) {
        match code {
            ColorCode::Bold => self.bold = enabled,
            ColorCode::Italic => self.italic = enabled,
            ColorCode::Underline => self.underlined = enabled,
            ColorCode::Strikethrough => self.strikethrough = enabled,
            ColorCode::Obfuscated => self.obfuscated = enabled,
            _ => {}
        }
    }
}

impl<S> From<S> for TextComponent
where
    S: Into<String>,
{
    fn from(value: S) -> Self {
        TextComponent {
            text: value.into(),
            ..Default::default()
        }
    }
}

/// Concatenates the text of all components, dropping every style.
pub fn to_plain_text(components: &[TextComponent]) -> String {
    let mut out = String::new();
    for component in components {
        out.push_str(&component.text);
        out.push_str(&to_plain_text(&component.extra));
    }
    out
}

/// Renders components with ANSI escape sequences for terminal output.
pub fn to_ansi(components: &[TextComponent]) -> String {
    ansi::render(components)
}

/// Splits every component around URLs and gives the URL parts an open-url click event.
fn link_urls(components: Vec<TextComponent>) -> Vec<TextComponent> {
    components
        .into_iter()
        .filter(|component| !component.text.is_empty())
        .flat_map(|component| {
            let text = component.text.clone();
            let mut parts = Vec::new();
            let mut rest = 0;
            for url in URL_REGEX.find_iter(&text) {
                if url.start() > rest {
                    parts.push(component.with_text(&text[rest..url.start()]));
                }
                let mut link = component.with_text(url.as_str());
                link.click_event = Some(ClickEvent {
                    action: ClickEventType::OpenUrl,
                    value: url.as_str().to_string(),
                });
                parts.push(link);
                rest = url.end();
            }
            if rest < text.len() {
                parts.push(component.with_text(&text[rest..]));
            }
            parts
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates_extra() {
        let mut parent = TextComponent::from("a");
        parent.extra.push(TextComponent::from("b"));
        assert_eq!(to_plain_text(&[parent, TextComponent::from("c")]), "abc");
    }

    #[test]
    fn urls_get_click_events() {
        let components = TextComponent::from_legacy_text("see example.com now");
        assert_eq!(components.len(), 3);
        assert_eq!(components[1].text, "example.com");
        assert!(components[1].click_event.is_some());
        assert!(components[0].click_event.is_none());
    }

    #[test]
    fn json_skips_default_fields() {
        let component = TextComponent {
            color: Some(TextColor::ColorCode(ColorCode::Gold)),
            ..TextComponent::from("hi")
        };
        assert_eq!(component.encode_json(), r#"{"text":"hi","color":"gold"}"#);
    }
}
