use crate::{is_valid_hex, ColorCode, TextColor, TextComponent};

pub(crate) fn parse(message: &str) -> Vec<TextComponent> {
    let mut components = Vec::new();
    let mut current = TextComponent::default();

    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' || c == '§' {
            let Some(&code) = chars.peek() else {
                current.text.push(c);
                continue;
            };
            let Some(color) = ColorCode::from_legacy(code) else {
                current.text.push(c);
                continue;
            };
            chars.next();

            if !current.text.is_empty() {
                let style = current.style_only();
                components.push(std::mem::replace(&mut current, style));
            }
            match color {
                ColorCode::Reset => current = TextComponent::default(),
                code if code.is_formatting() => current.apply_decoration(code, true),
                // A color code resets all decorations, like the vanilla client does.
                code => {
                    current = TextComponent::default();
                    current.color = Some(TextColor::ColorCode(code));
                }
            }
            continue;
        }

        if c == '#' {
            let hex: String = chars.clone().take(6).collect();
            if hex.len() == 6 && hex.chars().all(is_valid_hex) {
                for _ in 0..6 {
                    chars.next();
                }
                if !current.text.is_empty() {
                    components.push(std::mem::take(&mut current));
                }
                current = TextComponent::default();
                current.color = Some(TextColor::Hex(format!("#{hex}")));
                continue;
            }
        }

        current.text.push(c);
    }
    components.push(current);
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes_split_components() {
        let components = parse("&6Usage: &e/give");
        let texts: Vec<_> = components.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Usage: ", "/give"]);
        assert_eq!(
            components[0].color,
            Some(TextColor::ColorCode(ColorCode::Gold))
        );
        assert_eq!(
            components[1].color,
            Some(TextColor::ColorCode(ColorCode::Yellow))
        );
    }

    #[test]
    fn decorations_keep_color() {
        let components = parse("&cred &lbold");
        assert_eq!(components.len(), 2);
        assert!(components[1].bold);
        assert_eq!(
            components[1].color,
            Some(TextColor::ColorCode(ColorCode::Red))
        );
    }

    #[test]
    fn unknown_codes_are_literal() {
        let components = parse("a &z b & c");
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].text, "a &z b & c");
    }

    #[test]
    fn hex_colors() {
        let components = parse("#ff0000red #zzz");
        assert_eq!(components[0].color, Some(TextColor::Hex("#ff0000".into())));
        assert_eq!(components[0].text, "red #zzz");
    }
}
