use crate::{is_valid_hex, ColorCode, TextColor, TextComponent};

enum Tag {
    Color(TextColor),
    Decoration(ColorCode),
    Reset,
}

fn parse_tag(name: &str) -> Option<Tag> {
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(is_valid_hex) {
            return Some(Tag::Color(TextColor::Hex(name.to_string())));
        }
        return None;
    }
    match ColorCode::from_name(name)? {
        ColorCode::Reset => Some(Tag::Reset),
        code if code.is_formatting() => Some(Tag::Decoration(code)),
        code => Some(Tag::Color(TextColor::ColorCode(code))),
    }
}

struct TagParser {
    components: Vec<TextComponent>,
    current: TextComponent,
    colors: Vec<Option<TextColor>>,
}

impl TagParser {
    fn restyle(&mut self, f: impl FnOnce(&mut TextComponent)) {
        if !self.current.text.is_empty() {
            let style = self.current.style_only();
            self.components
                .push(std::mem::replace(&mut self.current, style));
        }
        f(&mut self.current);
    }

    fn open(&mut self, tag: Tag) {
        match tag {
            Tag::Color(color) => {
                self.colors.push(self.current.color.clone());
                self.restyle(|c| c.color = Some(color));
            }
            Tag::Decoration(code) => self.restyle(|c| c.apply_decoration(code, true)),
            Tag::Reset => {
                self.colors.clear();
                self.restyle(|c| *c = TextComponent::default());
            }
        }
    }

    fn close(&mut self, tag: Tag) {
        match tag {
            Tag::Color(_) => {
                let previous = self.colors.pop().flatten();
                self.restyle(|c| c.color = previous);
            }
            Tag::Decoration(code) => self.restyle(|c| c.apply_decoration(code, false)),
            Tag::Reset => {}
        }
    }
}

pub(crate) fn parse(message: &str) -> Vec<TextComponent> {
    let mut parser = TagParser {
        components: Vec::new(),
        current: TextComponent::default(),
        colors: Vec::new(),
    };

    let mut rest = message;
    while let Some(c) = rest.chars().next() {
        if c == '\\' && rest[1..].starts_with('<') {
            parser.current.text.push('<');
            rest = &rest[2..];
            continue;
        }
        if c == '<' {
            if let Some(end) = rest.find('>') {
                let content = &rest[1..end];
                let (closing, name) = match content.strip_prefix('/') {
                    Some(name) => (true, name),
                    None => (false, content),
                };
                if let Some(tag) = parse_tag(name) {
                    if closing {
                        parser.close(tag);
                    } else {
                        parser.open(tag);
                    }
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        parser.current.text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    parser.components.push(parser.current);
    parser.components
}

/// Escapes every `<` so the text is rendered literally by [`TextComponent::from_tagged_text`].
pub fn escape_tags(text: &str) -> String {
    text.replace('<', "\\<")
}

/// Removes all known markup tags, leaving the plain text.
pub fn strip_tags(text: &str) -> String {
    crate::to_plain_text(&parse(text))
}
