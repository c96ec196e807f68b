use super::Replacements;
use crate::commands::CommandSender;
use crate::config::Settings;
use crate::localization::Localizer;
use eldoutils_text::{to_plain_text, TextComponent};
use std::sync::Arc;

/// Formats and delivers chat messages with a common prefix and colour scheme.
///
/// Messages may be plain text, a locale key or markup with `<i18n:key>`
/// references. `<default>` switches back to the message or error colour.
#[derive(Debug, Clone)]
pub struct MessageSender {
    localizer: Arc<Localizer>,
    prefix: String,
    message_color: String,
    error_color: String,
}

impl MessageSender {
    pub fn new(localizer: Arc<Localizer>) -> Self {
        Self {
            localizer,
            prefix: String::new(),
            message_color: "green".to_string(),
            error_color: "red".to_string(),
        }
    }

    pub fn from_settings(settings: &Settings, localizer: Arc<Localizer>) -> Self {
        Self::new(localizer)
            .with_prefix(settings.prefix.clone())
            .with_colors(settings.message_color.clone(), settings.error_color.clone())
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_colors(mut self, message: impl Into<String>, error: impl Into<String>) -> Self {
        self.message_color = message.into();
        self.error_color = error.into();
        self
    }

    pub fn localizer(&self) -> &Arc<Localizer> {
        &self.localizer
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn compose(
        &self,
        sender: Option<&dyn CommandSender>,
        message: &str,
        replacements: &Replacements,
        color: &str,
        localize: bool,
    ) -> String {
        let message = if localize || Localizer::is_locale_code(message) {
            self.localizer.localize_for(sender, message)
        } else {
            message.to_string()
        };
        let message = self
            .localizer
            .localize_message(sender, &message)
            .replace("<default>", &format!("<{color}>"));
        let message = replacements.apply(&message, |value| {
            self.localizer.localize_message(sender, value)
        });
        format!("<{color}>{message}")
    }

    pub fn serialize_message(
        &self,
        sender: Option<&dyn CommandSender>,
        message: &str,
        replacements: &Replacements,
    ) -> Vec<TextComponent> {
        let message = self.compose(sender, message, replacements, &self.message_color, false);
        TextComponent::from_tagged_text(&format!("{}{}", self.prefix, message))
    }

    pub fn serialize_error(
        &self,
        sender: Option<&dyn CommandSender>,
        message: &str,
        replacements: &Replacements,
    ) -> Vec<TextComponent> {
        let message = self.compose(sender, message, replacements, &self.error_color, false);
        TextComponent::from_tagged_text(&format!("{}{}", self.prefix, message))
    }

    pub fn send_message(&self, sender: &dyn CommandSender, message: &str, replacements: &Replacements) {
        sender.send_message(&self.serialize_message(Some(sender), message, replacements));
    }

    pub fn send_error(&self, sender: &dyn CommandSender, message: &str, replacements: &Replacements) {
        sender.send_message(&self.serialize_error(Some(sender), message, replacements));
    }

    /// Sends the message for `key`, even if the key does not look like a locale code.
    pub fn send_localized_message(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        replacements: &Replacements,
    ) {
        let message = self.compose(Some(sender), key, replacements, &self.message_color, true);
        sender.send_message(&TextComponent::from_tagged_text(&format!(
            "{}{}",
            self.prefix, message
        )));
    }

    pub fn send_localized_error(
        &self,
        sender: &dyn CommandSender,
        key: &str,
        replacements: &Replacements,
    ) {
        let message = self.compose(Some(sender), key, replacements, &self.error_color, true);
        sender.send_message(&TextComponent::from_tagged_text(&format!(
            "{}{}",
            self.prefix, message
        )));
    }

    /// The localized message without prefix or any styling.
    pub fn translate_plain(
        &self,
        sender: Option<&dyn CommandSender>,
        message: &str,
        replacements: &Replacements,
    ) -> String {
        let message = self.compose(sender, message, replacements, &self.message_color, false);
        to_plain_text(&TextComponent::from_tagged_text(&message))
    }
}
