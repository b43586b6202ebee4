//! User-facing message templates
//!
//! All copy lives in one place. The original deployment ran three
//! near-identical bots that differed only in wording, so the copy is a
//! single configurable template set injected through handler deps
//! instead of separate code paths.

/// Callback data for the "send my Telegram" inline button.
pub const SEND_TELEGRAM_CALLBACK: &str = "send_telegram";

/// The full set of user-visible strings.
#[derive(Debug, Clone)]
pub struct Messages {
    /// Greeting sent on /start, asking for a contact
    pub welcome: String,
    /// Label of the inline button that submits the user's own @username
    pub send_telegram_button: String,
    /// Re-prompt when the input is neither an email nor a handle
    pub invalid_format: String,
    /// Notice when the (user, contact) pair is already stored
    pub already_registered: String,
    /// Thank-you reply after a successful registration
    pub thanks: String,
    /// Caption attached to the bonus PDF guide
    pub guide_caption: String,
    /// Text-only fallback when the guide cannot be delivered
    pub guide_fallback: String,
    /// Reply to the button when the user has no Telegram username
    pub no_username: String,
    /// Generic reply when the inbound event carries no user identity
    pub no_user_data: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "👋 Привет! Мы тестируем первую версию нашего проекта.\n\n\
                      Оставь свой контакт (email или Telegram), чтобы получить \
                      ранний доступ, как только всё будет готово ✍️\n\n\
                      Например: youremail@example.com или @example"
                .to_string(),
            send_telegram_button: "ОТПРАВИТЬ СВОЙ ТЕЛЕГРАМ 🚀".to_string(),
            invalid_format: "Отправь, пожалуйста, корректный email или Telegram-контакт.\n\
                             Пример: youremail@example.com или @example"
                .to_string(),
            already_registered: "Ты уже в списке!".to_string(),
            thanks: "🔥 Ура, ты в списке первых пользователей!\n\n\
                     Спасибо, что поддержал наш проект — это очень важно для нас.\n\
                     Ты получишь ранний доступ, как только всё будет готово.\n\n\
                     А вот тебе бонус — мини-гайд с нейросетями, которые мы сами \
                     используем в учёбе и работе:"
                .to_string(),
            guide_caption: "📚 Мини-гайд: 10 полезных нейросетей для учёбы и работы".to_string(),
            guide_fallback: "📚 Мини-гайд: 10 полезных нейросетей для учёбы и работы\n\
                             (Файл временно недоступен)"
                .to_string(),
            no_username: "У вас не установлен username в Telegram. Пожалуйста, задайте его \
                          в настройках Telegram и попробуйте снова."
                .to_string(),
            no_user_data: "Ошибка: не удалось получить данные пользователя.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_are_nonempty() {
        let messages = Messages::default();
        for text in [
            &messages.welcome,
            &messages.send_telegram_button,
            &messages.invalid_format,
            &messages.already_registered,
            &messages.thanks,
            &messages.guide_caption,
            &messages.guide_fallback,
            &messages.no_username,
            &messages.no_user_data,
        ] {
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_invalid_format_shows_examples() {
        let messages = Messages::default();
        assert!(messages.invalid_format.contains("youremail@example.com"));
        assert!(messages.invalid_format.contains("@example"));
    }
}
