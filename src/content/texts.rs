//! Static texts
//!
//! Texts marked as HTML are sent with `ParseMode::Html`; everything else is
//! plain text.

/// Menu button labels. Matched against inbound text byte for byte.
pub const MENU_CONSULTATION: &str = "📅 Записаться на консультацию";
pub const MENU_QUESTION: &str = "❓ Задать вопрос";
pub const MENU_ABOUT: &str = "ℹ️ О нас";

/// Greeting shown on /start (HTML)
pub const WELCOME: &str = "👋 Привет! Я — бот агентства <b>China is Calling</b> 🇨🇳\n\n\
    Мы помогаем абитуриентам поступить в университеты Китая:\n\
    🎓 Подбор программ и университетов\n\
    📝 Помощь с документами и консультация по визам\n\
    🏙️ Поддержка после приезда\n\n\
    Выбери, что тебя интересует 👇";

/// About page (HTML, link previews disabled)
pub const ABOUT: &str = "🏫 <b>О нас</b>\n\n\
    Мы — агентство <b>China is Calling</b>, помогаем студентам поступить в университеты Китая 🇨🇳.\n\n\
    Наши услуги:\n\
    • Подбор университетов и программ\n\
    • Помощь с поступлением и визой\n\
    • Поддержка студентов в Китае\n\n\
    Связаться с нами:\n\
    🌐 Сайт: @щас будет\n\
    💬 Telegram: @делаем\n\
    📸 Instagram: <a href=\"https://www.instagram.com/china.is.calling\">china.is.calling</a>\n\
    📺 YouTube: <a href=\"https://youtube.com/@chinaiscalling\">China is Calling</a>\n\
    📢 Канал: <a href=\"https://t.me/chinaiscalling\">t.me/chinaiscalling</a>\n\
    🎵 TikTok: <a href=\"https://www.tiktok.com/@china.is.calling?_t=ZT-90rwJj7bEYo&amp;_r=1\">china.is.calling</a>\n\
    🅱️ VK: <a href=\"https://vk.com/club233354704\">china.is.calling</a>";

// Consultation flow prompts
pub const ASK_NAME: &str = "Давай начнём! 😊\n\nКак тебя зовут?";
pub const ASK_COUNTRY: &str = "Отлично! 🌍 Из какой ты страны?";
pub const ASK_PROGRAM: &str =
    "Какую программу ты рассматриваешь? (например: бакалавриат, магистратура, языковые курсы)";
pub const ASK_CONTACT: &str =
    "📞 Укажи, как с тобой связаться (Telegram @username, телефон или email):";
pub const CONSULTATION_DONE: &str =
    "Спасибо! 🙌\nТвоя заявка отправлена менеджеру. Мы скоро с тобой свяжемся 💬";

// Question flow
pub const ASK_QUESTION: &str = "💬 Напиши свой вопрос сюда, и мы ответим в ближайшее время.";
pub const QUESTION_DONE: &str = "✅ Спасибо! Мы получили твой вопрос и скоро с тобой свяжемся 🙌";

/// Header of the /help reply; the command list is appended at runtime
pub const HELP_HEADER: &str = "🤖 Что я умею";

// Operator templates (HTML)
pub const OPERATOR_CONSULTATION_HEADER: &str = "📝 <b>Новая заявка на консультацию!</b>";
pub const OPERATOR_QUESTION_HEADER: &str = "📩 <b>Новый вопрос от</b>";
pub const LABEL_NAME: &str = "👤 Имя";
pub const LABEL_COUNTRY: &str = "🌍 Страна";
pub const LABEL_PROGRAM: &str = "🎓 Программа";
pub const LABEL_CONTACT: &str = "📞 Контакт";
