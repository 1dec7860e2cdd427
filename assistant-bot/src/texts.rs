//! Fixed user-facing texts (Uzbek) and the LLM instructions.

use registry::GrowthPoint;
use teloxide::utils::html;

pub const PERMISSION_DENIED: &str = "❌ Sizda bu buyruqdan foydalanish huquqi yo‘q.";
pub const NO_USERS: &str = "👥 Hozircha hech kim botga kirmagan.";
pub const NO_STATS: &str = "📉 Hali hech kim botga kirmagan.";

pub const TEXT_SYSTEM_PROMPT: &str = "Sen foydalanuvchiga yordam beradigan aqlli yordamchi botsan.";
pub const VISION_SYSTEM_PROMPT: &str = "Sen rasmlarni tahlil qilib tushuntirib beradigan yordamchisan.";
pub const PHOTO_INSTRUCTION: &str = "Rasimda nimalar borligini tushuntirib bering.";

pub const CHART_TITLE: &str = "📈 Bot foydalanuvchilari soni o‘sishi";

pub fn welcome(name: &str) -> String {
    format!(
        "Assalomu alaykum, {name}! 🤖\nNulufarxon😍 Botga xush kelibsiz!\nSavol yozing yoki rasm yuboring — men yordam beraman ✍️📸"
    )
}

pub fn new_user_notice(name: &str, user_id: i64) -> String {
    format!("🆕 Yangi foydalanuvchi kirdi!\n👤 Ism: {name}\n🆔 ID: {user_id}")
}

/// HTML listing: bold header, `i. name — joined_at` per user (1-based, insertion order), bold total.
/// Names are escaped; timestamps are digits and separators only.
pub fn user_listing<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut out = String::from("📊 <b>Foydalanuvchilar ro‘yxati</b>\n\n");
    let mut total = 0usize;
    for (i, (name, joined_at)) in entries.into_iter().enumerate() {
        out.push_str(&format!("{}. {} — {}\n", i + 1, html::escape(name), joined_at));
        total += 1;
    }
    out.push_str(&format!("\n<b>Jami:</b> {total} ta foydalanuvchi 👥"));
    out
}

/// Caption sent with the growth chart: title, covered date range, final total.
pub fn chart_caption(series: &[GrowthPoint]) -> String {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => format!(
            "{CHART_TITLE}\n📅 {} — {}\n👥 Jami: {} ta foydalanuvchi",
            first.date.format("%Y-%m-%d"),
            last.date.format("%Y-%m-%d"),
            last.total
        ),
        _ => CHART_TITLE.to_string(),
    }
}
