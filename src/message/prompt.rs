pub(super) const TEMPERATURE: f64 = 0.8;
pub(super) const TOP_P: f64 = 0.95;

pub(super) fn welcome_prompt(email: &str) -> String {
    format!(
        "You are a high-tech campus assistant. A student with email \"{email}\" has just \
         checked into class. Give them a 1-sentence, cool, futuristic, and motivational \
         welcome message in Traditional Chinese (Taiwan). Keep it encouraging and short."
    )
}
