//! Terminal renditions of the form, success, and error panels

use std::time::Duration;

use super::format::{Tone, paint};
use crate::core::CheckInRecord;

pub(crate) const FORM_TITLE: &str = "NTNU Smart Check-in · 師大華語文教學系 國際華語與文化組";
pub(crate) const SUCCESS_HEADLINE: &str = "已經把資訊寄給你了";

pub(crate) fn render_form_prompt(use_color: bool) -> String {
    format!("{} ", paint("輸入您的電子郵件 >", Tone::Cyan, use_color))
}

pub(crate) fn render_validation(message: &str, use_color: bool) -> String {
    paint(&format!("  ✗ {message}"), Tone::Red, use_color)
}

pub(crate) fn render_success(
    record: &CheckInRecord,
    message: &str,
    reset_after: Duration,
    use_color: bool,
) -> String {
    let mut lines = vec![
        paint(&format!("✓ {SUCCESS_HEADLINE}"), Tone::Green, use_color),
        format!("  \"{message}\""),
        String::new(),
        format!("  {}  {}", record.email, paint(&record.timestamp, Tone::Dim, use_color)),
        "  歡迎信已寄送，如有疑問請洽系辦".to_string(),
    ];
    if !reset_after.is_zero() {
        lines.push(paint(
            &format!("  {} 秒後返回首頁", reset_after.as_secs()),
            Tone::Dim,
            use_color,
        ));
    }
    lines.join("\n")
}

pub(crate) fn render_error(message: &str, use_color: bool) -> String {
    paint(&format!("✗ {message}"), Tone::Red, use_color)
}

pub(crate) fn render_contact_line(contact_email: &str, use_color: bool) -> String {
    paint(&format!("CONTACT: {contact_email}"), Tone::Dim, use_color)
}

/// Banner shown above the form while the webhook is still the placeholder
pub(crate) fn render_unconfigured_banner(admin_email: &str, use_color: bool) -> String {
    let text = format!(
        "! 尚未連動發信功能: 執行 `checkin setup` 設定以 {admin_email} 寄送歡迎信"
    );
    paint(&text, Tone::Yellow, use_color)
}
