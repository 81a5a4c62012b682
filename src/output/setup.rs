//! Setup/help panel for deploying the spreadsheet webhook

use super::format::{Tone, paint};
use crate::config::Settings;
use crate::notify::is_configured;

const SCRIPT_TEMPLATE: &str = include_str!("webhook_script.gs");

/// Webhook script source with the office addresses filled in
pub(crate) fn render_webhook_script(admin_email: &str, contact_email: &str) -> String {
    SCRIPT_TEMPLATE
        .replace("{{ADMIN_EMAIL}}", admin_email)
        .replace("{{CONTACT_EMAIL}}", contact_email)
}

pub(crate) fn render_setup_panel(settings: &Settings, use_color: bool) -> String {
    let admin = &settings.admin_email;
    let status = if is_configured(&settings.webhook_url) {
        paint(
            &format!("✓ 已連動發信功能: {}", settings.webhook_url),
            Tone::Green,
            use_color,
        )
    } else {
        paint(
            "! 尚未連動發信功能 (webhook_url 仍是部署預留網址)",
            Tone::Yellow,
            use_color,
        )
    };

    let steps = [
        paint("1. 貼上程式碼", Tone::Yellow, use_color),
        "   開啟一個新的 Google 試算表。".to_string(),
        "   點擊「延伸模組」 > 「Apps Script」，刪除所有內容並貼上下方的程式碼。".to_string(),
        paint("2. 部署網頁應用程式", Tone::Yellow, use_color),
        "   點擊「部署」 > 「新部署」，類型選「網頁應用程式」。".to_string(),
        format!("   執行身分: 我 ({admin})"),
        "   誰可以存取: 「任何人」(Anyone)".to_string(),
        "   按部署，並在彈出的權限視窗選「允許」。".to_string(),
        paint("3. 最後一步", Tone::Yellow, use_color),
        "   將部署後獲得的 /exec 網址填入 config.toml 的 `webhook_url` (或使用 --webhook-url)。"
            .to_string(),
    ];

    format!(
        "{title}\n{status}\n\n  請使用 {admin} 帳號登入 Google 並執行以下步驟，學生收到的信件寄件者才會顯示為該信箱。\n  學生的聯絡窗口: {contact}\n\n  {steps}\n\n{script}",
        title = paint("後端發信設定教學", Tone::Cyan, use_color),
        contact = settings.contact_email,
        steps = steps.join("\n  "),
        script = render_webhook_script(admin, &settings.contact_email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_has_addresses_substituted() {
        let script = render_webhook_script("office@example.edu", "help@example.edu");
        assert!(script.contains("var adminEmail = \"office@example.edu\";"));
        assert!(script.contains("help@example.edu"));
        assert!(!script.contains("{{"));
        assert!(script.contains("function doPost(e)"));
    }

    #[test]
    fn panel_reads_in_the_form_language() {
        let settings = Settings {
            webhook_url: "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec".to_string(),
            admin_email: "office@example.edu".to_string(),
            contact_email: "help@example.edu".to_string(),
            model: "m".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: None,
            delays: crate::core::ResetDelays::default(),
            timezone: crate::utils::Timezone::Named(chrono_tz::UTC),
            store_path: None,
            ephemeral: true,
            offline: true,
        };
        let panel = render_setup_panel(&settings, false);
        assert!(panel.contains("後端發信設定教學"));
        assert!(panel.contains("尚未連動發信功能"));
        assert!(panel.contains("部署網頁應用程式"));
        assert!(panel.contains("執行身分: 我 (office@example.edu)"));
        assert!(!panel.contains("Deploy"));
    }
}
