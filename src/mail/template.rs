// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Notification email body.
//!
//! `subject` and `message` are inserted as-is, without HTML escaping.
//! Callers that relay untrusted text should be aware the markup is live.

const LOGO_URL: &str = "https://i.ibb.co/9mySM5Hr/easemoni-ic-security-count-bg.png";

/// Render the fixed notification template.
pub fn render_notification(brand: &str, subject: &str, message: &str) -> String {
    format!(
        r#"
<div style="font-family: Arial; border: 1px solid #ddd; padding: 20px; border-radius: 10px;">
  <img src="{LOGO_URL}" width="100" style="margin-bottom: 10px;">
  <h2 style="color:#2196F3;">{subject}</h2>
  <p>{message}</p>
  <p style="font-size:12px; color:gray;">This message was sent automatically from {brand}.</p>
</div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_subject_and_message() {
        let html = render_notification("TetherFlash", "Deposit received", "You got 5 USDT");
        assert!(html.contains(r#"<h2 style="color:#2196F3;">Deposit received</h2>"#));
        assert!(html.contains("<p>You got 5 USDT</p>"));
        assert!(html.contains("sent automatically from TetherFlash."));
        assert!(html.contains(LOGO_URL));
    }

    #[test]
    fn passes_markup_through_unescaped() {
        let html = render_notification("TetherFlash", "<b>Hi</b>", "a & b <i>c</i>");
        assert!(html.contains("<h2 style=\"color:#2196F3;\"><b>Hi</b></h2>"));
        assert!(html.contains("<p>a & b <i>c</i></p>"));
    }
}
