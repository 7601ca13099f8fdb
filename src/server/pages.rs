//! HTML pages
//!
//! Plain server-rendered HTML: a sidebar with the API key form, a main column
//! with the page's banners, controls and boards. Every dynamic string goes
//! through [`escape_html`].

use super::session::Session;
use crate::core::MAX_TURNS_RANGE;
use crate::game::moves::side_name;
use crate::game::Notice;
use crate::rendering::{render_board_with, RenderOptions};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; display: flex; color: #222; }
aside { width: 280px; min-height: 100vh; background: #f0f2f6; padding: 1.5rem; box-sizing: border-box; }
main { flex: 1; padding: 1.5rem 3rem; max-width: 760px; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin: 0.5rem 0; }
.notice pre { margin: 0.5rem 0 0; white-space: pre-wrap; font-size: 0.85rem; }
.notice-success { background: #dff5e1; color: #14532d; }
.notice-info { background: #e0ecff; color: #1e3a8a; }
.notice-warning { background: #fff6d5; color: #7c5e10; }
.notice-error { background: #fde2e2; color: #7f1d1d; }
form.inline { display: inline-block; margin-right: 0.5rem; }
button { padding: 0.4rem 0.9rem; border-radius: 6px; border: 1px solid #bbb; background: #fff; cursor: pointer; }
input[type=text], input[type=password], input[type=number] { width: 100%; padding: 0.4rem; box-sizing: border-box; margin: 0.25rem 0 0.75rem; }
.turn { margin-top: 1.5rem; }
footer { margin-top: 2rem; border-top: 1px solid #ddd; padding-top: 0.5rem; font-size: 12px; color: #666; }
"#;

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, sidebar: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<aside>{sidebar}</aside>
<main>{main}</main>
</body>
</html>
"#,
        title = escape_html(title)
    )
}

fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let details = if notice.details.is_empty() {
                String::new()
            } else {
                format!("<pre>{}</pre>", escape_html(&notice.details.join("\n")))
            };
            format!(
                r#"<div class="notice {}">{}{}</div>"#,
                notice.level.css_class(),
                escape_html(&notice.message),
                details
            )
        })
        .collect()
}

/// API key form; `return_to` is the page re-rendered after saving
fn credential_form(session: &Session, return_to: &str) -> String {
    let status = if session.has_credential() {
        r#"<p class="credential-status">✅ API key saved!</p>"#
    } else {
        r#"<p class="credential-status">Enter a key to let Gemini play.</p>"#
    };
    format!(
        r#"<h2>🔐 Gemini API Configuration</h2>
<form method="post" action="/credentials">
<label for="api_key">Enter your Gemini API key:</label>
<input type="password" id="api_key" name="api_key" autocomplete="off">
<input type="hidden" name="return_to" value="{return_to}">
<button type="submit">Save key</button>
</form>
{status}"#,
        return_to = escape_html(return_to)
    )
}

pub fn index_page() -> String {
    layout(
        "Gemini Chess",
        "<h2>♟️ Gemini Chess</h2>",
        r#"<h1>♟️ Gemini Chess</h1>
<ul>
<li><a href="/battle">Gemini Chess AI Battle</a>: Gemini plays both sides.</li>
<li><a href="/suggest">Chess Move Suggestion</a>: play moves yourself and ask Gemini for one.</li>
</ul>"#,
    )
}

pub fn battle_page(session: &Session, notices: &[Notice], board: &RenderOptions) -> String {
    let battle = &session.battle;

    let sidebar = format!(
        r#"{credentials}
<h3>🎯 Max Turns</h3>
<input type="number" name="max_turns" form="start-form" min="{min}" max="{max}" value="{value}">"#,
        credentials = credential_form(session, "battle"),
        min = MAX_TURNS_RANGE.start(),
        max = MAX_TURNS_RANGE.end(),
        value = battle.max_turns(),
    );

    let mut main = String::from("<h1>♟️ Gemini Chess AI Battle</h1>");
    main.push_str(&render_notices(notices));
    main.push_str(
        r#"<form id="start-form" class="inline" method="post" action="/battle/start"><button type="submit">🚀 Start Game</button></form>
<form class="inline" method="post" action="/battle/reset"><button type="submit">🔄 Reset Game</button></form>"#,
    );
    main.push_str(&format!(
        r#"<p class="turn-count">Turns played: {} / {}</p>"#,
        battle.turn_count(),
        battle.max_turns()
    ));

    if !battle.history().is_empty() {
        main.push_str("<h2>📜 Move History</h2>");
        for (i, entry) in battle.history().iter().enumerate() {
            main.push_str(&format!(
                r#"<section class="turn"><h3>Turn {} - {} ({})</h3>{}</section>"#,
                i + 1,
                entry.side_label(),
                escape_html(&entry.notation),
                render_board_with(&entry.snapshot, Some(entry.highlight), board)
            ));
        }
    }

    layout("Gemini Chess AI Battle", &sidebar, &main)
}

pub fn suggest_page(session: &Session, notices: &[Notice], board: &RenderOptions) -> String {
    let suggest = &session.suggest;
    let sidebar = credential_form(session, "suggest");

    let mut main = String::from("<h1>♟️ Chess Move Suggestion with Gemini</h1>");
    main.push_str(&render_notices(notices));
    main.push_str(
        r#"<form method="post" action="/suggest/move">
<label for="mv">Enter your move (in UCI format, e.g., e2e4):</label>
<input type="text" id="mv" name="mv" autocomplete="off" autofocus>
</form>"#,
    );

    let status = match suggest.status() {
        Some(outcome) => escape_html(&outcome.message()),
        None => format!("{} to move", side_name(suggest.board().turn())),
    };
    main.push_str(&format!(r#"<p class="status">{status}</p>"#));
    main.push_str(&render_board_with(
        suggest.board().position(),
        suggest.last_move(),
        board,
    ));

    main.push_str(
        r#"<div>
<form class="inline" method="post" action="/suggest/ask"><button type="submit">Get Best Move from Gemini</button></form>
<form class="inline" method="post" action="/suggest/reset"><button type="submit">🔄 Reset Game</button></form>
</div>
<footer>Developed with Rust and the Gemini API.</footer>"#,
    );

    layout("Chess Move Suggestion with Gemini", &sidebar, &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::BoardTheme;

    #[test]
    fn test_escape_html() {
        //! Markup characters are neutralised
        assert_eq!(
            escape_html(r#"<b>"x" & 'y'</b>"#),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("e2e4"), "e2e4");
    }

    #[test]
    fn test_notices_are_escaped() {
        //! Service error text cannot inject markup
        let html = render_notices(&[Notice::error("<script>alert(1)</script>")]);
        assert!(html.contains("notice-error"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_battle_page_without_history() {
        //! Fresh battle page has controls but no history section
        let session = Session::new(10);
        let html = battle_page(&session, &[], &RenderOptions::default());
        assert!(html.contains("Gemini Chess AI Battle"));
        assert!(html.contains(r#"action="/battle/start""#));
        assert!(html.contains(r#"min="1" max="200" value="10""#));
        assert!(!html.contains("Move History"));
    }

    #[test]
    fn test_suggest_page_shows_board() {
        //! Suggest page renders the current board and side to move
        let session = Session::new(10);
        let html = suggest_page(
            &session,
            &[Notice::success("Game reset!")],
            &RenderOptions::default(),
        );
        assert!(html.contains("<svg"));
        assert!(html.contains("White to move"));
        assert!(html.contains("Game reset!"));
        assert!(html.contains(r#"name="return_to" value="suggest""#));
    }

    #[test]
    fn test_boards_use_configured_theme() {
        //! The chosen palette reaches the rendered board
        let session = Session::new(10);
        let wood = RenderOptions {
            theme: BoardTheme::Wood,
            ..RenderOptions::default()
        };
        let html = suggest_page(&session, &[], &wood);
        assert!(html.contains(BoardTheme::Wood.colors().dark_square));
        assert!(!html.contains(BoardTheme::Classic.colors().dark_square));
    }

    #[test]
    fn test_credential_never_rendered() {
        //! The stored key is not echoed into the page
        let mut session = Session::new(10);
        session.credential = "secret-key-123".to_string();
        let html = suggest_page(&session, &[], &RenderOptions::default());
        assert!(!html.contains("secret-key-123"));
        assert!(html.contains("API key saved"));
    }
}
