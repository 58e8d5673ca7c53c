//! Server-rendered HTML pages.
//!
//! Three views: a welcome page, the character list and the new-character
//! form. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use roster_domain::Character;
use serde::Deserialize;

pub const WELCOME_TITLE: &str = "Welcome";
pub const LIST_TITLE: &str = "Character list";
pub const NEW_TITLE: &str = "New character";

/// Raw fields of the new-character form. Numbers arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewCharacterForm {
    pub id: String,
    pub name: String,
    pub job: String,
    pub weapon: String,
    pub level: String,
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 0 20px; }}
        nav a {{ margin-right: 12px; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border-bottom: 1px solid #ddd; padding: 6px 10px; text-align: left; }}
        .error {{ color: #b00020; }}
        .empty {{ color: #777; font-style: italic; }}
        label {{ display: block; margin-top: 8px; }}
    </style>
</head>
<body>
    <nav><a href="/index">Home</a><a href="/list">Characters</a><a href="/new">New character</a></nav>
    <h1>{title}</h1>
{body}
</body>
</html>"#
    )
}

/// Welcome view.
pub fn welcome(title: &str) -> String {
    layout(
        title,
        r#"    <p>Manage your party: browse the <a href="/list">character list</a> or <a href="/new">add a new character</a>.</p>"#,
    )
}

/// List view with every character in roster order.
pub fn character_list(title: &str, characters: &[Character]) -> String {
    if characters.is_empty() {
        return layout(title, "    <p class=\"empty\">No characters yet</p>");
    }

    let mut rows = String::new();
    for c in characters {
        // Writing to a String cannot fail.
        let _ = writeln!(
            rows,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            c.id,
            escape(&c.name),
            escape(&c.job),
            escape(&c.weapon),
            c.level
        );
    }

    let body = format!(
        "    <table>\n        <tr><th>ID</th><th>Name</th><th>Job</th><th>Weapon</th><th>Level</th></tr>\n{rows}    </table>"
    );
    layout(title, &body)
}

/// New-character form, optionally showing an error and the values to refill.
pub fn new_character(title: &str, error: Option<&str>, values: &NewCharacterForm) -> String {
    let error = error
        .map(|msg| format!("    <p class=\"error\">{}</p>\n", escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"{error}    <form method="post" action="/new">
        <label>ID <input type="number" name="id" value="{id}" required></label>
        <label>Name <input type="text" name="name" value="{name}" required></label>
        <label>Job <input type="text" name="job" value="{job}"></label>
        <label>Weapon <input type="text" name="weapon" value="{weapon}"></label>
        <label>Level <input type="number" name="level" min="1" max="99" value="{level}" required></label>
        <button type="submit">Create</button>
    </form>"#,
        id = escape(&values.id),
        name = escape(&values.name),
        job = escape(&values.job),
        weapon = escape(&values.weapon),
        level = escape(&values.level),
    );
    layout(title, &body)
}
