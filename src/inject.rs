use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::Regex;
use serde::Serialize;

use crate::config::Config;

const HEAD_CLOSE: &str = "</head>";

static CLIENT_ID_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"content="[^"]*\.apps\.googleusercontent\.com""#)
        .expect("client id pattern is valid")
});

/// The values exposed to the page as `window.ENV`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ClientEnv<'a> {
    pub google_client_id: &'a str,
    pub backend_url: &'a str,
    pub authorized_domains: &'a [String],
}

impl<'a> From<&'a Config> for ClientEnv<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            google_client_id: &config.google_client_id,
            backend_url: &config.backend_url,
            authorized_domains: &config.authorized_domains,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub html: String,
    pub client_id_replaced: bool,
    pub head_found: bool,
}

pub fn inject(html: &str, env: ClientEnv<'_>) -> serde_json::Result<Injection> {
    let (html, client_id_replaced) = replace_client_id(html, env.google_client_id);
    let script = render_env_script(env)?;
    let (html, head_found) = insert_before_head_close(&html, &script);
    Ok(Injection {
        html,
        client_id_replaced,
        head_found,
    })
}

/// Rewrites the first `content="….apps.googleusercontent.com"` attribute to hold `client_id`.
pub fn replace_client_id(html: &str, client_id: &str) -> (String, bool) {
    let Some(found) = CLIENT_ID_ATTR.find(html) else {
        return (html.to_owned(), false);
    };
    let value = encode_double_quoted_attribute(client_id);
    let mut out = String::with_capacity(html.len() + value.len());
    out.push_str(&html[..found.start()]);
    out.push_str("content=\"");
    out.push_str(&value);
    out.push('"');
    out.push_str(&html[found.end()..]);
    (out, true)
}

pub fn render_env_script(env: ClientEnv<'_>) -> serde_json::Result<String> {
    // `<` only occurs inside string literals here, so escaping it keeps values
    // from closing the script element early.
    let object = serde_json::to_string(&env)?.replace('<', "\\u003c");
    Ok(format!(
        "\n    <script>\n        window.ENV = {object};\n    </script>\n"
    ))
}

pub fn insert_before_head_close(html: &str, block: &str) -> (String, bool) {
    let Some(at) = html.find(HEAD_CLOSE) else {
        return (html.to_owned(), false);
    };
    let mut out = String::with_capacity(html.len() + block.len() + 1);
    out.push_str(&html[..at]);
    out.push_str(block);
    out.push('\n');
    out.push_str(&html[at..]);
    (out, true)
}
