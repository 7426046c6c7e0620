//! Cookie Management Infrastructure
//!
//! Parsing and emission of the session cookie. The identity provider
//! sets the cookie during sign-in; this service reads it on every
//! navigation and clears it when a stale one is presented.

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Describes one named cookie and the attributes it is emitted with
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Config for a session cookie with the given name
    pub fn session(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The attribute tail shared by set and delete forms
    fn attributes(&self) -> String {
        let mut attrs = Vec::with_capacity(4);
        if self.http_only {
            attrs.push("HttpOnly".to_string());
        }
        if self.secure {
            attrs.push("Secure".to_string());
        }
        attrs.push(format!("SameSite={}", self.same_site.as_str()));
        attrs.push(format!("Path={}", self.path));
        attrs.join("; ")
    }

    /// Build a Set-Cookie header value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        format!("{}={}; {}", self.name, value, self.attributes())
    }

    /// Build a Set-Cookie header value that deletes the cookie
    ///
    /// Browsers match deletions on name and attributes, so the same
    /// attribute tail is kept and only Max-Age=0 is appended.
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; {}; Max-Age=0", self.name, self.attributes())
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}
