//! Client configuration shared by the request client and session guard.
//!
//! The pages are served as static assets next to the API, so the defaults
//! describe a same-origin deployment with the login page at
//! `/static/index.html`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default login document every unauthenticated page falls back to.
pub const DEFAULT_LOGIN_PAGE: &str = "/static/index.html";

/// Where requests go and where unauthenticated users are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every API path. Empty means same origin.
    pub api_base: String,
    /// Path of the login document.
    pub login_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), login_page: DEFAULT_LOGIN_PAGE.to_owned() }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_login_page(mut self, login_page: impl Into<String>) -> Self {
        self.login_page = login_page.into();
        self
    }

    /// Resolve an API path against `api_base`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Whether `pathname` already points at the login document.
    ///
    /// Matches the full login path or any path containing its file name, so
    /// `/index.html` and `/static/index.html?error=x` both count. The file-name
    /// check is a plain substring match: `/static/reindex.html` counts too.
    pub fn is_login_page(&self, pathname: &str) -> bool {
        if pathname == self.login_page {
            return true;
        }
        let file_name = self.login_page.rsplit('/').next().unwrap_or_default();
        !file_name.is_empty() && pathname.contains(file_name)
    }
}
