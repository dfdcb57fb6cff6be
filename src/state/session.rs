//! Session guard for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page calls `require_auth` on entry, then renders the user's name and
//! avatar and wires the logout buttons. The guard holds at most one user and
//! swaps it wholesale; a navigation reloads the page and resets it.
//!
//! ERROR HANDLING
//! ==============
//! Identity and logout failures never escape: a failed check reads as "not
//! signed in" and logout always finishes on the login page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::transport::{BrowserTransport, Transport};
use crate::net::types::CurrentUser;
use crate::util::navigation::{BrowserNavigator, Navigator};

pub const AVATAR_SELECTOR: &str = ".user-avatar";
pub const NAME_SELECTOR: &str = ".user-name";
pub const LOGOUT_SELECTOR: &str = ".btn-logout";

/// Authentication state of the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(CurrentUser),
}

impl AuthState {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// Avatar URL to display, if the user has a non-empty one.
pub fn avatar_source(user: &CurrentUser) -> Option<&str> {
    user.picture_url.as_deref().filter(|url| !url.is_empty())
}

pub struct SessionGuard<T = BrowserTransport, N = BrowserNavigator> {
    api: ApiClient<T, N>,
    state: RefCell<AuthState>,
}

impl SessionGuard {
    /// Guard for the current page using `fetch` and `window.location`.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(ApiClient::browser(config))
    }
}

impl<T: Transport, N: Navigator> SessionGuard<T, N> {
    pub fn new(api: ApiClient<T, N>) -> Self {
        Self { api, state: RefCell::new(AuthState::Unauthenticated) }
    }

    pub fn api(&self) -> &ApiClient<T, N> {
        &self.api
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Ask the server who is signed in. Returns whether anyone is.
    pub async fn check_auth(&self) -> bool {
        let next = match self.api.current_user().await {
            Ok(user) => AuthState::Authenticated(user),
            Err(e) => {
                log::debug!("identity check failed: {e}");
                AuthState::Unauthenticated
            }
        };
        let signed_in = matches!(next, AuthState::Authenticated(_));
        *self.state.borrow_mut() = next;
        signed_in
    }

    /// The stored user, if any.
    pub fn user(&self) -> Option<CurrentUser> {
        self.state.borrow().user().cloned()
    }

    /// End the session and go to the login page, whatever the server says.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::error!("logout error: {e}");
        }
        *self.state.borrow_mut() = AuthState::Unauthenticated;
        self.api.go_to_login();
    }

    /// Page-entry guard: send unauthenticated users to the login page.
    ///
    /// A 401 off the login page has already redirected inside the client; the
    /// guard still assigns the same URL afterwards.
    pub async fn require_auth(&self) -> bool {
        if self.check_auth().await {
            return true;
        }
        self.api.go_to_login();
        false
    }

    /// Push the stored user into every avatar and name element on the page.
    pub fn init_user_display(&self) {
        let Some(user) = self.user() else {
            return;
        };
        #[cfg(feature = "browser")]
        {
            use crate::util::dom;

            if let Some(src) = avatar_source(&user) {
                for el in dom::select_all(AVATAR_SELECTOR) {
                    let _ = el.set_attribute("src", src);
                }
            }
            for el in dom::select_all(NAME_SELECTOR) {
                el.set_text_content(Some(&user.display_name));
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = user;
        }
    }
}

#[cfg(feature = "browser")]
impl<T: Transport + 'static, N: Navigator + 'static> SessionGuard<T, N> {
    /// Make every logout control on the page call [`SessionGuard::logout`].
    pub fn bind_logout_buttons(self: &std::rc::Rc<Self>) {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::util::dom;

        for el in dom::select_all(LOGOUT_SELECTOR) {
            let guard = std::rc::Rc::clone(self);
            let on_click = Closure::<dyn FnMut()>::new(move || {
                let guard = std::rc::Rc::clone(&guard);
                wasm_bindgen_futures::spawn_local(async move { guard.logout().await });
            });
            let _ = el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}
