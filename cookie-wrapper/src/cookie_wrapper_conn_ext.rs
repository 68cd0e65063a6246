use crate::{CookieContext, CookieWrapper, Result};
use cookie::Cookie;
use trillium::Conn;

/**
Extension trait adding cookie wrapper capacities to [`Conn`].

Important: The [`CookieWrapperHandler`](crate::CookieWrapperHandler)
must be called before any of these functions can be called on a conn.
*/
pub trait CookieWrapperConnExt {
    /// Binds a [`CookieWrapper`] to this conn's cookie context.
    /// Returns [`Error::MissingContext`](crate::Error::MissingContext)
    /// if the handler has not run.
    fn cookie_wrapper(&mut self) -> Result<CookieWrapper<'_>>;

    /// gets a reference to the cookie context, if the handler has run
    fn cookie_context(&self) -> Option<&CookieContext>;

    /// gets a mutable reference to the cookie context, if the handler
    /// has run
    fn cookie_context_mut(&mut self) -> Option<&mut CookieContext>;

    /// queues a cookie for the response and returns the conn
    fn with_cookie(self, cookie: Cookie<'_>) -> Self;
}

impl CookieWrapperConnExt for Conn {
    fn cookie_wrapper(&mut self) -> Result<CookieWrapper<'_>> {
        CookieWrapper::try_from(self.cookie_context_mut())
    }

    fn cookie_context(&self) -> Option<&CookieContext> {
        self.state()
    }

    fn cookie_context_mut(&mut self) -> Option<&mut CookieContext> {
        self.state_mut()
    }

    fn with_cookie(mut self, cookie: Cookie<'_>) -> Self {
        match self.cookie_wrapper() {
            Ok(mut cookies) => cookies.set_cookie(cookie),
            Err(e) => log::warn!("dropping cookie {}: {e}", cookie.name()),
        }
        self
    }
}
