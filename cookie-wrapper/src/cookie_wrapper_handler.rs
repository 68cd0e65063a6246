use crate::CookieContext;
use std::time::Duration;
use trillium::{async_trait, Conn, Handler, HeaderValue, KnownHeaderName};

/**
The trillium cookie wrapper handler. See crate level docs for an
example. This must run before any handler accesses the cookies through
[`CookieWrapperConnExt`](crate::CookieWrapperConnExt).

On the way in, the `Cookie` request headers are parsed into a
[`CookieContext`] stored on the conn. Before the response is sent,
every outgoing cookie is appended as a `Set-Cookie` header, in the order
it was first written.
*/
#[derive(Clone, Copy, Debug)]
pub struct CookieWrapperHandler {
    expiry_offset: Duration,
}

impl Default for CookieWrapperHandler {
    fn default() -> Self {
        Self {
            expiry_offset: CookieContext::new().expiry_offset(),
        }
    }
}

impl CookieWrapperHandler {
    /// constructs a new cookie wrapper handler
    pub fn new() -> Self {
        Self::default()
    }

    /**
    Sets how far in the past
    [`CookieWrapper::expire`](crate::CookieWrapper::expire) dates the
    removal cookies it sends. Defaults to one day.

    # Panics

    Panics if `expiry_offset` is zero.
    */
    pub fn with_expiry_offset(mut self, expiry_offset: Duration) -> Self {
        self.expiry_offset = CookieContext::new()
            .with_expiry_offset(expiry_offset)
            .expiry_offset();
        self
    }
}

#[async_trait]
impl Handler for CookieWrapperHandler {
    async fn run(&self, conn: Conn) -> Conn {
        if conn.state::<CookieContext>().is_some() {
            log::debug!("cookie context already present, not reparsing cookie headers");
            return conn;
        }

        let mut context = CookieContext::new().with_expiry_offset(self.expiry_offset);

        if let Some(cookies) = conn.request_headers().get_values(KnownHeaderName::Cookie) {
            for cookie in cookies.iter().filter_map(HeaderValue::as_str) {
                context.parse_header(cookie);
            }
        }

        conn.with_state(context)
    }

    async fn before_send(&self, mut conn: Conn) -> Conn {
        if let Some(context) = conn.take_state::<CookieContext>() {
            let headers = conn.response_headers_mut();

            for cookie in context.outgoing_cookies() {
                headers.append(KnownHeaderName::SetCookie, cookie.encoded().to_string());
            }
        }

        conn
    }
}
