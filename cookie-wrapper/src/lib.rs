#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!

# read-after-write safe cookies for trillium

A request carries the cookies the client sent, and the response carries
the cookies queued for the client. If one part of an application
updates a cookie and a later part reads that cookie from the request,
the later part sees the stale client value, and its own write silently
discards the earlier update. [`CookieWrapper`] reads from the queued
response cookies first, so every read after a write sees that write.

## example
```
use trillium::Conn;
use trillium_cookie_wrapper::{cookie::Cookie, CookieWrapperConnExt, CookieWrapperHandler};

fn append_visit(conn: &mut Conn, page: &str) {
    let mut cookies = conn.cookie_wrapper().unwrap();
    let mut visits = cookies
        .get("visits")
        .cloned()
        .unwrap_or_else(|| Cookie::new("visits", ""));
    visits.set_value(format!("{}{page}", visits.value()));
    cookies.set_cookie(visits);
}

async fn handler_that_uses_cookies(mut conn: Conn) -> Conn {
    append_visit(&mut conn, "a");
    append_visit(&mut conn, "b");
    conn.ok("ok")
}

let handler = (CookieWrapperHandler::new(), handler_that_uses_cookies);

use trillium_testing::prelude::*;

assert_ok!(
    get("/").on(&handler),
    "ok",
    "set-cookie" => "visits=ab"
);

assert_ok!(
    get("/").with_request_header("cookie", "visits=z").on(&handler),
    "ok",
    "set-cookie" => "visits=zab"
);

```
*/
mod cookie_context;
pub use cookie_context::CookieContext;

mod cookie_wrapper;
pub use cookie_wrapper::CookieWrapper;

mod cookie_wrapper_handler;
pub use cookie_wrapper_handler::CookieWrapperHandler;

mod cookie_wrapper_conn_ext;
pub use cookie_wrapper_conn_ext::CookieWrapperConnExt;

mod error;
pub use error::{Error, Result};

pub use cookie;
