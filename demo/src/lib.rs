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
Demo app for trillium-cookie-wrapper.

`GET /` appends the letters A through D to two cookies, four writes
each. `badcookie` is updated by reading the request cookies directly,
so every write starts over from the client's value and only the last
letter survives. `goodcookie` is updated through
[`CookieWrapper`], so every write builds on the previous one.
*/

mod index_model;
pub use index_model::IndexModel;

use trillium::{Conn, Handler, Status};
use trillium_cookie_wrapper::{
    cookie::Cookie, CookieContext, CookieWrapper, CookieWrapperConnExt, CookieWrapperHandler,
    Error, Result,
};
use trillium_logger::Logger;
use trillium_router::Router;

const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// Don't do this: appends `suffix` to the value the client sent for
/// this cookie, ignoring any value already written during this request.
pub fn update_cookie_the_wrong_way(context: &mut CookieContext, name: &str, suffix: &str) {
    let mut cookie = context
        .sent(name)
        .cloned()
        .unwrap_or_else(|| Cookie::new(name.to_string(), ""));
    cookie.set_value(format!("{}{suffix}", cookie.value()));
    context.set_cookie(cookie);
}

/// appends `suffix` to the current value of this cookie
pub fn update_cookie(cookies: &mut CookieWrapper<'_>, name: &str, suffix: &str) {
    let mut cookie = cookies
        .get(name)
        .cloned()
        .unwrap_or_else(|| Cookie::new(name.to_string(), ""));
    cookie.set_value(format!("{}{suffix}", cookie.value()));
    cookies.set_cookie(cookie);
}

fn build_model(conn: &mut Conn) -> Result<IndexModel> {
    let context = conn.cookie_context_mut().ok_or(Error::MissingContext)?;

    for letter in LETTERS {
        update_cookie_the_wrong_way(context, "badcookie", letter);
    }

    let mut cookies = CookieWrapper::new(context);
    for letter in LETTERS {
        update_cookie(&mut cookies, "goodcookie", letter);
    }

    let value_of = |name: &str| {
        cookies
            .get(name)
            .map(|cookie| cookie.value().to_string())
            .unwrap_or_default()
    };

    Ok(IndexModel {
        bad_value: value_of("badcookie"),
        good_value: value_of("goodcookie"),
    })
}

/// the index page
pub async fn index(mut conn: Conn) -> Conn {
    match build_model(&mut conn) {
        Ok(model) => conn.ok(model.to_string()),
        Err(e) => {
            log::error!("{e}");
            conn.with_status(Status::InternalServerError)
                .with_body(e.to_string())
                .halt()
        }
    }
}

/// the full demo handler
pub fn app() -> impl Handler {
    (
        Logger::new(),
        CookieWrapperHandler::new(),
        Router::new().get("/", index),
    )
}
