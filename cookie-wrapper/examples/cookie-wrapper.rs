use trillium::Conn;
use trillium_cookie_wrapper::{cookie::Cookie, CookieWrapperConnExt, CookieWrapperHandler};

pub fn main() {
    env_logger::init();

    trillium_smol::run((CookieWrapperHandler::new(), |mut conn: Conn| async move {
        let body = match conn.cookie_wrapper() {
            Ok(mut cookies) => {
                let mut hits = cookies
                    .get("hits")
                    .cloned()
                    .unwrap_or_else(|| Cookie::new("hits", ""));
                hits.set_value(format!("{}+", hits.value()));
                let body = format!("hits: {}", hits.value());
                cookies.set_cookie(hits);
                body
            }

            Err(e) => e.to_string(),
        };

        conn.ok(body)
    }));
}
