use trillium_cookie_wrapper::{cookie::Cookie, CookieContext, CookieWrapper};

fn append_with_wrapper(context: &mut CookieContext, letter: &str) {
    let mut cookies = CookieWrapper::new(context);
    let mut cookie = cookies
        .get("counter")
        .cloned()
        .unwrap_or_else(|| Cookie::new("counter", ""));
    cookie.set_value(format!("{}{letter}", cookie.value()));
    cookies.set("counter", cookie).unwrap();
}

fn append_from_request(context: &mut CookieContext, letter: &str) {
    let mut cookie = context
        .sent("counter")
        .cloned()
        .unwrap_or_else(|| Cookie::new("counter", ""));
    cookie.set_value(format!("{}{letter}", cookie.value()));
    context.set_cookie(cookie);
}

fn append_from_incoming(context: &mut CookieContext, letter: &str) {
    let mut cookie = context
        .incoming("counter")
        .cloned()
        .unwrap_or_else(|| Cookie::new("counter", ""));
    cookie.set_value(format!("{}{letter}", cookie.value()));
    context.set_cookie(cookie);
}

fn outgoing_counter(context: &CookieContext) -> &str {
    context.outgoing("counter").unwrap().value()
}

#[test]
fn wrapper_keeps_every_update() {
    let mut context = CookieContext::new();
    for letter in ["A", "B", "C", "D"] {
        append_with_wrapper(&mut context, letter);
    }
    assert_eq!(outgoing_counter(&context), "ABCD");
    assert_eq!(
        CookieWrapper::new(&mut context).get("counter").unwrap().value(),
        "ABCD"
    );
}

#[test]
fn reading_request_loses_updates() {
    let mut context = CookieContext::new();
    for letter in ["A", "B", "C", "D"] {
        append_from_request(&mut context, letter);
    }
    assert_eq!(outgoing_counter(&context), "D");

    let mut context = CookieContext::from_incoming([Cookie::new("counter", "Z")]);
    for letter in ["A", "B", "C", "D"] {
        append_from_request(&mut context, letter);
    }
    assert_eq!(outgoing_counter(&context), "ZD");
}

#[test]
fn reading_mirrored_incoming_is_stale_too() {
    let mut context = CookieContext::new();
    for letter in ["A", "B", "C", "D"] {
        append_from_incoming(&mut context, letter);
    }
    assert_eq!(outgoing_counter(&context), "AD");
    assert_eq!(context.incoming("counter").unwrap().value(), "A");
}

#[test]
fn wrapper_builds_on_client_value() {
    let mut context = CookieContext::from_incoming([Cookie::new("counter", "Z")]);
    for letter in ["A", "B", "C", "D"] {
        append_with_wrapper(&mut context, letter);
    }
    assert_eq!(outgoing_counter(&context), "ZABCD");
    assert_eq!(context.incoming("counter").unwrap().value(), "Z");
}

#[test]
fn write_from_elsewhere_is_visible() {
    let mut context = CookieContext::from_incoming([Cookie::new("theme", "light")]);
    context.set_cookie(Cookie::new("theme", "dark"));

    let mut cookies = CookieWrapper::new(&mut context);
    assert_eq!(cookies.get("theme").unwrap().value(), "dark");

    cookies.set_cookie(Cookie::new("theme", "contrast"));
    assert_eq!(cookies.get("theme").unwrap().value(), "contrast");
    assert_eq!(context.incoming("theme").unwrap().value(), "light");
}
