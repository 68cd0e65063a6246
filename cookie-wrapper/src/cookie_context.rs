use cookie::Cookie;
use std::time::Duration;

const DEFAULT_EXPIRY_OFFSET: Duration = Duration::from_secs(24 * 60 * 60);

/**
The two cookie collections belonging to a single conn.

The *incoming* collection holds the cookies that the client sent with
this request, plus a copy of each cookie first written during this
request under a name the client did not send. The *outgoing*
collection holds the cookies that will be sent back to the client as
`Set-Cookie` headers, in the order they were first written.

[`CookieContext::set_cookie`] writes to the outgoing collection and
also adds the cookie to the incoming collection, but only if no
incoming cookie of that name exists. Because an incoming cookie is
never overwritten, reading the incoming collection after a write can
return a stale value. [`CookieWrapper`](crate::CookieWrapper) exists
to hide that asymmetry.

```
use trillium_cookie_wrapper::{cookie::Cookie, CookieContext};

let mut context = CookieContext::from_incoming([Cookie::new("counter", "A")]);
context.set_cookie(Cookie::new("counter", "AB"));

assert_eq!(context.incoming("counter").unwrap().value(), "A");
assert_eq!(context.outgoing("counter").unwrap().value(), "AB");
```
*/
#[derive(Clone, Debug)]
pub struct CookieContext {
    sent: Vec<Cookie<'static>>,
    mirrored: Vec<Cookie<'static>>,
    outgoing: Vec<Cookie<'static>>,
    expiry_offset: Duration,
}

impl Default for CookieContext {
    fn default() -> Self {
        Self {
            sent: vec![],
            mirrored: vec![],
            outgoing: vec![],
            expiry_offset: DEFAULT_EXPIRY_OFFSET,
        }
    }
}

impl CookieContext {
    /// constructs an empty cookie context
    pub fn new() -> Self {
        Self::default()
    }

    /// constructs a cookie context from the cookies a client sent. If
    /// a name occurs more than once, the first cookie wins.
    pub fn from_incoming<'c>(cookies: impl IntoIterator<Item = Cookie<'c>>) -> Self {
        let mut context = Self::new();
        for cookie in cookies {
            context.add_incoming(cookie);
        }
        context
    }

    /**
    Sets how far in the past
    [`CookieWrapper::expire`](crate::CookieWrapper::expire) dates the
    removal cookie it sends. Defaults to one day.

    # Panics

    Panics if `expiry_offset` is zero, since a removal cookie must
    expire strictly before the moment it was created.
    */
    pub fn with_expiry_offset(mut self, expiry_offset: Duration) -> Self {
        assert!(
            !expiry_offset.is_zero(),
            "cookie expiry offset must be greater than zero"
        );
        self.expiry_offset = expiry_offset;
        self
    }

    /// how far in the past removal cookies are dated
    pub fn expiry_offset(&self) -> Duration {
        self.expiry_offset
    }

    /// Parses a single `Cookie` request header value into the
    /// incoming collection, returning the number of cookies added.
    /// Pairs that fail to parse are skipped.
    pub fn parse_header(&mut self, header: &str) -> usize {
        let mut added = 0;
        for pair in header.split(';') {
            if pair.trim().is_empty() {
                continue;
            }

            match Cookie::parse_encoded(String::from(pair)) {
                Ok(cookie) => {
                    if self.add_incoming(cookie) {
                        added += 1;
                    }
                }

                Err(e) => log::debug!("skipping unparseable cookie {pair:?}: {e}"),
            }
        }
        added
    }

    /// Adds a cookie sent by the client to the incoming collection
    /// unless one of the same name is already present. Returns whether
    /// the cookie was added.
    pub fn add_incoming(&mut self, cookie: Cookie<'_>) -> bool {
        if self.incoming(cookie.name()).is_some() {
            false
        } else {
            self.sent.push(cookie.into_owned());
            true
        }
    }

    /// the cookie of this name that the client sent, or that was
    /// added to the incoming collection by the first write of this name
    pub fn incoming(&self, name: &str) -> Option<&Cookie<'static>> {
        self.incoming_cookies().find(|cookie| cookie.name() == name)
    }

    /// iterates over the incoming collection, client cookies first
    pub fn incoming_cookies(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.sent.iter().chain(&self.mirrored)
    }

    /// the cookie of this name exactly as the client sent it, ignoring
    /// copies added by writes during this request
    pub fn sent(&self, name: &str) -> Option<&Cookie<'static>> {
        self.sent.iter().find(|cookie| cookie.name() == name)
    }

    /// the cookie of this name queued for the response, if any
    pub fn outgoing(&self, name: &str) -> Option<&Cookie<'static>> {
        self.outgoing.iter().find(|cookie| cookie.name() == name)
    }

    /// whether a cookie of this name is queued for the response
    pub fn contains_outgoing(&self, name: &str) -> bool {
        self.outgoing(name).is_some()
    }

    /// iterates over the outgoing collection in insertion order
    pub fn outgoing_cookies(&self) -> impl Iterator<Item = &Cookie<'static>> {
        self.outgoing.iter()
    }

    /**
    Queues a cookie for the response.

    An outgoing cookie of the same name is replaced in place,
    keeping its original position. If the incoming collection has no
    cookie of this name, a copy is added there as well. An existing
    incoming cookie is left as is.
    */
    pub fn set_cookie(&mut self, cookie: Cookie<'_>) {
        let cookie = cookie.into_owned();
        if self.incoming(cookie.name()).is_none() {
            self.mirrored.push(cookie.clone());
        }

        match self
            .outgoing
            .iter_mut()
            .find(|existing| existing.name() == cookie.name())
        {
            Some(existing) => *existing = cookie,
            None => self.outgoing.push(cookie),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_first_duplicate_wins() {
        let mut context = CookieContext::new();
        assert_eq!(context.parse_header("a=1; b=2; a=3"), 2);
        assert_eq!(context.incoming("a").unwrap().value(), "1");
        assert_eq!(context.incoming("b").unwrap().value(), "2");
    }

    #[test]
    fn parse_header_skips_garbage() {
        let mut context = CookieContext::new();
        assert_eq!(context.parse_header("novalue; ;ok=yes"), 1);
        assert_eq!(context.incoming_cookies().count(), 1);
        assert_eq!(context.incoming("ok").unwrap().value(), "yes");
    }

    #[test]
    fn parse_header_percent_decodes() {
        let mut context = CookieContext::new();
        context.parse_header("greeting=hello%20world");
        assert_eq!(context.incoming("greeting").unwrap().value(), "hello world");
    }

    #[test]
    fn set_cookie_seeds_incoming_only_when_absent() {
        let mut context = CookieContext::new();
        context.set_cookie(Cookie::new("fresh", "1"));
        context.set_cookie(Cookie::new("fresh", "2"));
        assert_eq!(context.incoming("fresh").unwrap().value(), "1");
        assert_eq!(context.outgoing("fresh").unwrap().value(), "2");
        assert!(context.sent("fresh").is_none());

        let mut context = CookieContext::from_incoming([Cookie::new("old", "client")]);
        context.set_cookie(Cookie::new("old", "server"));
        assert_eq!(context.incoming("old").unwrap().value(), "client");
        assert_eq!(context.sent("old").unwrap().value(), "client");
        assert_eq!(context.outgoing("old").unwrap().value(), "server");
        assert_eq!(context.incoming_cookies().count(), 1);
    }

    #[test]
    fn set_cookie_overwrites_in_place() {
        let mut context = CookieContext::new();
        context.set_cookie(Cookie::new("first", "1"));
        context.set_cookie(Cookie::new("second", "2"));
        context.set_cookie(Cookie::new("first", "3"));

        let outgoing = context
            .outgoing_cookies()
            .map(|cookie| (cookie.name(), cookie.value()))
            .collect::<Vec<_>>();
        assert_eq!(outgoing, [("first", "3"), ("second", "2")]);
        assert!(context.contains_outgoing("second"));
        assert!(!context.contains_outgoing("third"));
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn zero_expiry_offset_panics() {
        CookieContext::new().with_expiry_offset(Duration::ZERO);
    }
}
