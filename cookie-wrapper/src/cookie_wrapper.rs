use crate::{CookieContext, Error, Result};
use cookie::{
    time::{self, OffsetDateTime},
    Cookie,
};

/**
Read-after-write safe access to the cookies of a single conn.

A `CookieWrapper` is bound to exactly one [`CookieContext`] for its
whole lifetime. Reads prefer the outgoing collection, so once any code
path has written a cookie during this request, every later read of
that name sees the written value instead of the value the client
originally sent.

```
use trillium_cookie_wrapper::{cookie::Cookie, CookieContext, CookieWrapper};

let mut context = CookieContext::from_incoming([Cookie::new("counter", "")]);
let mut cookies = CookieWrapper::new(&mut context);

for letter in ["A", "B", "C", "D"] {
    let mut cookie = cookies.get("counter").cloned().unwrap();
    cookie.set_value(format!("{}{letter}", cookie.value()));
    cookies.set_cookie(cookie);
}

assert_eq!(cookies.get("counter").unwrap().value(), "ABCD");
```
*/
#[derive(Debug)]
pub struct CookieWrapper<'a> {
    context: &'a mut CookieContext,
}

impl<'a> CookieWrapper<'a> {
    /// binds a new cookie wrapper to this context
    pub fn new(context: &'a mut CookieContext) -> Self {
        Self { context }
    }

    /// the context this wrapper is bound to
    pub fn context(&self) -> &CookieContext {
        self.context
    }

    /**
    Returns the current cookie for this name.

    If a cookie of this name has been written during this request, the
    most recently written cookie is returned. Otherwise the cookie the
    client sent is returned, or `None` if there is neither.
    */
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        if self.context.contains_outgoing(name) {
            log::trace!("reading cookie {name} from outgoing");
            self.context.outgoing(name)
        } else {
            self.context.incoming(name)
        }
    }

    /**
    Sets a cookie under the provided name.

    A cookie's name is its identity, so this returns
    [`Error::NameMismatch`] without writing anything if `name` is not
    the cookie's own name. To rename a cookie, [`expire`](Self::expire)
    the old name and set a new cookie.

    ```
    use trillium_cookie_wrapper::{cookie::Cookie, CookieContext, CookieWrapper, Error};

    let mut context = CookieContext::new();
    let mut cookies = CookieWrapper::new(&mut context);

    assert!(cookies.set("theme", Cookie::new("theme", "dark")).is_ok());
    assert_eq!(
        cookies.set("colors", Cookie::new("theme", "light")),
        Err(Error::NameMismatch {
            target: "colors".into(),
            actual: "theme".into()
        })
    );
    assert_eq!(cookies.get("theme").unwrap().value(), "dark");
    ```
    */
    pub fn set(&mut self, name: &str, cookie: Cookie<'_>) -> Result<()> {
        if cookie.name() != name {
            return Err(Error::NameMismatch {
                target: name.to_string(),
                actual: cookie.name().to_string(),
            });
        }

        self.set_cookie(cookie);
        Ok(())
    }

    /// Queues this cookie for the response under its own name. See
    /// [`CookieContext::set_cookie`] for the effect on each collection.
    pub fn set_cookie(&mut self, cookie: Cookie<'_>) {
        log::trace!("setting cookie {}", cookie.name());
        self.context.set_cookie(cookie);
    }

    /**
    Instructs the client to delete the cookie of this name.

    This queues a cookie with an empty value and an expiration in the
    past (one day ago, unless configured otherwise with
    [`CookieWrapperHandler::with_expiry_offset`](crate::CookieWrapperHandler::with_expiry_offset)).
    Offsets reaching back before the unix epoch date the cookie at the
    epoch instead. The deletion only takes effect on the
    client. Within this request, [`get`](Self::get) returns the expired
    cookie.
    */
    pub fn expire(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let mut cookie = Cookie::new(name.to_string(), "");
        cookie.set_expires(self.removal_time());
        self.set_cookie(cookie);
        Ok(())
    }

    fn removal_time(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        time::Duration::try_from(self.context.expiry_offset())
            .ok()
            .and_then(|offset| now.checked_sub(offset))
            .filter(|removal_time| *removal_time > OffsetDateTime::UNIX_EPOCH)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl<'a> From<&'a mut CookieContext> for CookieWrapper<'a> {
    fn from(context: &'a mut CookieContext) -> Self {
        Self::new(context)
    }
}

impl<'a> TryFrom<Option<&'a mut CookieContext>> for CookieWrapper<'a> {
    type Error = Error;

    fn try_from(context: Option<&'a mut CookieContext>) -> Result<Self> {
        context.map(Self::new).ok_or(Error::MissingContext)
    }
}
