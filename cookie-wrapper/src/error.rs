use thiserror::Error;

/// Errors returned by [`CookieWrapper`](crate::CookieWrapper) and
/// [`CookieWrapperConnExt`](crate::CookieWrapperConnExt). Every
/// variant describes an invalid argument supplied by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// a cookie wrapper was requested without a cookie context, most
    /// likely because the
    /// [`CookieWrapperHandler`](crate::CookieWrapperHandler) has not
    /// run on this conn
    #[error("no cookie context available, was CookieWrapperHandler run before this handler?")]
    MissingContext,

    /// a cookie was set under a name other than its own. Renaming a
    /// cookie requires expiring the old name and setting a new cookie
    #[error("cookie {actual} cannot be renamed to {target}")]
    NameMismatch {
        /// the name the cookie was addressed by
        target: String,
        /// the cookie's own name
        actual: String,
    },

    /// an empty cookie name was provided
    #[error("cookie name cannot be empty")]
    EmptyName,
}

/// this crate's result type
pub type Result<T, E = Error> = std::result::Result<T, E>;
