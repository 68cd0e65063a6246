use std::fmt::{self, Display, Formatter};

/// The values read back after both update strategies have run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexModel {
    /// the counter built by reading the request cookies directly
    pub bad_value: String,
    /// the counter built through the cookie wrapper
    pub good_value: String,
}

impl Display for IndexModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "bad cookie: {}", self.bad_value)?;
        writeln!(f, "good cookie: {}", self.good_value)
    }
}
