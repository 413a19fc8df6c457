use std::fmt;

/// One named counter of accumulated points.
///
/// A team has no identity beyond its name; renaming moves the entry to a new
/// key in the [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    pub name: String,
    pub points: u64,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
        }
    }

    pub fn with_points(name: impl Into<String>, points: u64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} points", self.name, self.points)
    }
}
