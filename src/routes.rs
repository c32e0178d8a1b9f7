use std::fmt;

const REPOSITORY_PREFIX: &str = "/repositories/";

/// Screens reachable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// The parameter captures the rest of the path, slashes included.
    Repository(String),
}

impl Route {
    pub fn repository(full_name: impl Into<String>) -> Self {
        Route::Repository(full_name.into())
    }

    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" || path.is_empty() {
            return Some(Route::Dashboard);
        }

        path.strip_prefix(REPOSITORY_PREFIX)
            .filter(|name| !name.is_empty())
            .map(|name| Route::Repository(name.to_string()))
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/"),
            Route::Repository(full_name) => write!(f, "{}{}", REPOSITORY_PREFIX, full_name),
        }
    }
}
