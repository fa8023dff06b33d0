/// Views the application can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Vocabulary,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Vocabulary => "Vocabulary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub view: ViewId,
}

pub const ROUTES: &[Route] = &[Route {
    name: "Index",
    path: "/",
    view: ViewId::Vocabulary,
}];

/// Static path to view mapping. No parameters, guards or nesting.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Find the route for a path. Hash-history forms (`#/`, `/#/`) and the
    /// empty path are treated like their plain path.
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.path == path)
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    let path = path.strip_prefix('/').map_or(path, |rest| {
        if rest.starts_with('#') { rest } else { path }
    });
    let path = path.strip_prefix('#').unwrap_or(path);

    if path.is_empty() { "/" } else { path }
}
