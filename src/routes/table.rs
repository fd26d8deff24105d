use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::views::{self, DashboardView, View};

/// Builds a lazily resolved component.
pub type ViewFactory = fn() -> Box<dyn View>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    NotFound(String),
    #[error("path '{0}' is declared twice")]
    DuplicatePath(String),
    #[error("route name '{0}' is declared twice")]
    DuplicateName(String),
}

/// How a route gets hold of its view.
pub enum Component {
    Eager(Box<dyn View>),
    Lazy {
        factory: ViewFactory,
        loaded: OnceLock<Box<dyn View>>,
    },
}

impl Component {
    pub fn eager(view: impl View + 'static) -> Self {
        Component::Eager(Box::new(view))
    }

    pub fn lazy(factory: ViewFactory) -> Self {
        Component::Lazy {
            factory,
            loaded: OnceLock::new(),
        }
    }

    /// The view, building it first if this is a lazy component seen for the first time.
    pub fn resolve(&self) -> &dyn View {
        match self {
            Component::Eager(view) => view.as_ref(),
            Component::Lazy { factory, loaded } => loaded
                .get_or_init(|| {
                    let view = factory();
                    debug!("Loaded component {}", view.name());
                    view
                })
                .as_ref(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            Component::Eager(_) => true,
            Component::Lazy { loaded, .. } => loaded.get().is_some(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Component::Lazy { .. })
    }
}

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    component: Component,
}

impl Route {
    pub fn new(path: &'static str, name: &'static str, component: Component) -> Self {
        Route {
            path,
            name,
            component,
        }
    }

    pub fn component(&self) -> &dyn View {
        self.component.resolve()
    }

    pub fn is_loaded(&self) -> bool {
        self.component.is_loaded()
    }

    pub fn is_lazy(&self) -> bool {
        self.component.is_lazy()
    }
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The application's routes.
    pub fn new() -> Self {
        RouteTable {
            routes: vec![
                Route::new("/", "dashboard", Component::eager(DashboardView)),
                Route::new("/assets", "assets", Component::lazy(views::assets_view)),
                Route::new(
                    "/assignments",
                    "assignments",
                    Component::lazy(views::assignments_view),
                ),
                Route::new(
                    "/maintenance",
                    "maintenance",
                    Component::lazy(views::maintenance_view),
                ),
                Route::new(
                    "/categories",
                    "categories",
                    Component::lazy(views::categories_view),
                ),
                Route::new(
                    "/locations",
                    "locations",
                    Component::lazy(views::locations_view),
                ),
                Route::new("/vendors", "vendors", Component::lazy(views::vendors_view)),
                Route::new("/users", "users", Component::lazy(views::users_view)),
                Route::new("/reports", "reports", Component::lazy(views::reports_view)),
                Route::new("/history", "history", Component::lazy(views::history_view)),
            ],
        }
    }

    /// A custom table. Paths and names must be unique.
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !paths.insert(normalize(route.path)) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
            if !names.insert(route.name) {
                return Err(RouteError::DuplicateName(route.name.to_string()));
            }
        }
        Ok(RouteTable { routes })
    }

    /// Finds the route for `path`; `/assets/` matches `/assets`.
    pub fn resolve(&self, path: &str) -> Result<&Route, RouteError> {
        let wanted = normalize(path);
        self.routes
            .iter()
            .find(|route| normalize(route.path) == wanted)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
