use super::matcher::PathPattern;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque icon symbol, e.g. `"dashboard"`. Rendering is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Metadata for one navigable path of the back-office.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub path: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sidebar: bool,
    #[serde(default)]
    pub sidebar_childrens: Option<Vec<String>>,
    #[serde(default)]
    pub icon: Option<Icon>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RouteMeta {
    pub fn new(path: &str, parent: Option<&str>, label: &str, sidebar: bool) -> Self {
        Self {
            path: path.to_string(),
            parent: parent.map(str::to_string),
            label: label.to_string(),
            sidebar,
            sidebar_childrens: None,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(Icon::new(icon));
        self
    }

    pub fn with_sidebar_childrens(mut self, children: &[&str]) -> Self {
        self.sidebar_childrens = Some(children.iter().map(|child| child.to_string()).collect());
        self
    }

    fn normalized(mut self) -> Option<Self> {
        self.path = self.path.trim().to_string();
        if self.path.is_empty() {
            log::warn!("routes: dropping route '{}' without a path", self.label);
            return None;
        }

        self.parent = self
            .parent
            .map(|parent| parent.trim().to_string())
            .filter(|parent| !parent.is_empty());
        self.sidebar_childrens = self
            .sidebar_childrens
            .map(|children| {
                children
                    .into_iter()
                    .map(|child| child.trim().to_string())
                    .filter(|child| !child.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|children| !children.is_empty());
        self.icon = self.icon.filter(|icon| !icon.0.trim().is_empty());
        Some(self)
    }
}

/// Ordered route metadata, consulted by the breadcrumb and sidebar resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RouteMeta>", into = "Vec<RouteMeta>")]
pub struct RouteTable {
    routes: Vec<RouteMeta>,
}

impl RouteTable {
    /// Builds a table, substituting defaults for blank optional fields and
    /// dropping routes without a path.
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .filter_map(RouteMeta::normalized)
                .collect(),
        }
    }

    pub fn routes(&self) -> &[RouteMeta] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteMeta> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Exact path lookup, used for parent and sidebar references.
    pub fn get(&self, path: &str) -> Option<&RouteMeta> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// First route, in table order, whose pattern matches a concrete path.
    pub fn find_matching(&self, current_path: &str) -> Option<&RouteMeta> {
        self.routes
            .iter()
            .find(|route| PathPattern::matches(&route.path, current_path))
    }
}

impl From<Vec<RouteMeta>> for RouteTable {
    fn from(routes: Vec<RouteMeta>) -> Self {
        Self::new(routes)
    }
}

impl From<RouteTable> for Vec<RouteMeta> {
    fn from(table: RouteTable) -> Self {
        table.routes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Only set for sidebar routes; other crumbs render as plain text.
    pub path: Option<String>,
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Leaf {
        path: String,
        label: String,
        icon: Option<Icon>,
    },
    Group {
        path: String,
        label: String,
        icon: Option<Icon>,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn leaf(route: &RouteMeta) -> Self {
        MenuEntry::Leaf {
            path: route.path.clone(),
            label: route.label.clone(),
            icon: route.icon.clone(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            MenuEntry::Leaf { path, .. } | MenuEntry::Group { path, .. } => path,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Leaf { label, .. } | MenuEntry::Group { label, .. } => label,
        }
    }

    pub fn children(&self) -> &[MenuEntry] {
        match self {
            MenuEntry::Leaf { .. } => &[],
            MenuEntry::Group { children, .. } => children,
        }
    }
}
