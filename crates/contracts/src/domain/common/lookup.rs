use serde::{Deserialize, Serialize};

/// `{id, name}` record used to populate filter dropdowns.
///
/// Projects are served with `project_name` and printers with `title`;
/// both are accepted as the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: i64,
    #[serde(alias = "project_name", alias = "title")]
    pub name: String,
}

/// Reference lists a filter modal can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LookupKind {
    Brand,
    PartType,
    Location,
    BaseMaterial,
    Feature,
    Project,
}

impl LookupKind {
    /// REST resource serving this list.
    pub fn resource(self) -> &'static str {
        match self {
            LookupKind::Brand => "brands",
            LookupKind::PartType => "parttypes",
            LookupKind::Location => "locations",
            LookupKind::BaseMaterial => "materials",
            LookupKind::Feature => "material-features",
            LookupKind::Project => "projects",
        }
    }

    /// Type-scoping parameter sent along with the request, if any.
    pub fn scope(self) -> Option<(&'static str, &'static str)> {
        match self {
            LookupKind::BaseMaterial => Some(("is_generic", "true")),
            _ => None,
        }
    }
}
