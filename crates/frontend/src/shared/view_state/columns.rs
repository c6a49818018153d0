use super::error::{Result, ViewStateError};

/// One column of a list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub label: &'static str,
    pub default_visible: bool,
}

impl ColumnDef {
    pub const fn new(id: &'static str, label: &'static str, default_visible: bool) -> Self {
        Self {
            id,
            label,
            default_visible,
        }
    }
}

/// Ordered list of visible column ids, always drawn from the view's universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: Vec<String>,
}

impl ColumnVisibility {
    pub fn defaults(universe: &[ColumnDef]) -> Self {
        Self {
            visible: universe
                .iter()
                .filter(|c| c.default_visible)
                .map(|c| c.id.to_string())
                .collect(),
        }
    }

    /// Accepts `ids` in the given order. Duplicates collapse to their first
    /// occurrence; an id outside the universe rejects the whole list.
    pub fn validated(universe: &[ColumnDef], ids: Vec<String>) -> Result<Self> {
        let mut visible: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !universe.iter().any(|c| c.id == id) {
                return Err(ViewStateError::UnknownColumn(id));
            }
            if !visible.contains(&id) {
                visible.push(id);
            }
        }
        Ok(Self { visible })
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|v| v == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.visible
    }

    /// Visible columns, resolved against the universe, in display order.
    pub fn resolve(&self, universe: &[ColumnDef]) -> Vec<ColumnDef> {
        self.visible
            .iter()
            .filter_map(|id| universe.iter().find(|c| c.id == id).copied())
            .collect()
    }

    /// Hides a visible column, or shows a hidden one at its universe position
    /// relative to the other visible columns.
    pub fn toggled(&self, universe: &[ColumnDef], id: &str) -> Result<Self> {
        let Some(pos_in_universe) = universe.iter().position(|c| c.id == id) else {
            return Err(ViewStateError::UnknownColumn(id.to_string()));
        };

        let mut visible = self.visible.clone();
        if let Some(pos) = visible.iter().position(|v| v == id) {
            visible.remove(pos);
            return Ok(Self { visible });
        }

        let insert_at = visible
            .iter()
            .position(|v| {
                universe
                    .iter()
                    .position(|c| c.id == v)
                    .is_some_and(|p| p > pos_in_universe)
            })
            .unwrap_or(visible.len());
        visible.insert(insert_at, id.to_string());
        Ok(Self { visible })
    }
}
