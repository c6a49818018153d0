/// A fixed `(value, label)` pair mirrored from a backend model's `choices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Finds the label for a stored value, falling back to the value itself.
pub fn label_for(choices: &[Choice], value: &str) -> String {
    choices
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Color families shared by materials and quick-add spools.
pub const COLOR_FAMILIES: &[Choice] = &[
    Choice::new("red", "Red"),
    Choice::new("orange", "Orange"),
    Choice::new("yellow", "Yellow"),
    Choice::new("green", "Green"),
    Choice::new("blue", "Blue"),
    Choice::new("purple", "Purple"),
    Choice::new("pink", "Pink"),
    Choice::new("brown", "Brown"),
    Choice::new("black", "Black"),
    Choice::new("white", "White"),
    Choice::new("gray", "Gray"),
    Choice::new("clear", "Clear/Natural"),
    Choice::new("multi", "Multi-Color"),
];
