use bevy::prelude::*;

/// Value of an editable property, tagged with the widget that edits it.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Toggle(bool),
    Color(Color),
}

/// Widget used by the inspector for an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    Toggle,
    Color,
}

impl PropertyValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            PropertyValue::Text(_) => OptionKind::Text,
            PropertyValue::Toggle(_) => OptionKind::Toggle,
            PropertyValue::Color(_) => OptionKind::Color,
        }
    }
}

/// One row in the inspector.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectOption {
    /// Label shown to the user.
    pub label: String,
    /// Key of the property in level data, also used to write it back.
    pub key: &'static str,
    /// Current value.
    pub value: PropertyValue,
}

impl ObjectOption {
    pub fn new(label: impl Into<String>, key: &'static str, value: PropertyValue) -> Self {
        Self {
            label: label.into(),
            key,
            value,
        }
    }

    pub fn kind(&self) -> OptionKind {
        self.value.kind()
    }
}

/// Everything the inspector shows for one object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSettings {
    pub name: String,
    pub options: Vec<ObjectOption>,
}

impl ObjectSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn option(&self, key: &str) -> Option<&ObjectOption> {
        self.options.iter().find(|option| option.key == key)
    }
}
