//! Form field value objects

/// Input kind of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select { options: Vec<String> },
    /// Path of a file to attach
    File,
    Multiline,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the select options
    Choice(usize),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single labeled form field with its current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl FormField {
    fn with_kind(name: &str, label: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::Select { .. } => FieldValue::Choice(0),
            _ => FieldValue::default(),
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Email)
    }

    pub fn tel(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Tel)
    }

    /// Create a select field; the first option starts selected
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::with_kind(name, label, FieldKind::Select { options })
    }

    pub fn file(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::File)
    }

    pub fn multiline(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Multiline)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select { .. })
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(&self) -> bool {
        !self.is_select()
    }

    /// Get the text value (empty for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Get the selected option of a select field
    pub fn selected_option(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (FieldKind::Select { options }, FieldValue::Choice(i)) => {
                options.get(*i).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Step a select field to the next or previous option (wraps around)
    pub fn cycle_option(&mut self, forward: bool) {
        let FieldKind::Select { options } = &self.kind else {
            return;
        };
        let count = options.len();
        if count == 0 {
            return;
        }
        if let FieldValue::Choice(i) = &mut self.value {
            *i = if forward {
                (*i + 1) % count
            } else {
                (*i + count - 1) % count
            };
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(_) => self
                .selected_option()
                .map(|o| format!("{o} ▾"))
                .unwrap_or_default(),
        }
    }
}
