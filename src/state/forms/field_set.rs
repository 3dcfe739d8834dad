//! Ordered field sets for the page forms

use super::field::FormField;
use crate::content::{COUNTRIES, INDUSTRIES};

/// An ordered sequence of labeled fields
#[derive(Debug, Clone)]
pub struct FormFieldSet {
    fields: Vec<FormField>,
}

impl FormFieldSet {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Fields of the "Contact our team" dialog
    pub fn contact() -> Self {
        Self::new(vec![
            FormField::text("first-name", "First name"),
            FormField::text("last-name", "Last name"),
            FormField::email("email", "Email"),
            FormField::text("company", "Company"),
            FormField::select("industry", "Industry", INDUSTRIES),
            FormField::select("country", "Country", COUNTRIES),
            FormField::tel("phone-number", "Phone number"),
            FormField::multiline("message", "Message"),
        ])
    }

    /// Fields of the inline careers form
    pub fn careers() -> Self {
        Self::new(vec![
            FormField::text("first-name", "First name"),
            FormField::text("last-name", "Last name"),
            FormField::email("email", "Email"),
            FormField::select("country", "Country", COUNTRIES),
            FormField::tel("phone-number", "Phone number"),
            FormField::file("file-upload", "Resume"),
        ])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Index of the field with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(set: &FormFieldSet) -> Vec<&str> {
        set.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_contact_field_order() {
        let set = FormFieldSet::contact();
        assert_eq!(
            names(&set),
            vec![
                "first-name",
                "last-name",
                "email",
                "company",
                "industry",
                "country",
                "phone-number",
                "message"
            ]
        );
    }

    #[test]
    fn test_careers_field_order() {
        let set = FormFieldSet::careers();
        assert_eq!(
            names(&set),
            vec![
                "first-name",
                "last-name",
                "email",
                "country",
                "phone-number",
                "file-upload"
            ]
        );
    }

    #[test]
    fn test_industry_options() {
        let set = FormFieldSet::contact();
        let industry = set.get(set.position("industry").unwrap()).unwrap();
        assert_eq!(industry.selected_option(), Some("Healthcare"));
    }

    #[test]
    fn test_only_message_is_multiline() {
        let set = FormFieldSet::contact();
        let multiline: Vec<_> = set
            .iter()
            .filter(|f| f.is_multiline())
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(multiline, vec!["message"]);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut set = FormFieldSet::careers();
        assert!(set.get(99).is_none());
        assert!(set.get_mut(99).is_none());
        assert!(!set.is_empty());
    }
}
