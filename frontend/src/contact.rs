use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Website,
    Goal,
}

impl Field {
    /// Maps an input's `name` attribute back to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "website" => Some(Field::Website),
            "goal" => Some(Field::Goal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub website: String,
    pub goal: String,
}

/// What the form would send to a backend, if there were one.
#[derive(Debug, Serialize)]
pub struct LeadRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'a str>,
    pub goal: &'a str,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Website => self.website = value,
            Field::Goal => self.goal = value,
        }
    }

    /// Returns the first problem with the form, if any.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please tell me your name.");
        }
        let email = self.email.trim();
        let looks_like_email = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'))
            .unwrap_or(false);
        if !looks_like_email {
            return Err("Please enter a valid email address.");
        }
        if self.goal.trim().is_empty() {
            return Err("Please share your main SEO goal.");
        }
        Ok(())
    }

    pub fn lead(&self) -> LeadRequest<'_> {
        let website = self.website.trim();
        LeadRequest {
            name: self.name.trim(),
            email: self.email.trim(),
            website: (!website.is_empty()).then_some(website),
            goal: self.goal.trim(),
        }
    }

    /// JSON body of the simulated submission.
    pub fn payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lead())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "John Smith".to_string());
        form.set(Field::Email, " john@company.com ".to_string());
        form.set(Field::Goal, "Rank for local keywords".to_string());
        form
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::from_name("website"), Some(Field::Website));
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn test_validation() {
        assert!(filled().validate().is_ok());
        assert!(ContactForm::default().validate().is_err());

        let mut form = filled();
        form.set(Field::Email, "john@localhost".to_string());
        assert_eq!(form.validate(), Err("Please enter a valid email address."));

        let mut form = filled();
        form.set(Field::Goal, "   ".to_string());
        assert_eq!(form.validate(), Err("Please share your main SEO goal."));
    }

    #[test]
    fn test_payload_omits_empty_website() {
        let json: serde_json::Value = serde_json::from_str(&filled().payload().unwrap()).unwrap();
        assert_eq!(json["email"], "john@company.com");
        assert!(json.get("website").is_none());

        let mut form = filled();
        form.set(Field::Website, "https://example.com".to_string());
        let json: serde_json::Value = serde_json::from_str(&form.payload().unwrap()).unwrap();
        assert_eq!(json["website"], "https://example.com");
    }
}
