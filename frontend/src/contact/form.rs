use thiserror::Error;

/// Services a visitor can ask for on the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    BrandStrategy,
    BrandIdentity,
    VisualIdentitySystems,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::BrandStrategy,
        Service::BrandIdentity,
        Service::VisualIdentitySystems,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::BrandStrategy => "Brand Strategy",
            Service::BrandIdentity => "Brand Identity",
            Service::VisualIdentitySystems => "Visual Identity Systems",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServiceSelection {
    brand_strategy: bool,
    brand_identity: bool,
    visual_identity_systems: bool,
}

impl ServiceSelection {
    fn slot(&mut self, service: Service) -> &mut bool {
        match service {
            Service::BrandStrategy => &mut self.brand_strategy,
            Service::BrandIdentity => &mut self.brand_identity,
            Service::VisualIdentitySystems => &mut self.visual_identity_systems,
        }
    }

    pub fn toggle(&mut self, service: Service) {
        let slot = self.slot(service);
        *slot = !*slot;
    }

    pub fn is_selected(&self, service: Service) -> bool {
        match service {
            Service::BrandStrategy => self.brand_strategy,
            Service::BrandIdentity => self.brand_identity,
            Service::VisualIdentitySystems => self.visual_identity_systems,
        }
    }

    pub fn any(&self) -> bool {
        Service::ALL.iter().any(|s| self.is_selected(*s))
    }

    pub fn selected(&self) -> impl Iterator<Item = Service> + '_ {
        Service::ALL.into_iter().filter(|s| self.is_selected(*s))
    }
}

/// Reasons a contact form is not sent. The `Display` text is what the
/// visitor sees in the alert.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please select at least one service")]
    NoServiceSelected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Location,
    Company,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub location: String,
    pub company: String,
    pub services: ServiceSelection,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Location => &mut self.location,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn toggle_service(&mut self, service: Service) {
        self.services.toggle(service);
    }

    /// Name and email must be non-blank and at least one service chosen.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(FormError::MissingRequired);
        }
        if !self.services.any() {
            return Err(FormError::NoServiceSelected);
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body. Each selected service is sent
    /// as its own `services` pair.
    pub fn to_form_body(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = vec![
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("location", self.location.trim()),
            ("company", self.company.trim()),
        ];
        pairs.extend(self.services.selected().map(|s| ("services", s.label())));
        pairs.push(("message", self.message.as_str()));

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada Lovelace".into());
        form.set(Field::Email, "ada@example.com".into());
        form.toggle_service(Service::BrandIdentity);
        form
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = filled();
        form.set(Field::Name, "   ".into());
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut form = filled();
        form.set(Field::Email, String::new());
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn missing_fields_are_reported_before_services() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
    }

    #[test]
    fn zero_services_is_rejected() {
        let mut form = filled();
        form.toggle_service(Service::BrandIdentity);
        assert_eq!(form.validate(), Err(FormError::NoServiceSelected));
    }

    #[test]
    fn alert_text_matches_error() {
        assert_eq!(FormError::MissingRequired.to_string(), "Please fill in all required fields");
        assert_eq!(FormError::NoServiceSelected.to_string(), "Please select at least one service");
    }

    #[test]
    fn each_checkbox_toggles_its_own_service() {
        let mut selection = ServiceSelection::default();
        selection.toggle(Service::VisualIdentitySystems);
        assert!(selection.is_selected(Service::VisualIdentitySystems));
        assert!(!selection.is_selected(Service::BrandIdentity));
        selection.toggle(Service::VisualIdentitySystems);
        assert!(!selection.any());
    }

    #[test]
    fn form_body_is_url_encoded_with_services() {
        let mut form = filled();
        form.toggle_service(Service::BrandStrategy);
        form.set(Field::Message, "New brand & logo".into());
        let body = form.to_form_body();
        assert_eq!(
            body,
            "name=Ada%20Lovelace&email=ada%40example.com&location=&company=\
             &services=Brand%20Strategy&services=Brand%20Identity\
             &message=New%20brand%20%26%20logo"
        );
    }

    #[test]
    fn default_form_is_cleared() {
        let cleared = ContactForm::default();
        assert!(cleared.name.is_empty() && cleared.message.is_empty());
        assert!(!cleared.services.any());
    }
}
