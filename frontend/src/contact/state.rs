use std::rc::Rc;

use yew::prelude::*;

use crate::contact::form::{ContactForm, Field, Service};

/// Everything the contact form view renders from: the fields, whether a
/// request is in flight and whether the success banner is up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub sending: bool,
    pub show_success: bool,
}

pub enum ContactFormAction {
    Set(Field, String),
    ToggleService(Service),
    /// Starts a submission. Ignored while one is in flight or when the form
    /// does not validate.
    Submit,
    Succeeded,
    Failed,
    HideBanner,
}

impl ContactFormState {
    /// Next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: ContactFormAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            ContactFormAction::Set(field, value) => next.form.set(field, value),
            ContactFormAction::ToggleService(service) => next.form.toggle_service(service),
            ContactFormAction::Submit => {
                if self.sending || self.form.validate().is_err() {
                    return None;
                }
                next.sending = true;
                next.show_success = false;
            }
            ContactFormAction::Succeeded => {
                next.form = ContactForm::default();
                next.sending = false;
                next.show_success = true;
            }
            ContactFormAction::Failed => next.sending = false,
            ContactFormAction::HideBanner => next.show_success = false,
        }
        (next != *self).then_some(next)
    }
}

impl Reducible for ContactFormState {
    type Action = ContactFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_to_send() -> ContactFormState {
        let mut state = ContactFormState::default();
        for action in [
            ContactFormAction::Set(Field::Name, "Ada Lovelace".into()),
            ContactFormAction::Set(Field::Email, "ada@example.com".into()),
            ContactFormAction::Set(Field::Message, "Rebrand please".into()),
            ContactFormAction::ToggleService(Service::BrandStrategy),
        ] {
            state = state.apply(action).unwrap_or(state);
        }
        state
    }

    fn step(state: &ContactFormState, action: ContactFormAction) -> ContactFormState {
        state.apply(action).unwrap_or_else(|| state.clone())
    }

    #[test]
    fn submit_marks_the_form_as_sending() {
        let state = step(&ready_to_send(), ContactFormAction::Submit);
        assert!(state.sending);
        assert!(!state.show_success);
        assert_eq!(state.form.name, "Ada Lovelace");
    }

    #[test]
    fn success_clears_the_form_and_raises_the_banner() {
        let sending = step(&ready_to_send(), ContactFormAction::Submit);
        let done = step(&sending, ContactFormAction::Succeeded);
        assert_eq!(done.form, ContactForm::default());
        assert!(done.show_success);
        assert!(!done.sending);
    }

    #[test]
    fn banner_hides_again() {
        let sending = step(&ready_to_send(), ContactFormAction::Submit);
        let done = step(&sending, ContactFormAction::Succeeded);
        let hidden = step(&done, ContactFormAction::HideBanner);
        assert!(!hidden.show_success);
    }

    #[test]
    fn failure_keeps_what_the_visitor_typed() {
        let before = ready_to_send();
        let sending = step(&before, ContactFormAction::Submit);
        let failed = step(&sending, ContactFormAction::Failed);
        assert_eq!(failed.form, before.form);
        assert!(!failed.sending);
        assert!(!failed.show_success);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let sending = step(&ready_to_send(), ContactFormAction::Submit);
        assert!(sending.apply(ContactFormAction::Submit).is_none());
    }

    #[test]
    fn invalid_form_does_not_start_sending() {
        assert!(ContactFormState::default().apply(ContactFormAction::Submit).is_none());
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let state = Rc::new(ContactFormState::default());
        let next = state.clone().reduce(ContactFormAction::HideBanner);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
