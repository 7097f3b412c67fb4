//! Page view state and its reducer.
//!
//! All interactive state lives in one serializable [`ViewState`] record
//! owned by the top-level `App`. Components never mutate fields directly;
//! they dispatch an [`Action`] and [`ViewState::apply`] performs the
//! transition. Keeping the transitions pure means every interaction on the
//! page is testable without a browser.

use serde::{Deserialize, Serialize};

use crate::content;

/// Monthly base price for the calculator, in dollars.
pub const BASE_PRICE: u32 = 49;
/// Added per seat.
pub const PER_USER_RATE: u32 = 5;
/// Added per campaign per month.
pub const PER_CAMPAIGN_RATE: u32 = 10;

/// Slider bounds. Enforced by the range controls, not by the reducer.
pub const USERS_RANGE: (u32, u32) = (1, 100);
pub const CAMPAIGNS_RANGE: (u32, u32) = (1, 50);

pub const ERR_NAME: &str = "Name is required";
pub const ERR_EMAIL: &str = "Email is required";
pub const ERR_MESSAGE: &str = "Message is required";

/// Monthly price for a given team size and campaign volume.
pub fn calculate_price(users: u32, campaigns: u32) -> u32 {
    BASE_PRICE + users * PER_USER_RATE + campaigns * PER_CAMPAIGN_RATE
}

/// The three contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Raw contact form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// A field is invalid when it is empty after trimming whitespace.
    pub fn validate(&self) -> FormErrors {
        let required = |value: &str, msg: &str| {
            if value.trim().is_empty() {
                Some(msg.to_string())
            } else {
                None
            }
        };
        FormErrors {
            name: required(&self.name, ERR_NAME),
            email: required(&self.email, ERR_EMAIL),
            message: required(&self.message, ERR_MESSAGE),
        }
    }
}

/// Per-field validation messages, recomputed on each submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Pricing calculator slider values.
///
/// The range inputs clamp to [`USERS_RANGE`] and [`CAMPAIGNS_RANGE`]; the
/// reducer stores whatever the control reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub users: u32,
    pub campaigns: u32,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            users: 10,
            campaigns: 5,
        }
    }
}

impl CalculatorInputs {
    pub fn price(&self) -> u32 {
        calculate_price(self.users, self.campaigns)
    }
}

/// An accepted contact submission.
///
/// Nothing is transmitted anywhere: this is the hand-off point where a
/// real submission backend would take over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Every interactive state on the page, as one serializable record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Compact-layout menu overlay
    pub menu_open: bool,
    /// Always within `[0, TESTIMONIALS.len())`
    pub active_testimonial: usize,
    /// At most one FAQ entry is expanded
    pub expanded_faq: Option<usize>,
    pub contact_open: bool,
    pub calculator_open: bool,
    pub contact_form: ContactForm,
    pub form_errors: FormErrors,
    pub calculator: CalculatorInputs,
}

/// Events the page can dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ToggleMenu,
    /// Fired by the 5-second rotation interval; wraps modulo the
    /// testimonial count.
    AdvanceTestimonial,
    /// Fired by a dot indicator. Leaves the rotation interval's cadence
    /// untouched.
    SelectTestimonial(usize),
    /// Expands the given entry, or collapses it if it was already open.
    ToggleFaq(usize),
    OpenContact,
    CloseContact,
    /// Sets a contact field. Performs no validation.
    EditField(Field, String),
    SubmitContact,
    OpenCalculator,
    CloseCalculator,
    SetUsers(u32),
    SetCampaigns(u32),
}

impl ViewState {
    /// Applies one transition. Returns `Some` only when a contact
    /// submission passes validation; the caller surfaces the
    /// acknowledgment.
    pub fn apply(&mut self, action: Action) -> Option<Submission> {
        match action {
            Action::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            Action::AdvanceTestimonial => {
                self.active_testimonial = (self.active_testimonial + 1) % content::TESTIMONIALS.len();
            }
            Action::SelectTestimonial(index) => {
                if index < content::TESTIMONIALS.len() {
                    self.active_testimonial = index;
                }
            }
            Action::ToggleFaq(index) => {
                if index < content::FAQS.len() {
                    self.expanded_faq = if self.expanded_faq == Some(index) {
                        None
                    } else {
                        Some(index)
                    };
                }
            }
            Action::OpenContact => {
                self.contact_open = true;
            }
            Action::CloseContact => {
                self.contact_open = false;
            }
            Action::EditField(field, value) => {
                match field {
                    Field::Name => self.contact_form.name = value,
                    Field::Email => self.contact_form.email = value,
                    Field::Message => self.contact_form.message = value,
                }
            }
            Action::SubmitContact => {
                let errors = self.contact_form.validate();
                if errors.is_empty() {
                    let form = std::mem::take(&mut self.contact_form);
                    self.form_errors = FormErrors::default();
                    self.contact_open = false;
                    return Some(Submission {
                        name: form.name,
                        email: form.email,
                        message: form.message,
                    });
                }
                self.form_errors = errors;
            }
            Action::OpenCalculator => {
                self.calculator_open = true;
            }
            Action::CloseCalculator => {
                self.calculator_open = false;
            }
            Action::SetUsers(users) => {
                self.calculator.users = users;
            }
            Action::SetCampaigns(campaigns) => {
                self.calculator.campaigns = campaigns;
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Leptos glue: the shared signal the sections dispatch through.
// ---------------------------------------------------------------------------

use leptos::prelude::*;

/// Shared handle to the page's [`ViewState`] signal.
#[derive(Clone, Copy)]
pub struct PageState(pub RwSignal<ViewState>);

impl PageState {
    /// Runs one reducer transition against the live state.
    pub fn dispatch(self, action: Action) -> Option<Submission> {
        self.0.try_update(|state| state.apply(action)).flatten()
    }
}

/// Creates the page state and puts it into context. Called once from `App`.
pub fn provide_page_state() -> PageState {
    let state = PageState(RwSignal::new(ViewState::default()));
    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn error_count(errors: &FormErrors) -> usize {
        [&errors.name, &errors.email, &errors.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    #[test]
    fn price_formula_matches_published_rates() {
        assert_eq!(calculate_price(10, 5), 149);
        assert_eq!(calculate_price(1, 1), 64);
        assert_eq!(calculate_price(100, 50), 1049);
    }

    #[test]
    fn default_calculator_inputs() {
        let inputs = CalculatorInputs::default();
        assert_eq!((inputs.users, inputs.campaigns), (10, 5));
        assert_eq!(inputs.price(), 149);
    }

    #[test]
    fn advance_wraps_around_the_carousel() {
        let mut state = ViewState::default();
        state.apply(Action::AdvanceTestimonial);
        assert_eq!(state.active_testimonial, 1);
        state.apply(Action::AdvanceTestimonial);
        assert_eq!(state.active_testimonial, 2);
        state.apply(Action::AdvanceTestimonial);
        assert_eq!(state.active_testimonial, 0);
    }

    #[test]
    fn dot_selects_exactly_that_testimonial() {
        let mut state = ViewState::default();
        for i in 0..content::TESTIMONIALS.len() {
            state.apply(Action::SelectTestimonial(i));
            assert_eq!(state.active_testimonial, i);
        }
    }

    #[test]
    fn out_of_range_dot_is_ignored() {
        let mut state = ViewState::default();
        state.apply(Action::SelectTestimonial(1));
        state.apply(Action::SelectTestimonial(99));
        assert_eq!(state.active_testimonial, 1);
    }

    #[test]
    fn manual_select_does_not_reset_cadence() {
        // The interval keeps firing on its own schedule after a manual
        // override; the next tick advances from the selected index.
        let mut state = ViewState::default();
        state.apply(Action::SelectTestimonial(2));
        state.apply(Action::AdvanceTestimonial);
        assert_eq!(state.active_testimonial, 0);
    }

    #[test]
    fn faq_toggle_twice_collapses() {
        let mut state = ViewState::default();
        state.apply(Action::ToggleFaq(1));
        assert_eq!(state.expanded_faq, Some(1));
        state.apply(Action::ToggleFaq(1));
        assert_eq!(state.expanded_faq, None);
    }

    #[test]
    fn faq_switch_replaces_the_open_entry() {
        let mut state = ViewState::default();
        state.apply(Action::ToggleFaq(0));
        state.apply(Action::ToggleFaq(3));
        assert_eq!(state.expanded_faq, Some(3));
    }

    #[test]
    fn faq_out_of_range_is_ignored() {
        let mut state = ViewState::default();
        state.apply(Action::ToggleFaq(2));
        state.apply(Action::ToggleFaq(42));
        assert_eq!(state.expanded_faq, Some(2));
    }

    #[test]
    fn blank_submit_yields_three_errors_and_keeps_modal_open() {
        let mut state = ViewState::default();
        state.apply(Action::OpenContact);
        let accepted = state.apply(Action::SubmitContact);
        assert_eq!(accepted, None);
        assert_eq!(error_count(&state.form_errors), 3);
        assert!(state.contact_open);
    }

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let mut state = ViewState::default();
        state.apply(Action::OpenContact);
        state.apply(Action::EditField(Field::Name, "   ".into()));
        state.apply(Action::EditField(Field::Email, "jane@x.com".into()));
        let accepted = state.apply(Action::SubmitContact);
        assert_eq!(accepted, None);
        assert_eq!(state.form_errors.name.as_deref(), Some(ERR_NAME));
        assert_eq!(state.form_errors.email, None);
        assert_eq!(state.form_errors.message.as_deref(), Some(ERR_MESSAGE));
        // Entered values survive a failed submit.
        assert_eq!(state.contact_form.email, "jane@x.com");
        assert!(state.contact_open);
    }

    #[test]
    fn valid_submit_accepts_resets_and_closes() {
        let mut state = ViewState::default();
        state.apply(Action::OpenContact);
        state.apply(Action::EditField(Field::Name, "Jane".into()));
        state.apply(Action::EditField(Field::Email, "jane@x.com".into()));
        state.apply(Action::EditField(Field::Message, "Hi".into()));
        let accepted = state.apply(Action::SubmitContact);
        assert_eq!(
            accepted,
            Some(Submission {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "Hi".into(),
            })
        );
        assert_eq!(state.contact_form, ContactForm::default());
        assert!(state.form_errors.is_empty());
        assert!(!state.contact_open);
    }

    #[test]
    fn editing_a_field_performs_no_validation() {
        let mut state = ViewState::default();
        state.apply(Action::SubmitContact);
        assert_eq!(error_count(&state.form_errors), 3);
        // Fixing a field does not clear its error until the next submit.
        state.apply(Action::EditField(Field::Name, "Jane".into()));
        assert_eq!(error_count(&state.form_errors), 3);
    }

    #[test]
    fn menu_toggle_flips_both_ways() {
        let mut state = ViewState::default();
        state.apply(Action::ToggleMenu);
        assert!(state.menu_open);
        state.apply(Action::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn calculator_modal_handoff_to_contact() {
        // "Get Started with This Plan" closes the calculator and opens the
        // contact modal.
        let mut state = ViewState::default();
        state.apply(Action::OpenCalculator);
        state.apply(Action::SetUsers(25));
        state.apply(Action::SetCampaigns(8));
        assert_eq!(state.calculator.price(), 49 + 125 + 80);
        state.apply(Action::CloseCalculator);
        state.apply(Action::OpenContact);
        assert!(!state.calculator_open);
        assert!(state.contact_open);
        // Slider values persist across modal visibility.
        assert_eq!(state.calculator.users, 25);
    }

    #[test]
    fn view_state_round_trips_through_serde() {
        let mut state = ViewState::default();
        state.apply(Action::ToggleFaq(1));
        state.apply(Action::EditField(Field::Name, "Jane".into()));
        state.apply(Action::SetUsers(42));
        let json = serde_json::to_string(&state).expect("serialize");
        let back: ViewState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
