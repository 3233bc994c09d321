use crate::models::ConfirmationData;
use crate::session::draft::ProviderDraft;
use serde::{Deserialize, Serialize};

/// Top-level destinations reachable from the header
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Welcome,
    Customer,
    Provider,
    Admin,
    Stays,
}

/// The screen currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Welcome,
    /// Category grid when `category` is `None`, provider list otherwise
    Customer { category: Option<String> },
    /// Provider registration form
    Registration,
    Admin,
    Stays,
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Screen::Welcome => View::Welcome,
            Screen::Customer { .. } => View::Customer,
            Screen::Registration => View::Provider,
            Screen::Admin => View::Admin,
            Screen::Stays => View::Stays,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        match self {
            Screen::Customer { category } => category.as_deref(),
            _ => None,
        }
    }
}

impl From<View> for Screen {
    fn from(view: View) -> Self {
        match view {
            View::Welcome => Screen::Welcome,
            View::Customer => Screen::Customer { category: None },
            View::Provider => Screen::Registration,
            View::Admin => Screen::Admin,
            View::Stays => Screen::Stays,
        }
    }
}

/// The one dialog open over the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Profile(u32),
    ServiceBooking(u32),
    StayBooking(u32),
    EditProvider(ProviderDraft),
    Confirmation(ConfirmationData),
}
