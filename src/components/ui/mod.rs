mod button;
mod provider_button;
mod spinner;

pub(crate) use button::Button;
pub(crate) use provider_button::ProviderButton;
pub(crate) use spinner::{LoadingScreen, Spinner};
