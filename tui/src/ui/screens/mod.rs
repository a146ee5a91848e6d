pub mod fatal;
pub mod form;

use appraiser::ModelLoader;
use crossterm::event::KeyCode;
use log::error;
use ratatui::Frame;

use crate::state::form::FormState;

pub enum Action {
    None,
    Quit,
}

pub enum Screen<'b> {
    Form(FormState<'b>),
    Fatal(fatal::FatalState),
}

impl<'b> Screen<'b> {
    /// Picks the first screen from the outcome of loading the model.
    ///
    /// The form is only reachable with a usable bundle. Anything else ends on the fatal screen.
    pub fn open(loader: &'b ModelLoader) -> Self {
        let bundle = match loader.load() {
            Ok(Some(bundle)) => bundle,
            Ok(None) => {
                error!("model bundle not found at {}", loader.path().display());
                return Screen::Fatal(fatal::FatalState::missing_bundle(loader.path()));
            }
            Err(e) => {
                error!("failed to load model bundle: {e}");
                return Screen::Fatal(fatal::FatalState::broken_bundle(&e));
            }
        };

        match FormState::new(bundle) {
            Some(state) => Screen::Form(state),
            None => {
                error!("model bundle has no neighborhood columns");
                Screen::Fatal(fatal::FatalState::no_neighborhoods())
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form(s) => form::draw(f, s),
            Screen::Fatal(s) => fatal::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Form(s) => form::handle_key(s, key),
            Screen::Fatal(_) => Action::Quit,
        }
    }
}
