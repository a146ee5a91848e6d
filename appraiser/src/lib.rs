pub mod bundle;
pub mod config;
pub mod encoder;
pub mod error;
pub mod estimator;
pub mod format;
pub mod input;
pub mod predictor;

pub use bundle::{ModelBundle, ModelLoader, load_bundle};
pub use config::AppConfig;
pub use encoder::FeatureEncoder;
pub use error::{AppraisalError, BundleError, Result};
pub use format::{format_usd, group_thousands};
pub use input::PropertyInput;
pub use predictor::{Appraisal, Appraiser};
