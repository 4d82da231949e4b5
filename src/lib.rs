pub mod config;
pub mod domain;
pub mod error;
pub mod journal;
pub mod logger;
pub mod prompt;
pub mod recorder;
pub mod time;

pub use config::Config;
pub use domain::IdeaEntry;
pub use error::IoFailure;
pub use recorder::Recorder;
pub use time::{Clock, FixedClock, SystemClock};
