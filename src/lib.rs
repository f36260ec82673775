pub mod amount;
pub mod calculator;
pub mod csv;
pub mod history;
pub mod model;
pub mod parse;
pub mod session;

pub use amount::Amount;
pub use calculator::{SplitTerms, compute_split};
pub use history::SplitHistory;
pub use model::{RoundingMode, SessionEvent, SplitId, SplitInput, SplitRecord};
pub use session::Session;
