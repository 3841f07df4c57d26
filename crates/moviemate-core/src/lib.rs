pub mod cache;
pub mod filter;
pub mod lookup;

pub use cache::{Library, MovieCache};
pub use filter::{apply, canonical_genre, options_for, FilterCriteria};
pub use lookup::{merge_details, DetailTicket, LookupAssist, LookupPhase, LookupSettings, SearchTicket};
