pub mod decode;
pub mod error;
pub mod loader;
pub mod router;
pub mod state;
pub mod viewport;

pub use decode::{decode_detailed, decode_entry, decode_word};
pub use error::{EntryError, LoadError, RouteError, ViewportError};
pub use loader::EntryLoader;
pub use router::{Route, RouteTable, ViewId};
pub use state::AppState;
pub use viewport::{DisplaySource, FixedDisplay, ViewportStore};
