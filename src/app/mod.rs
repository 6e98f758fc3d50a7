pub mod events;
pub mod page;

pub use events::PageEvent;
pub use page::{Page, PageSnapshot};
