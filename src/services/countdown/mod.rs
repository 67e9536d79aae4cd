mod driver;
mod service;

pub use driver::{DriverState, RefreshDriver};
pub use service::CountdownService;
