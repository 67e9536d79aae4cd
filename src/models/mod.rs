// Module exports for models

pub mod content;
pub mod countdown;
pub mod section;
pub mod settings;
