// Service module exports

pub mod countdown;
pub mod intro;
pub mod navigation;
pub mod settings;
pub mod site;
