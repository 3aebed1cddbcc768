pub mod generate;
pub mod history;
pub mod output;
pub mod template;
