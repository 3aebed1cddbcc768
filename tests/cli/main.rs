
mod generate;
mod history;
mod templates;
