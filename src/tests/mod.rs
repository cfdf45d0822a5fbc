mod engine;
mod parse;
