pub mod analyzers;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
pub mod paginate;
pub mod parser;
pub mod report;
pub mod session;
pub mod source;
