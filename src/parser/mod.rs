mod links;

pub use links::extract_links;
