//! Reports which paths in a git repository changed most often.
//!
//! Walks the full commit history, counts how many commits touched each
//! path, and renders the top N as an aligned table.
//!
//! # Example
//!
//! ```no_run
//! use most_changed::ChurnAnalyzer;
//! use most_changed::analyzer::table;
//!
//! let analyzer = ChurnAnalyzer::new("path/to/repo").unwrap();
//! let ranked = analyzer.analyze(10).unwrap();
//! println!("{}", table::render(&ranked));
//! ```

pub mod analyzer;
pub mod config;
pub mod logger;
pub mod render;

pub use analyzer::ChurnAnalyzer;
