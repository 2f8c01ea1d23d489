//! Data models for versemeter
//!
//! Core abstractions:
//! - Corpus: book → chapter → verse → edition → text, in source order
//! - `ChapterRecord`: the included text of one chapter and its scores

pub mod chapter;
pub mod corpus;

pub use chapter::{ChapterRecord, chapter_key};
pub use corpus::{Book, Chapter, Corpus, Editions, OrderedMap};
