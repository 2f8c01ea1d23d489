//! Shared fixtures for unit tests

use versemeter::models::Corpus;
use versemeter::pipeline::{BUILTIN_LETTER, Inputs, LETTER_LABEL, ReferenceText};

/// Two short books in the corpus export layout:
/// book -> chapter -> verse id -> edition -> text
pub const SMALL_CORPUS: &str = r#"{"contents": {
    "1 Nephi": {
        "1": {
            "1 Nephi 1:1": {"1830": "I, Nephi, having been born of goodly parents, therefore I was taught somewhat in all the learning of my father."},
            "1 Nephi 1:2": {"1830": "Yea, I make a record in the language of my father, which consists of the learning of the Jews."},
            "1 Nephi 1:3": {"1830": "And I know that the record which I make is true; and I make it with mine own hand."}
        },
        "2": {
            "1 Nephi 2:1": {"1830": "For behold, the Lord spake unto my father, yea, even in a dream, and said unto him."}
        }
    },
    "Enos": {
        "1": {
            "Enos 1:1": {"1830": "Behold, it came to pass that I, Enos, knowing my father that he was a just man."},
            "Enos 1:2": {"1830": "And I will tell you of the wrestle which I had before God."},
            "Enos 1:3": {"1830": "Behold, I went to hunt beasts in the forests."}
        }
    }
}}"#;

/// Parse [`SMALL_CORPUS`]
pub fn small_corpus() -> Corpus {
    Corpus::from_json(SMALL_CORPUS).unwrap()
}

/// Small corpus with the built-in letter as the only reference
pub fn small_inputs() -> Inputs {
    Inputs {
        corpus: small_corpus(),
        references: vec![ReferenceText::new(LETTER_LABEL, BUILTIN_LETTER)],
    }
}
