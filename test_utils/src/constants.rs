/// The two-sentence corpus used by the end-to-end scenario.
pub const TOY_CORPUS: &str = "the cat sat\nthe dog ran\n";

pub const TOY_TEST_SENTENCES: &str = "the cat ran\n";

pub const DETERMINERS: &[&str] = &["the", "a", "this"];

pub const NOUNS: &[&str] = &[
    "cat", "dog", "bird", "horse", "child", "farmer", "river", "house", "tree", "road",
];

pub const VERBS: &[&str] = &["sat", "ran", "saw", "found", "crossed", "liked", "left", "built"];

pub const PREPOSITIONS: &[&str] = &["near", "by", "under", "behind"];
