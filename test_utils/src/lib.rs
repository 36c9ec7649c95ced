pub mod constants;

use constants::{DETERMINERS, NOUNS, PREPOSITIONS, VERBS};
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic corpus of `det noun verb prep det noun` sentences.
///
/// Word choice cycles with coprime strides, so the corpus is identical on every call.
pub fn synthetic_corpus(sentence_count: usize) -> String {
    let mut corpus = String::new();

    for i in 0..sentence_count {
        let sentence = [
            DETERMINERS[i % DETERMINERS.len()],
            NOUNS[(i * 7) % NOUNS.len()],
            VERBS[(i * 3) % VERBS.len()],
            PREPOSITIONS[(i * 5) % PREPOSITIONS.len()],
            DETERMINERS[(i + 1) % DETERMINERS.len()],
            NOUNS[(i * 3 + 1) % NOUNS.len()],
        ];
        corpus.push_str(&sentence.join(" "));
        corpus.push('\n');
    }

    corpus
}

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

pub fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Scores every tag sequence by brute force and returns the best one with its probability.
///
/// `emissions[position][tag]` is the emission probability of the word at `position`.
/// The first position uses the emission alone. Ties keep the lexicographically smallest
/// sequence.
pub fn brute_force_best_path(
    emissions: &[Vec<f64>],
    transition: &[Vec<f64>],
) -> (Vec<usize>, f64) {
    let length = emissions.len();
    let tag_count = transition.len();

    let mut best_path = vec![0; length];
    let mut best_score = f64::NEG_INFINITY;

    let total = tag_count.pow(length as u32);
    for code in 0..total {
        // Most significant digit is position 0, so codes ascend lexicographically
        let mut path = vec![0; length];
        let mut rest = code;
        for position in (0..length).rev() {
            path[position] = rest % tag_count;
            rest /= tag_count;
        }

        let score = path_score(&path, emissions, transition);
        if score > best_score {
            best_score = score;
            best_path = path;
        }
    }

    (best_path, best_score)
}

pub fn path_score(path: &[usize], emissions: &[Vec<f64>], transition: &[Vec<f64>]) -> f64 {
    let mut score = 1.0;
    for (position, &tag) in path.iter().enumerate() {
        if position > 0 {
            score *= transition[path[position - 1]][tag];
        }
        score *= emissions[position][tag];
    }
    score
}

pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
