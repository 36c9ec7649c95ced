use pos_inducer::{induce_pos_tags, PipelineConfig};
use std::borrow::Cow;

fn main() {
    env_logger::init();

    let corpus = "the cat sat on the mat\n\
                  a dog ran to the park\n\
                  the bird sang in a tree\n\
                  a child sat on the floor";

    let config = PipelineConfig {
        feature_word_count: 6,
        stopword_cutoff: 2,
        context_window: 2,
        seed_word_indices: Cow::Owned(vec![0, 1, 2, 3]),
        ..PipelineConfig::default()
    };

    let text = "the dog sat on a mat";

    let tagged = induce_pos_tags(corpus, text, &config).unwrap();

    println!("Pseudo-tags for the given text \"{}\"", text);
    for sentence in tagged {
        for (word, tag) in sentence.pairs {
            println!("{}: {}", word, tag);
        }
    }
}
