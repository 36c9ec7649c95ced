pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod euclidean_distance;
pub use euclidean_distance::euclidean_distance;

pub mod first_max_index;
pub use first_max_index::first_max_index;

pub mod read_text_lines;
pub use read_text_lines::{open_text_reader, read_text_lines};

pub mod sort_by_frequency;
pub use sort_by_frequency::sort_by_frequency;
