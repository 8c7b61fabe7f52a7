pub mod cleaner;
pub mod concepts;
pub mod heading;
pub mod segmenter;
