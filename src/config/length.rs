/// Measures a text segment.
///
/// Chunk size and overlap are both expressed in whatever unit the
/// configured length function returns. Implementations must be pure:
/// the same input always measures the same.
pub trait LengthFunction: Send + Sync {
    fn length(&self, text: &str) -> usize;
}

/// Counts Unicode scalar values (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCount;

impl LengthFunction for CharCount {
    fn length(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Counts UTF-8 bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCount;

impl LengthFunction for ByteCount {
    fn length(&self, text: &str) -> usize {
        text.len()
    }
}

impl<F> LengthFunction for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn length(&self, text: &str) -> usize {
        self(text)
    }
}
