/// Story identifier minting for library assembly and story creation.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Lowercase base-36 alphabet.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default token length, matching the identifiers used in story URLs.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// A source of fresh story identifiers. No uniqueness is guaranteed.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random base-36 tokens drawn from any `Rng`.
#[derive(Debug, Clone)]
pub struct RandomIds<R> {
    rng: R,
    length: usize,
}

impl<R: Rng> RandomIds<R> {
    pub fn new(rng: R, length: usize) -> Self {
        Self { rng, length }
    }
}

impl RandomIds<ThreadRng> {
    /// Thread-local randomness with the default token length.
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng(), DEFAULT_ID_LENGTH)
    }
}

impl<R: Rng> IdSource for RandomIds<R> {
    fn next_id(&mut self) -> String {
        (0..self.length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Replays a fixed list of identifiers, wrapping around at the end.
/// An empty list yields empty identifiers.
#[derive(Debug, Clone, Default)]
pub struct FixedIds {
    ids: Vec<String>,
    next: usize,
}

impl FixedIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl IdSource for FixedIds {
    fn next_id(&mut self) -> String {
        if self.ids.is_empty() {
            return String::new();
        }
        let id = self.ids[self.next % self.ids.len()].clone();
        self.next += 1;
        id
    }
}
