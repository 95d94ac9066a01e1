use std::collections::VecDeque;
use std::fmt;

use hmac::{Hmac, Mac};
use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};
use sha2::Sha256;

use crate::symbols::{Symbol, SymbolCatalog};

/// Provider of uniform draws over a catalog of `len` entries.
pub trait DrawSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn draw_index(&mut self, len: usize) -> usize;
}

impl<S: DrawSource + ?Sized> DrawSource for &mut S {
    fn draw_index(&mut self, len: usize) -> usize {
        (**self).draw_index(len)
    }
}

impl<S: DrawSource + ?Sized> DrawSource for Box<S> {
    fn draw_index(&mut self, len: usize) -> usize {
        (**self).draw_index(len)
    }
}

/// Draws backed by an ordinary `rand` generator.
#[derive(Debug, Clone)]
pub struct EntropySource<R> {
    rng: R,
}

impl<R: RngCore> EntropySource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl EntropySource<ThreadRng> {
    /// Thread-local generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: RngCore> DrawSource for EntropySource<R> {
    fn draw_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

// Provably-fair construction:
// server_seed (secret) + client_seed + nonce -> HMAC-SHA256 -> bytes -> floats in [0,1)

pub type HmacSha256 = Hmac<Sha256>;

pub fn derive_hash_hex(input: &[u8]) -> String {
    hex::encode(derive_hash(input))
}

fn derive_hash(input: &[u8]) -> [u8; 32] {
    use sha2::Digest;
    let mut hasher = Sha256::new();
    hasher.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

fn chunk_to_float(chunk: &[u8]) -> f64 {
    let v = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    (v as f64) / (u32::MAX as f64 + 1.0)
}

pub fn derive_floats(hmac_bytes: &[u8], count: usize) -> Vec<f64> {
    // Successive 4-byte chunks map to [0,1); an exhausted buffer is extended
    // by hashing it.
    let mut out = Vec::with_capacity(count);
    let mut buffer = hmac_bytes.to_vec();
    let mut i = 0usize;
    while out.len() < count {
        if i + 4 > buffer.len() {
            buffer = derive_hash(&buffer).to_vec();
            i = 0;
            continue;
        }
        out.push(chunk_to_float(&buffer[i..i + 4]));
        i += 4;
    }
    out
}

/// Deterministic source keyed by a secret server seed, a public client seed
/// and a nonce. Anyone holding the three values can replay a spin.
#[derive(Clone)]
pub struct ProvablyFairRng {
    server_seed: String,
    pub client_seed: String,
    pub nonce: u64,
    buffer: Vec<u8>,
    offset: usize,
}

impl ProvablyFairRng {
    pub fn new(server_seed: impl Into<String>, client_seed: impl Into<String>, nonce: u64) -> Self {
        let mut rng = Self {
            server_seed: server_seed.into(),
            client_seed: client_seed.into(),
            nonce,
            buffer: Vec::new(),
            offset: 0,
        };
        rng.buffer = rng.hmac_bytes().to_vec();
        rng
    }

    /// Commitment published before the server seed is revealed.
    pub fn server_seed_hash_hex(&self) -> String {
        derive_hash_hex(self.server_seed.as_bytes())
    }

    pub fn hmac_bytes(&self) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(self.server_seed.as_bytes())
            .expect("HMAC accepts keys of any length");
        let msg = format!("{}:{}", self.client_seed, self.nonce);
        mac.update(msg.as_bytes());
        let res = mac.finalize().into_bytes();
        let mut out = [0u8; 32];
        out.copy_from_slice(&res);
        out
    }

    /// First `count` floats of this seed triple, independent of how many
    /// draws have already been taken.
    pub fn floats(&self, count: usize) -> Vec<f64> {
        derive_floats(&self.hmac_bytes(), count)
    }

    fn next_float(&mut self) -> f64 {
        if self.offset + 4 > self.buffer.len() {
            self.buffer = derive_hash(&self.buffer).to_vec();
            self.offset = 0;
        }
        let f = chunk_to_float(&self.buffer[self.offset..self.offset + 4]);
        self.offset += 4;
        f
    }
}

// The server seed stays out of logs; only its commitment is printed.
impl fmt::Debug for ProvablyFairRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvablyFairRng")
            .field("server_seed_hash", &self.server_seed_hash_hex())
            .field("client_seed", &self.client_seed)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

impl DrawSource for ProvablyFairRng {
    fn draw_index(&mut self, len: usize) -> usize {
        ((self.next_float() * len as f64).floor() as usize).min(len - 1)
    }
}

/// Replays a fixed sequence of catalog indices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: indices.into_iter().collect(),
        }
    }

    /// Script that yields the given symbols in order. `None` if any of them
    /// is not in the catalog.
    pub fn of_symbols<'a>(
        catalog: &SymbolCatalog,
        symbols: impl IntoIterator<Item = &'a Symbol>,
    ) -> Option<Self> {
        let indices = symbols
            .into_iter()
            .map(|s| catalog.symbols().iter().position(|c| c == s))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(indices))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedSource {
    /// # Panics
    ///
    /// When the script is exhausted or holds an index outside `0..len`.
    fn draw_index(&mut self, len: usize) -> usize {
        let index = self
            .script
            .pop_front()
            .expect("scripted source ran out of draws");
        assert!(index < len, "scripted index {index} outside catalog of {len}");
        index
    }
}
