use crate::node::NodeId;
use crc32fast::Hasher;
use uuid::Uuid;

/// Source of fresh node identifiers
///
/// Implementations must never hand out the same id twice, and must not
/// produce ids that can appear in trees built by hand (such as `"root"`).
pub trait IdGenerator {
    fn next_id(&mut self) -> NodeId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}

/// Derive a stable id seed from a document name using CRC32
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator: `<seed>-1`, `<seed>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    seed: String,
    count: u64,
}

impl SequentialIds {
    /// Seed from a document name (CRC32 of the name)
    pub fn new(document_name: &str) -> Self {
        Self::from_seed(document_seed(document_name))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        self.count += 1;
        NodeId::new(format!("{}-{}", self.seed, self.count))
    }
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> NodeId {
        NodeId::new(Uuid::new_v4().to_string())
    }
}
