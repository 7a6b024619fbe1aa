pub mod blobs;
pub mod challenges;
pub mod memory;
pub mod messages;
pub mod users;

pub use blobs::BlobStore;
pub use challenges::ChallengeRepository;
pub use memory::MemoryStore;
pub use messages::MessageRepository;
pub use users::UserRepository;
