pub mod journey;
pub mod memory;
pub mod scenario;
pub mod user;
pub mod word;

pub use journey::PostgresJourneyRepository;
pub use memory::InMemoryStore;
pub use scenario::PostgresScenarioRepository;
pub use user::PostgresUserRepository;
pub use word::PostgresWordRepository;
