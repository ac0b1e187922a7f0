mod contact;
mod conversation;
mod corpus;
mod resource;
mod retrieval;

pub use contact::ContactRequest;
pub use conversation::{Conversation, ConversationTurn};
pub use corpus::{Corpus, CorpusEntry};
pub use resource::{KeywordRule, ResourceLink};
pub use retrieval::RetrievalMatch;
