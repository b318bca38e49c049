mod latency;
mod repository;
pub mod seed;
mod ticket_store;

pub use latency::Latency;
pub use ticket_store::TicketStore;
