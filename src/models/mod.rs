mod user;
mod forms;
mod ticket;

pub use user::{AuthResponse, Role, User};
pub use forms::{AssignForm, CreateTicketForm, LoginForm, StatusForm};
pub use ticket::{next_ticket_id, NewTicket, Ticket, TicketId, TicketStatus};
