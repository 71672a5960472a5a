// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod confirmation;
pub mod chat_state;

pub use confirmation::*;
pub use chat_state::*;
