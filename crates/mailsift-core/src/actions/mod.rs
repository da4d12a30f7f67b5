//! Action dispatch: mapping action names to batch label mutations.
//!
//! An action name is `<OPERATION>` or `<OPERATION>_<LABEL>`; the label
//! argument is the segment after the final underscore. Handlers are thin
//! wrappers over the provider's batch label calls and are idempotent under
//! repeated invocation with the same ids.

mod dispatcher;
mod handlers;

pub use dispatcher::ActionDispatcher;
