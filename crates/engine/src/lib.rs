//! # M2A Engine
//!
//! The tool-invocation pipeline. An invocation (tool name plus argument bag)
//! is looked up in the command catalog, translated into a
//! [`RequestDescriptor`](m2a_types::RequestDescriptor), executed through a
//! [`Backend`](m2a_api::Backend), and formatted into a
//! [`ResultEnvelope`](m2a_types::ResultEnvelope).
//!
//! - **`translate`**: argument validation, placement, defaults and filters
//! - **`format`**: success pass-through, deletion acknowledgements, error text
//! - **`dispatch`**: the [`Dispatcher`] tying the two to a backend

mod dispatch;
mod error;
mod format;
mod translate;

pub use dispatch::Dispatcher;
pub use error::InvocationError;
pub use format::{format_error, format_outcome};
pub use translate::translate;
