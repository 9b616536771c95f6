//! Domain Services
//!
//! Pure logic over domain entities. File I/O stays behind the ports.

mod differ;
mod renderer;
mod resolver;
mod syntax;

pub use differ::Differ;
pub use renderer::Renderer;
pub use resolver::{AnswerResolver, RawAnswers, Resolution};
pub use syntax::{check_python, Language, OutputValidator};
