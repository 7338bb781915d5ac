pub mod html;
pub mod markup;
pub mod styles;

pub use html::{document_title, render_resume};
