pub mod terminal;
pub mod text;
pub mod timestamps;

pub use terminal::sanitize_line;
pub use text::title_case;
pub use timestamps::format_timestamp;
