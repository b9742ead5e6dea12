/// Landing page
///
/// One canonical page variant, rendered on the server:
///
/// - `status`: the waitlist form state machine
/// - `display`: spots-remaining and progress math for the counter
/// - `render`: maud markup for the whole page

pub mod display;
pub mod render;
pub mod status;

pub use render::{render_landing, PageView};
pub use status::FormStatus;
