mod genre;
mod recommendation;
mod selection;

pub use genre::Genre;
pub use recommendation::{Recommendation, ResultSet};
pub use selection::{Selection, UserId};
